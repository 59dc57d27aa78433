use miette::*;

pub mod grid;
pub mod part1;
pub mod part2;
pub mod peel;

/// A roll is reachable when fewer than this many neighbouring cells hold rolls.
pub const THRESHOLD: usize = 4;

/// Computes both answers from one parse.
///
/// The fragile count has to be taken before peeling, which consumes the grid.
#[tracing::instrument(skip(input))]
pub fn solve(input: &str) -> Result<(usize, usize)> {
    let mut grid = grid::parse(input)?;
    let accessible = peel::count_fragile(&grid, THRESHOLD);
    let removed = peel::peel_to_fixed_point(&mut grid, THRESHOLD);
    Ok((accessible, removed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_both_parts() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";
        assert_eq!((13, 43), solve(input)?);
        Ok(())
    }
}
