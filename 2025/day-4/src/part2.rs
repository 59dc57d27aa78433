use miette::*;

use crate::{grid, peel, THRESHOLD};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut grid = grid::parse(input)?;
    let total_removed = peel::peel_to_fixed_point(&mut grid, THRESHOLD);
    Ok(total_removed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("43", process(input)?);
        Ok(())
    }
}
