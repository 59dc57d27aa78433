use miette::*;

use crate::{grid, peel, THRESHOLD};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = grid::parse(input)?;
    let accessible_count = peel::count_fragile(&grid, THRESHOLD);
    Ok(accessible_count.to_string())
}
