use miette::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let (answer1, answer2) = aoc2025_day_4::solve(input)?;
    println!("answer1: {answer1}, answer2: {answer2}");
    Ok(())
}
