use miette::*;

use pipes::process;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let result = process(input)?;
    println!("Result: {}", result);
    Ok(())
}
