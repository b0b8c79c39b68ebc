use anyhow::{Context, Result};
use clap::Parser;
use puzzle1::CLIArgs;

fn main() -> Result<()> {
    let args = match CLIArgs::try_parse() {
        Ok(args) => args,
        Err(_) => {
            println!("Usage: part1 <input_file_path>");
            return Ok(());
        }
    };

    let insts = puzzle1::read_insts(&args.input_path).with_context(|| {
        format!(
            "Failed to read rotation instructions from given input file({}).",
            args.input_path.display()
        )
    })?;
    let password = puzzle1::count_password(&insts);
    println!("Password: {}", password);

    Ok(())
}
