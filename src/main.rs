use std::path::Path;

use anyhow::Result;
use env_logger::Env;

use sudoku_icons::{IconSet, COMPLETION_MESSAGE};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    IconSet::default().write_to(Path::new("."))?;

    println!("{}", COMPLETION_MESSAGE);
    Ok(())
}
