use std::{
    fs,
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use libemulator::Emulator;

mod loader;
mod report;

/// Number of leading memory cells included in the final state report.
const MEM_DUMP_WORDS: usize = 128;

#[derive(Parser, Debug)]
#[command(version, about = "Simulate an E20 machine code program")]
pub struct Args {
    /// File containing machine code, typically with a .bin suffix.
    filename: PathBuf,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut emulator = match load_emulator(&args.filename) {
        Ok(emulator) => emulator,
        Err(e) => {
            eprintln!("Failed to load machine code: {:#}", e);
            exit(1);
        }
    };

    emulator.execute_to_halt();

    print!("{}", report::format_state(&emulator, MEM_DUMP_WORDS));
}

fn load_emulator(path: &Path) -> anyhow::Result<Emulator> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read program file {}", path.display()))?;

    let program = loader::load_machine_code(&source)?;

    Emulator::new(program)
}
