use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use mcu16_lib::{AddressableIO, Processor};
use mcu16_runner::{load_firmware, log_level, run};
use tracing_subscriber::EnvFilter;

/// MCU16 firmware runner
/// Loads a firmware image and runs it from address 0x0000 until the
/// processor halts.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Firmware image to run
    firmware: Option<PathBuf>,

    /// Log verbosity, repeat for more (RUST_LOG takes precedence)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Stop after this many instructions even if the processor did not halt
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print every executed instruction
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let parameters = CommandLineArguments::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(parameters.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let Some(firmware) = parameters.firmware else {
        CommandLineArguments::command().print_help()?;
        return Ok(());
    };

    let memory = load_firmware(&firmware)?;
    println!("Firmware: loaded {} bytes.", memory.get_size());

    let mut processor = Processor::new();
    processor.reset();

    let mut stdout = io::stdout();
    let trace: Option<&mut dyn io::Write> = if parameters.trace {
        Some(&mut stdout)
    } else {
        None
    };
    run(&mut processor, &memory, parameters.max_steps, trace)?;

    Ok(())
}
