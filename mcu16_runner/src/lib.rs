use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use mcu16_lib::{AddressableIO, Processor, PROGRAM_SIZE, ROM};

pub type AppResult<T> = anyhow::Result<T>;

/// Default log directive for the given `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/*
 * load_firmware
 * Read a firmware image from disk. Only the first PROGRAM_SIZE bytes are
 * reachable by the processor, anything past that is dropped.
 */
pub fn load_firmware(path: &Path) -> AppResult<ROM> {
    let mut bytes = fs::read(path)
        .with_context(|| format!("Could not read firmware file '{}'.", path.display()))?;

    if bytes.len() > PROGRAM_SIZE {
        tracing::warn!(
            "firmware is {} bytes long, only the first {} bytes are kept",
            bytes.len(),
            PROGRAM_SIZE
        );
        bytes.truncate(PROGRAM_SIZE);
    }

    let memory = ROM::new(bytes)
        .with_context(|| format!("Could not load firmware file '{}'.", path.display()))?;
    tracing::debug!("firmware '{}' loaded", path.display());

    Ok(memory)
}

/*
 * run
 * Step the processor until it halts or max_steps instructions ran. When a
 * trace output is given, each executed instruction is written there. Returns
 * the number of executed instructions.
 */
pub fn run(
    processor: &mut Processor,
    memory: &dyn AddressableIO,
    max_steps: Option<u64>,
    mut trace: Option<&mut dyn Write>,
) -> AppResult<u64> {
    let mut steps: u64 = 0;

    while processor.is_running() {
        if max_steps.is_some_and(|max| steps >= max) {
            tracing::info!("stopped after {} steps, processor still running", steps);
            return Ok(steps);
        }

        let log_line = match processor.step(memory) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("processor fault after {} steps: {}", steps, e);
                return Err(e).with_context(|| format!("Execution stopped after {} steps", steps));
            }
        };
        steps += 1;
        tracing::trace!("{}", log_line);

        if let Some(output) = trace.as_mut() {
            writeln!(output, "{}", log_line)?;
        }
    }

    tracing::info!(
        "processor halted after {} steps at #0x{:04X}",
        steps,
        processor.registers().pc()
    );

    Ok(steps)
}
