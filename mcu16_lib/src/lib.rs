//! MCU16 decode-execute engine.
//!
//! A `Processor` owns the 256 cells register file and the interrupt table, the
//! firmware image is handed over as an `AddressableIO` at each step.
mod cpu_instruction;
mod interrupts;
pub mod memory;
mod operands;
mod processing_unit;
mod registers;

pub use cpu_instruction::microcode::MicrocodeError;
pub use cpu_instruction::{BoxedMicrocode, CPUInstruction, LogLine};
pub use interrupts::{InterruptTable, INTERRUPT_COUNT};
pub use memory::{AddressableIO, MemoryError, PROGRAM_SIZE, ROM};
pub use operands::{DecodeError, Operands};
pub use processing_unit::*;
pub use registers::{
    Registers, FLAGS, FLAG_CARRY, FLAG_HLT, FLAG_IE, FLAG_ZERO, PC, REGISTER_COUNT, SP, STACK_INIT,
};
