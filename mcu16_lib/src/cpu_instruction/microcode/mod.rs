mod error;
pub use error::{MicrocodeError, Result};

use crate::cpu_instruction::{CPUInstruction, LogLine};
use crate::interrupts::InterruptTable;
use crate::memory::AddressableIO;
use crate::registers::Registers;

mod add;
mod and;
mod call;
mod cli;
mod cmp;
mod dec;
mod div;
mod hlt;
mod inc;
mod int;
mod je;
mod jmp;
mod jne;
mod jno;
mod jo;
mod lpm;
mod mov;
mod mul;
mod nop;
mod or;
mod pop;
mod push;
mod ret;
mod reti;
mod sti;
mod sub;
mod xor;

pub use add::{add, add_wide};
pub use and::{and, and_wide};
pub use call::call;
pub use cli::cli;
pub use cmp::{cmp, cmp_literal, cmp_wide};
pub use dec::dec;
pub use div::div;
pub use hlt::hlt;
pub use inc::inc;
pub use int::int;
pub use je::je;
pub use jmp::jmp;
pub use jne::jne;
pub use jno::jno;
pub use jo::jo;
pub use lpm::lpm;
pub use mov::{mov, mov_from_indirect, mov_literal, mov_to_indirect, mov_wide};
pub use mul::mul;
pub use nop::nop;
pub use or::{or, or_wide};
pub use pop::pop;
pub use push::push;
pub use ret::ret;
pub use reti::reti;
pub use sti::sti;
pub use sub::{sub, sub_wide};
pub use xor::{xor, xor_wide};

fn register_outcome(registers: &Registers, index: u8) -> String {
    format!(
        "[R{:02X}=0x{:04x}][S={}]",
        index,
        registers.get(index) as u16,
        registers.format_status()
    )
}

fn jump_outcome(registers: &Registers) -> String {
    format!("[PC=0x{:04X}]", registers.pc())
}

fn sign_extend(byte: u8) -> i16 {
    byte as i8 as i16
}
