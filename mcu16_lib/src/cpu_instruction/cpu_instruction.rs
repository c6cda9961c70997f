use super::microcode::Result as MicrocodeResult;
use crate::interrupts::InterruptTable;
use crate::memory::AddressableIO;
use crate::operands::Operands;
use crate::registers::Registers;
use std::fmt;

pub type BoxedMicrocode = Box<
    dyn Fn(
        &dyn AddressableIO,
        &mut Registers,
        &mut InterruptTable,
        &CPUInstruction,
    ) -> MicrocodeResult<LogLine>,
>;

pub struct CPUInstruction {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: String,
    pub operands: Operands,
    pub microcode: BoxedMicrocode,
}

impl CPUInstruction {
    pub fn new(
        address: u16,
        opcode: u8,
        mnemonic: &str,
        operands: Operands,
        microcode: impl Fn(
                &dyn AddressableIO,
                &mut Registers,
                &mut InterruptTable,
                &CPUInstruction,
            ) -> MicrocodeResult<LogLine>
            + 'static,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: mnemonic.to_owned(),
            operands,
            microcode: Box::new(microcode),
        }
    }

    /// Address of the next instruction in the stream.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(1 + self.operands.len() as u16)
    }

    pub fn execute(
        &self,
        memory: &dyn AddressableIO,
        registers: &mut Registers,
        interrupts: &mut InterruptTable,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, interrupts, self)
    }
}

fn format_byte_sequence(opcode: u8, operands: &Operands) -> String {
    let mut bytes = vec![opcode];

    for i in operands.get_operands() {
        bytes.push(i);
    }

    format!(
        "({})",
        bytes
            .iter()
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
    )
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {}",
            self.address,
            format_byte_sequence(self.opcode, &self.operands),
            self.mnemonic,
            self.operands
        )
    }
}

#[derive(Debug, Clone)]
pub struct LogLine {
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: String,
    pub operands: Operands,
    pub outcome: String,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, outcome: String) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic.clone(),
            operands: cpu_instruction.operands,
            outcome,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {}  {}",
            self.address,
            format_byte_sequence(self.opcode, &self.operands),
            self.mnemonic,
            self.operands,
            self.outcome
        )
    }
}
