use super::cpu_instruction::microcode;
use super::cpu_instruction::microcode::Result as MicrocodeResult;
use super::cpu_instruction::{CPUInstruction, LogLine};
use super::interrupts::InterruptTable;
use super::memory::AddressableIO;
use super::operands::Operands;
use super::registers::Registers;

pub fn resolve_opcode(
    address: u16,
    opcode: u8,
    memory: &dyn AddressableIO,
) -> MicrocodeResult<CPUInstruction> {
    let operands = Operands::fetch(address, opcode, memory)?;
    let cpu_instruction = match opcode {
        0x01 => CPUInstruction::new(address, opcode, "NOP", operands, microcode::nop),
        0x02 => CPUInstruction::new(address, opcode, "RET", operands, microcode::ret),
        0x03 => CPUInstruction::new(address, opcode, "RETI", operands, microcode::reti),
        0x04 => CPUInstruction::new(address, opcode, "CLI", operands, microcode::cli),
        0x05 => CPUInstruction::new(address, opcode, "STI", operands, microcode::sti),
        0x06 => CPUInstruction::new(address, opcode, "HLT", operands, microcode::hlt),
        0x10 => CPUInstruction::new(address, opcode, "INC", operands, microcode::inc),
        0x11 => CPUInstruction::new(address, opcode, "DEC", operands, microcode::dec),
        0x12 => CPUInstruction::new(address, opcode, "PUSH", operands, microcode::push),
        0x13 => CPUInstruction::new(address, opcode, "POP", operands, microcode::pop),
        0x20 => CPUInstruction::new(address, opcode, "MOV", operands, microcode::mov),
        0x21 => CPUInstruction::new(address, opcode, "MOV", operands, microcode::mov_from_indirect),
        0x22 => CPUInstruction::new(address, opcode, "MOV", operands, microcode::mov_to_indirect),
        0x23 => CPUInstruction::new(address, opcode, "MOV", operands, microcode::mov_literal),
        0x24 => CPUInstruction::new(address, opcode, "AND", operands, microcode::and),
        0x25 => CPUInstruction::new(address, opcode, "OR", operands, microcode::or),
        0x26 => CPUInstruction::new(address, opcode, "XOR", operands, microcode::xor),
        0x27 => CPUInstruction::new(address, opcode, "MUL", operands, microcode::mul),
        0x28 => CPUInstruction::new(address, opcode, "DIV", operands, microcode::div),
        0x29 => CPUInstruction::new(address, opcode, "ADD", operands, microcode::add),
        0x2a => CPUInstruction::new(address, opcode, "SUB", operands, microcode::sub),
        0x2b => CPUInstruction::new(address, opcode, "JMP", operands, microcode::jmp),
        0x2c => CPUInstruction::new(address, opcode, "CALL", operands, microcode::call),
        0x2d => CPUInstruction::new(address, opcode, "JE", operands, microcode::je),
        0x2e => CPUInstruction::new(address, opcode, "JNE", operands, microcode::jne),
        0x2f => CPUInstruction::new(address, opcode, "JO", operands, microcode::jo),
        0x30 => CPUInstruction::new(address, opcode, "JNO", operands, microcode::jno),
        0x31 => CPUInstruction::new(address, opcode, "CMP", operands, microcode::cmp),
        0x32 => CPUInstruction::new(address, opcode, "CMP", operands, microcode::cmp_literal),
        0x40 => CPUInstruction::new(address, opcode, "LPM", operands, microcode::lpm),
        0x41 => CPUInstruction::new(address, opcode, "AND", operands, microcode::and_wide),
        0x42 => CPUInstruction::new(address, opcode, "OR", operands, microcode::or_wide),
        0x43 => CPUInstruction::new(address, opcode, "XOR", operands, microcode::xor_wide),
        0x44 => CPUInstruction::new(address, opcode, "ADD", operands, microcode::add_wide),
        0x45 => CPUInstruction::new(address, opcode, "SUB", operands, microcode::sub_wide),
        0x46 => CPUInstruction::new(address, opcode, "CMP", operands, microcode::cmp_wide),
        0x47 => CPUInstruction::new(address, opcode, "INT", operands, microcode::int),
        0x48 => CPUInstruction::new(address, opcode, "MOV", operands, microcode::mov_wide),
        // unassigned opcodes of a known length only consume their operands
        _ => CPUInstruction::new(address, opcode, "???", operands, microcode::nop),
    };

    Ok(cpu_instruction)
}

/*
 * execute_step
 * Fetch the instruction PC points at, move PC past it and run its microcode.
 * When the opcode cannot be decoded, PC still moves past the opcode byte.
 */
pub fn execute_step(
    registers: &mut Registers,
    interrupts: &mut InterruptTable,
    memory: &dyn AddressableIO,
) -> MicrocodeResult<LogLine> {
    let address = registers.pc();
    let opcode = memory.read(address);
    let cpu_instruction = match resolve_opcode(address, opcode, memory) {
        Ok(v) => v,
        Err(e) => {
            registers.set_pc(address.wrapping_add(1));
            return Err(e);
        }
    };

    registers.set_pc(cpu_instruction.next_address());
    cpu_instruction.execute(memory, registers, interrupts)
}

/*
 * Processor
 * Complete machine state: the register file and the interrupt table. Each
 * instance is independent, the instruction stream is handed over at each
 * step.
 */
#[derive(Debug, Clone, Default)]
pub struct Processor {
    registers: Registers,
    interrupts: InterruptTable,
}

impl Processor {
    pub fn new() -> Processor {
        Processor::default()
    }

    pub fn reset(&mut self) {
        self.registers.initialize();
        self.interrupts.clear();
    }

    pub fn step(&mut self, memory: &dyn AddressableIO) -> MicrocodeResult<LogLine> {
        execute_step(&mut self.registers, &mut self.interrupts, memory)
    }

    pub fn is_running(&self) -> bool {
        !self.registers.h_flag_is_set()
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    /// Registered vectors, for hosts implementing interrupt delivery.
    pub fn interrupts(&self) -> &InterruptTable {
        &self.interrupts
    }
}
