use super::*;

/// LPM Ra1, PP: loads the big endian word stored at PP in program memory.
pub fn lpm(
    memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let target_address = cpu_instruction.operands.target()?;
    registers.set(register, memory.read_word(target_address) as i16);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}
