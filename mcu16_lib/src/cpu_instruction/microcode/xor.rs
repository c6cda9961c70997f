use super::*;

/// XOR Ra1, Ra2
pub fn xor(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    registers.set(register, registers.get(register) ^ registers.get(source));
    registers.update_zero(registers.get(register) as i32);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}

/// XOR Ra1, LL
pub fn xor_wide(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let literal = cpu_instruction.operands.target()? as i16;
    registers.set(register, registers.get(register) ^ literal);
    registers.update_zero(registers.get(register) as i32);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}
