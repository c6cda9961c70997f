use super::*;

/// ADD Ra1, Ra2, only CARRY is updated
pub fn add(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    let sum = registers.get(register) as i32 + registers.get(source) as i32;
    registers.set(register, sum as i16);
    registers.update_carry(sum);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}

/// ADD Ra1, LL
pub fn add_wide(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let literal = cpu_instruction.operands.target()? as i16;
    let sum = registers.get(register) as i32 + literal as i32;
    registers.set(register, sum as i16);
    registers.update_zero(sum);
    registers.update_carry(sum);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}
