use super::*;

/// SUB Ra1, Ra2, ZERO is evaluated on the stored register after CARRY
pub fn sub(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    let difference = registers.get(register) as i32 - registers.get(source) as i32;
    registers.set(register, difference as i16);
    registers.update_carry(difference);
    registers.update_zero(registers.get(register) as i32);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}

/// SUB Ra1, LL
pub fn sub_wide(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let literal = cpu_instruction.operands.target()? as i16;
    let difference = registers.get(register) as i32 - literal as i32;
    registers.set(register, difference as i16);
    registers.update_zero(difference);
    registers.update_carry(difference);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}
