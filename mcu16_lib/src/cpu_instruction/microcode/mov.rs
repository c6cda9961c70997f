use super::*;

/// MOV Ra1, Ra2
pub fn mov(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    registers.set(register, registers.get(source));

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}

/// MOV Ra1, [Ra2]
pub fn mov_from_indirect(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    registers.set(register, registers.get_indirect(source));

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}

/// MOV [Ra1], Ra2
pub fn mov_to_indirect(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    let destination = (registers.get(register) & 0xff) as u8;
    registers.set(destination, registers.get(source));

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, destination),
    ))
}

/// MOV Ra1, L with L a signed byte
pub fn mov_literal(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let literal = sign_extend(cpu_instruction.operands.source()?);
    registers.set(register, literal);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}

/// MOV Ra1, LL with LL a 16 bits word
pub fn mov_wide(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let literal = cpu_instruction.operands.target()? as i16;
    registers.set(register, literal);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}
