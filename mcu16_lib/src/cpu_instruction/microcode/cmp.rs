use super::*;

fn compare(registers: &mut Registers, register: u8, operand: i16) -> String {
    let difference = registers.get(register) as i32 - operand as i32;
    registers.update_zero(difference);
    registers.update_carry(difference);

    format!(
        "(0x{:04x})[R{:02X}=0x{:04x}][S={}]",
        operand as u16,
        register,
        registers.get(register) as u16,
        registers.format_status()
    )
}

/// CMP Ra1, Ra2
pub fn cmp(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let operand = registers.get(cpu_instruction.operands.source()?);
    let outcome = compare(registers, register, operand);

    Ok(LogLine::new(cpu_instruction, outcome))
}

/// CMP Ra1, L with L a signed byte
pub fn cmp_literal(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let operand = sign_extend(cpu_instruction.operands.source()?);
    let outcome = compare(registers, register, operand);

    Ok(LogLine::new(cpu_instruction, outcome))
}

/// CMP Ra1, LL
pub fn cmp_wide(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let operand = cpu_instruction.operands.target()? as i16;
    let outcome = compare(registers, register, operand);

    Ok(LogLine::new(cpu_instruction, outcome))
}
