use super::*;

pub fn push(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let value = registers.get(register);
    registers.stack_push(value);

    Ok(LogLine::new(
        cpu_instruction,
        format!("(0x{:04x})[SP=0x{:04x}]", value as u16, registers.sp()),
    ))
}
