use super::*;

pub fn pop(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let value = registers.stack_pull();
    registers.set(register, value);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[R{:02X}=0x{:04x}][SP=0x{:04x}]",
            register,
            registers.get(register) as u16,
            registers.sp()
        ),
    ))
}
