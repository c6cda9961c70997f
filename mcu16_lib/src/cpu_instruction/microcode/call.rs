use super::*;

pub fn call(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let target_address = cpu_instruction.operands.target()?;
    registers.stack_push(registers.pc() as i16);
    registers.set_pc(target_address);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[PC=0x{:04X}][SP=0x{:04x}]", registers.pc(), registers.sp()),
    ))
}
