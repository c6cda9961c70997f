use super::*;

pub fn reti(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let address = registers.stack_pull() as u16;
    registers.set_pc(address);
    let flags = registers.stack_pull();
    registers.set(crate::registers::FLAGS, flags);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[PC=0x{:04X}][SP=0x{:04x}][S={}]",
            registers.pc(),
            registers.sp(),
            registers.format_status()
        ),
    ))
}
