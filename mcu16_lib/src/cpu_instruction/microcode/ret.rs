use super::*;

pub fn ret(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let address = registers.stack_pull() as u16;
    registers.set_pc(address);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[PC=0x{:04X}][SP=0x{:04x}]", registers.pc(), registers.sp()),
    ))
}
