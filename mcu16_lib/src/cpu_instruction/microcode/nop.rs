use super::*;

pub fn nop(
    _memory: &dyn AddressableIO,
    _registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(cpu_instruction, String::new()))
}
