use super::*;

pub fn sti(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.set_i_flag(true);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", registers.format_status()),
    ))
}
