use super::*;

pub fn jno(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let target_address = cpu_instruction.operands.target()?;

    if !registers.c_flag_is_set() {
        registers.set_pc(target_address);
    }

    Ok(LogLine::new(cpu_instruction, jump_outcome(registers)))
}
