use super::*;

/// INT n, PP: registers PP as the vector of interrupt n, n above 31 is ignored.
pub fn int(
    _memory: &dyn AddressableIO,
    _registers: &mut Registers,
    interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let number = cpu_instruction.operands.register()?;
    let target_address = cpu_instruction.operands.target()?;

    let outcome = if interrupts.set_vector(number, target_address) {
        format!("[INT{:02}=#0x{:04X}]", number, target_address)
    } else {
        format!("[INT{:02} ignored]", number)
    };

    Ok(LogLine::new(cpu_instruction, outcome))
}
