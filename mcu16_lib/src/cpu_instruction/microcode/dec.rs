use super::*;

pub fn dec(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let result = registers.get(register) as i32 - 1;
    registers.set(register, result as i16);
    registers.update_zero(result);
    registers.update_carry(result);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}
