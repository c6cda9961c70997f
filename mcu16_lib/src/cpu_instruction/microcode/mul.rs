use super::*;

pub fn mul(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    let product = registers.get(register) as i32 * registers.get(source) as i32;
    registers.set(register, product as i16);
    registers.update_carry(product);
    registers.update_zero(product);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "(0x{:08x}){}",
            product as u32,
            register_outcome(registers, register)
        ),
    ))
}
