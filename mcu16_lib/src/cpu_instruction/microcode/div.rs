use super::*;

/*
 * DIV Ra1, Ra2
 * Integer division truncated toward zero, a zero divisor is a fault and
 * leaves the registers untouched.
 */
pub fn div(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let source = cpu_instruction.operands.source()?;
    let divisor = registers.get(source);

    if divisor == 0 {
        return Err(MicrocodeError::DivisionByZero(cpu_instruction.address));
    }

    registers.set(register, registers.get(register).wrapping_div(divisor));
    registers.update_zero(registers.get(register) as i32);

    Ok(LogLine::new(
        cpu_instruction,
        register_outcome(registers, register),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::operands::Operands;

    #[test]
    fn test_div() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x28, "DIV", Operands::Pair([0x03, 0x04]), div);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x28, 0x03, 0x04]);
        registers.set(3, -7);
        registers.set(4, 2);
        let log_line = cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        assert_eq!("DIV".to_owned(), log_line.mnemonic);
        assert_eq!(-3, registers.get(3));
        assert!(!registers.z_flag_is_set());
    }

    #[test]
    fn test_div_with_z_flag() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x28, "DIV", Operands::Pair([0x03, 0x04]), div);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x28, 0x03, 0x04]);
        registers.set(3, 3);
        registers.set(4, 4);
        registers.set_c_flag(true);
        cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        assert_eq!(0, registers.get(3));
        assert!(registers.z_flag_is_set());
        assert!(registers.c_flag_is_set());
    }

    #[test]
    fn test_div_min_by_minus_one_wraps() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x28, "DIV", Operands::Pair([0x03, 0x04]), div);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x28, 0x03, 0x04]);
        registers.set(3, i16::MIN);
        registers.set(4, -1);
        cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        assert_eq!(i16::MIN, registers.get(3));
    }

    #[test]
    fn test_div_by_zero() {
        let cpu_instruction =
            CPUInstruction::new(0x0010, 0x28, "DIV", Operands::Pair([0x03, 0x04]), div);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x28, 0x03, 0x04]);
        registers.set(3, 42);
        let before = registers.clone();
        let err = cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap_err();
        assert_eq!(MicrocodeError::DivisionByZero(0x0010), err);
        assert_eq!("division by zero at address #0x0010", err.to_string());
        assert_eq!(before, registers);
    }
}
