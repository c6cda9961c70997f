use super::*;

pub fn inc(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operands.register()?;
    let result = registers.get(register) as i32 + 1;
    registers.set(register, result as i16);
    registers.update_zero(result);
    registers.update_carry(result);

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
    fn test_inc() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x10, "INC", Operands::Register([0x03]), inc);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x10, 0x03]);
        registers.set(3, 0x0028);
        let log_line = cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        assert_eq!("INC".to_owned(), log_line.mnemonic);
        assert_eq!(0x0029, registers.get(3));
        assert!(!registers.z_flag_is_set());
        assert!(!registers.c_flag_is_set());
        assert_eq!(
            "#0x0000: (10 03)       INC             [R03=0x0029][S=zcih]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_inc_with_z_flag() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x10, "INC", Operands::Register([0x03]), inc);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x10, 0x03]);
        registers.set(3, -1);
        cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        assert_eq!(0x0000, registers.get(3));
        assert!(registers.z_flag_is_set());
        assert!(!registers.c_flag_is_set());
    }

    #[test]
    fn test_inc_signed_wrap() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x10, "INC", Operands::Register([0x03]), inc);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x10, 0x03]);
        registers.set(3, i16::MAX);
        cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        // 0x00008000 has nothing in bits 16 to 19
        assert_eq!(i16::MIN, registers.get(3));
        assert!(!registers.z_flag_is_set());
        assert!(!registers.c_flag_is_set());
    }
}
