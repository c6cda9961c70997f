use super::*;

pub fn jo(
    _memory: &dyn AddressableIO,
    registers: &mut Registers,
    _interrupts: &mut InterruptTable,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let target_address = cpu_instruction.operands.target()?;

    if registers.c_flag_is_set() {
        registers.set_pc(target_address);
    }

    Ok(LogLine::new(cpu_instruction, jump_outcome(registers)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::operands::Operands;

    #[test]
    fn test_jo_branch() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x2f, "JO", Operands::Pair([0x01, 0x00]), jo);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x2f, 0x01, 0x00]);
        registers.set_pc(0x0003);
        registers.set_c_flag(true);
        let log_line = cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        assert_eq!("JO".to_owned(), log_line.mnemonic);
        assert_eq!(0x0100, registers.pc());
    }

    #[test]
    fn test_jo_no_branch() {
        let cpu_instruction =
            CPUInstruction::new(0x0000, 0x2f, "JO", Operands::Pair([0x01, 0x00]), jo);
        let (memory, mut registers, mut interrupts) = get_stuff(vec![0x2f, 0x01, 0x00]);
        registers.set_pc(0x0003);
        registers.set_c_flag(false);
        cpu_instruction
            .execute(&memory, &mut registers, &mut interrupts)
            .unwrap();
        assert_eq!(0x0003, registers.pc());
    }
}
