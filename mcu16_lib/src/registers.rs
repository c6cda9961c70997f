use std::fmt;
/*
 * MCU16 register file
 * 256 signed 16 bits cells used both as registers and as memory reachable
 * through indirect addressing. The first three cells have a meaning for the
 * processor:
 * cell 0: program counter, address of the next byte to fetch.
 * cell 1: stack pointer, index of the next free stack cell, set at 252 on
 *         reset. The stack grows downward in the very same cells.
 * cell 2: status flags register :
 *   bit 3: Halted
 *   bit 2: Interrupts enabled
 *   bit 1: Carry flag (bits 16 to 19 of the last 32 bits result)
 *   bit 0: Zero flag
 */
pub const REGISTER_COUNT: usize = 256;
pub const PC: u8 = 0;
pub const SP: u8 = 1;
pub const FLAGS: u8 = 2;
pub const STACK_INIT: i16 = 252;

pub const FLAG_ZERO: i16 = 0b0001;
pub const FLAG_CARRY: i16 = 0b0010;
pub const FLAG_IE: i16 = 0b0100;
pub const FLAG_HLT: i16 = 0b1000;

const CARRY_MASK: i32 = 0x000f_0000;

#[derive(Clone, PartialEq, Eq)]
pub struct Registers {
    cells: [i16; REGISTER_COUNT],
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    pub fn new() -> Registers {
        let mut registers = Registers {
            cells: [0; REGISTER_COUNT],
        };
        registers.initialize();

        registers
    }

    /// Puts PC, SP and FLAGS back in their power-on state. General purpose
    /// cells keep their values.
    pub fn initialize(&mut self) {
        self.set_pc(0x0000);
        self.set(SP, STACK_INIT);
        self.set(FLAGS, 0);
    }

    pub fn get(&self, index: u8) -> i16 {
        self.cells[index as usize]
    }

    pub fn set(&mut self, index: u8, value: i16) {
        self.cells[index as usize] = value;
    }

    /// Reads the cell addressed by the low byte of the given register.
    pub fn get_indirect(&self, index: u8) -> i16 {
        self.get(Self::indirect_index(self.get(index)))
    }

    /// Writes the cell addressed by the low byte of the given register.
    pub fn set_indirect(&mut self, index: u8, value: i16) {
        self.set(Self::indirect_index(self.get(index)), value);
    }

    fn indirect_index(value: i16) -> u8 {
        (value & 0xff) as u8
    }

    pub fn pc(&self) -> u16 {
        self.get(PC) as u16
    }

    pub fn set_pc(&mut self, address: u16) {
        self.set(PC, address as i16);
    }

    pub fn sp(&self) -> i16 {
        self.get(SP)
    }

    pub fn flags(&self) -> i16 {
        self.get(FLAGS)
    }

    pub fn stack_push(&mut self, value: i16) {
        let sp = self.sp();
        self.set(Self::indirect_index(sp), value);
        self.set(SP, sp.wrapping_sub(1));
    }

    pub fn stack_pull(&mut self) -> i16 {
        let sp = self.sp().wrapping_add(1);
        self.set(SP, sp);

        self.get(Self::indirect_index(sp))
    }

    fn flag_is_set(&self, flag: i16) -> bool {
        self.flags() & flag == flag
    }

    fn set_flag(&mut self, flag: i16, value: bool) {
        let flags = self.flags();

        if value {
            self.set(FLAGS, flags | flag);
        } else {
            self.set(FLAGS, flags & !flag);
        }
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_ZERO)
    }

    pub fn c_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_CARRY)
    }

    pub fn i_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_IE)
    }

    pub fn h_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_HLT)
    }

    pub fn set_z_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_ZERO, flag);
    }

    pub fn set_c_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_CARRY, flag);
    }

    pub fn set_i_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_IE, flag);
    }

    pub fn set_h_flag(&mut self, flag: bool) {
        self.set_flag(FLAG_HLT, flag);
    }

    /// ZERO is evaluated on the result truncated to 16 bits.
    pub fn update_zero(&mut self, result: i32) {
        self.set_z_flag(result as i16 == 0);
    }

    /// CARRY reports bits 16 to 19 of a 32 bits intermediate result.
    pub fn update_carry(&mut self, result: i32) {
        self.set_c_flag(result & CARRY_MASK != 0);
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}{}{}",
            if self.z_flag_is_set() { "Z" } else { "z" },
            if self.c_flag_is_set() { "C" } else { "c" },
            if self.i_flag_is_set() { "I" } else { "i" },
            if self.h_flag_is_set() { "H" } else { "h" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [PC:0x{:04x} SP:0x{:04x} | {}]",
            self.pc(),
            self.sp() as u16,
            self.format_status()
        )?;

        for (index, row) in self.cells.chunks(16).enumerate() {
            let line = row
                .iter()
                .fold(String::new(), |acc, cell| format!("{} {:04x}", acc, *cell as u16));
            write!(f, "\n#0x{:02X}:{}", index * 16, line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_registers() {
        let registers = Registers::new();
        assert_eq!(0x0000, registers.pc());
        assert_eq!(252, registers.sp());
        assert_eq!(0, registers.flags());
        assert!(!registers.z_flag_is_set());
        assert!(!registers.c_flag_is_set());
        assert!(!registers.i_flag_is_set());
        assert!(!registers.h_flag_is_set());
    }

    #[test]
    fn test_set_flags() {
        let mut registers = Registers::new();
        registers.set_z_flag(true);
        registers.set_c_flag(true);
        registers.set_i_flag(true);
        registers.set_h_flag(true);
        assert_eq!(0b1111, registers.flags());
        assert_eq!("ZCIH", registers.format_status());
        registers.set_z_flag(false);
        registers.set_h_flag(false);
        assert!(!registers.z_flag_is_set());
        assert!(registers.c_flag_is_set());
        assert!(registers.i_flag_is_set());
        assert!(!registers.h_flag_is_set());
        assert_eq!("zCIh", registers.format_status());
    }

    #[test]
    fn test_update_zero_truncates() {
        let mut registers = Registers::new();
        registers.update_zero(0x0001_0000);
        assert!(registers.z_flag_is_set());
        registers.update_zero(-1);
        assert!(!registers.z_flag_is_set());
        registers.update_zero(0);
        assert!(registers.z_flag_is_set());
    }

    #[test]
    fn test_update_carry() {
        let mut registers = Registers::new();
        registers.update_carry(0x0000_8000);
        assert!(!registers.c_flag_is_set());
        registers.update_carry(0x0001_0000);
        assert!(registers.c_flag_is_set());
        registers.update_carry(0x0010_0000);
        assert!(!registers.c_flag_is_set());
        registers.update_carry(-32769);
        assert!(registers.c_flag_is_set());
    }

    #[test]
    fn test_stack_push_pull() {
        let mut registers = Registers::new();
        registers.stack_push(0x1234);
        assert_eq!(251, registers.sp());
        assert_eq!(0x1234, registers.get(252));
        assert_eq!(0x1234, registers.stack_pull());
        assert_eq!(252, registers.sp());
    }

    #[test]
    fn test_stack_overflow_aliases_registers() {
        let mut registers = Registers::new();
        registers.set(SP, 3);
        registers.stack_push(0x0042);
        registers.stack_push(0x0043);
        assert_eq!(0x0042, registers.get(3));
        // the second push landed in the FLAGS cell
        assert_eq!(0x0043, registers.flags());
        assert_eq!(1, registers.sp());
    }

    #[test]
    fn test_indirect() {
        let mut registers = Registers::new();
        registers.set(3, 0x0110);
        registers.set_indirect(3, -5);
        assert_eq!(-5, registers.get(0x10));
        assert_eq!(-5, registers.get_indirect(3));
    }
}
