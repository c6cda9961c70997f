use std::fmt;

pub const INTERRUPT_COUNT: usize = 32;

/*
 * InterruptTable
 * Target addresses registered by the INT instruction, 0x0000 means unset.
 * The processor only writes this table, delivering interrupts is up to the
 * host.
 */
#[derive(Clone, PartialEq, Eq, Default)]
pub struct InterruptTable {
    vectors: [u16; INTERRUPT_COUNT],
}

impl InterruptTable {
    pub fn new() -> InterruptTable {
        InterruptTable::default()
    }

    pub fn clear(&mut self) {
        self.vectors = [0x0000; INTERRUPT_COUNT];
    }

    /// Registers `address` for interrupt `number`. Out of range numbers are
    /// ignored. Returns whether the vector was stored.
    pub fn set_vector(&mut self, number: u8, address: u16) -> bool {
        match self.vectors.get_mut(number as usize) {
            Some(vector) => {
                *vector = address;
                true
            }
            None => false,
        }
    }

    pub fn get_vector(&self, number: u8) -> Option<u16> {
        self.vectors.get(number as usize).copied()
    }

    pub fn vectors(&self) -> &[u16] {
        &self.vectors
    }
}

impl fmt::Debug for InterruptTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(_, addr)| **addr != 0)
            .fold(String::new(), |acc, (number, addr)| {
                format!("{} {}→#0x{:04X}", acc, number, addr)
            });

        write!(f, "InterruptTable [{}]", registered.trim())
    }
}
