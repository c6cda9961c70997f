mod error;
mod rom;

pub use error::MemoryError;
pub use rom::ROM;

/// Size of the instruction stream address space.
pub const PROGRAM_SIZE: usize = 0x10000;

pub fn big_endian(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |word, byte| word << 8 | (*byte as u16))
}

/*
 * AddressableIO
 * this trait defines the interface of the instruction stream. Reads are total
 * over the 16 bits address space, the processor never writes in it.
 */
pub trait AddressableIO {
    fn read(&self, addr: u16) -> u8;
    fn get_size(&self) -> usize;

    fn read_word(&self, addr: u16) -> u16 {
        big_endian(&[self.read(addr), self.read(addr.wrapping_add(1))])
    }
}
