use super::*;
use std::fmt;

/*
 * ROM
 * Firmware image seen by the processor. Anything past the end of the image
 * reads as 0x00.
 */
pub struct ROM {
    rom: Vec<u8>,
}

impl ROM {
    pub fn new(data: Vec<u8>) -> Result<ROM, MemoryError> {
        if data.is_empty() {
            Err(MemoryError::EmptyImage)
        } else if data.len() > PROGRAM_SIZE {
            Err(MemoryError::ImageOverflow(data.len(), PROGRAM_SIZE))
        } else {
            Ok(ROM { rom: data })
        }
    }
}

impl AddressableIO for ROM {
    fn read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0x00)
    }

    fn get_size(&self) -> usize {
        self.rom.len()
    }
}

impl fmt::Debug for ROM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROM, size = {} bytes", self.get_size())
    }
}
