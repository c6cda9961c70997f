use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    EmptyImage,
    ImageOverflow(usize, usize), // image len, address space size
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::EmptyImage => write!(f, "Firmware image is empty."),
            MemoryError::ImageOverflow(len, max) => write!(
                f,
                "Could not LOAD {} bytes, address space is 0x{:04X} bytes long.",
                len, max
            ),
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
