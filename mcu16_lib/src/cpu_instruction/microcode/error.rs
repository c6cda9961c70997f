use crate::operands;
use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MicrocodeError {
    // ↓ when the opcode or its operands cannot be decoded
    Decode(operands::DecodeError),
    // ↓ DIV with a divisor register holding zero, address of the instruction
    DivisionByZero(u16),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MicrocodeError::Decode(e) => {
                write!(f, "decode error caught in microcode operation: {}", e)
            }
            MicrocodeError::DivisionByZero(address) => {
                write!(f, "division by zero at address #0x{:04X}", address)
            }
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MicrocodeError::Decode(e) => Some(e),
            MicrocodeError::DivisionByZero(_) => None,
        }
    }
}

impl std::convert::From<operands::DecodeError> for MicrocodeError {
    fn from(err: operands::DecodeError) -> MicrocodeError {
        MicrocodeError::Decode(err)
    }
}
