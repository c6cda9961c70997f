use super::memory::{big_endian, AddressableIO};
use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum DecodeError {
    InvalidOpcode(u16, u8),           // opcode address, opcode
    MissingOperand(Operands, &'static str), // operands, expected operand
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DecodeError::InvalidOpcode(address, opcode) => write!(
                f,
                "opcode 0x{:02x} at address #0x{:04X} has no operand layout",
                opcode, address
            ),
            DecodeError::MissingOperand(operands, expected) => write!(
                f,
                "operands ({}) do not provide a {}",
                operands.format_bytes(),
                expected
            ),
        }
    }
}

impl error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/*
 * Operands
 * Bytes following the opcode. Their count only depends on the opcode range:
 * 0x00-0x0f none, 0x10-0x1f one, 0x20-0x3f two, 0x40-0x4f three. Above 0x4f
 * nothing is defined.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Operands {
    Implied,
    Register([u8; 1]),
    Pair([u8; 2]),
    Triple([u8; 3]),
}

impl Operands {
    pub fn count_for(opcode: u8) -> Option<usize> {
        match opcode {
            0x00..=0x0f => Some(0),
            0x10..=0x1f => Some(1),
            0x20..=0x3f => Some(2),
            0x40..=0x4f => Some(3),
            _ => None,
        }
    }

    /*
     * fetch
     * Read the operands of the opcode located at opcode_address.
     */
    pub fn fetch(opcode_address: u16, opcode: u8, memory: &dyn AddressableIO) -> Result<Operands> {
        let byte = |offset: u16| memory.read(opcode_address.wrapping_add(offset));

        match Operands::count_for(opcode) {
            Some(0) => Ok(Operands::Implied),
            Some(1) => Ok(Operands::Register([byte(1)])),
            Some(2) => Ok(Operands::Pair([byte(1), byte(2)])),
            Some(3) => Ok(Operands::Triple([byte(1), byte(2), byte(3)])),
            _ => Err(DecodeError::InvalidOpcode(opcode_address, opcode)),
        }
    }

    pub fn get_operands(&self) -> Vec<u8> {
        match self {
            Operands::Implied => vec![],
            Operands::Register(v) => v.to_vec(),
            Operands::Pair(v) => v.to_vec(),
            Operands::Triple(v) => v.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.get_operands().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First operand byte, always a register index.
    pub fn register(&self) -> Result<u8> {
        match self {
            Operands::Register([a1]) | Operands::Pair([a1, _]) | Operands::Triple([a1, _, _]) => {
                Ok(*a1)
            }
            Operands::Implied => Err(DecodeError::MissingOperand(*self, "register")),
        }
    }

    /// Second operand byte of a two bytes instruction, a register index or
    /// an 8 bits literal depending on the opcode.
    pub fn source(&self) -> Result<u8> {
        match self {
            Operands::Pair([_, a2]) => Ok(*a2),
            _ => Err(DecodeError::MissingOperand(*self, "source")),
        }
    }

    /// Big endian word made of the last two operand bytes.
    pub fn target(&self) -> Result<u16> {
        self.target_address()
            .ok_or(DecodeError::MissingOperand(*self, "target address"))
    }

    pub fn target_address(&self) -> Option<u16> {
        match self {
            Operands::Pair(v) => Some(big_endian(v)),
            Operands::Triple([_, a2, a3]) => Some(big_endian(&[*a2, *a3])),
            _ => None,
        }
    }

    pub fn format_bytes(&self) -> String {
        self.get_operands()
            .iter()
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
            .to_owned()
    }
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target_address() {
            Some(addr) => write!(f, "(#0x{:04X})", addr),
            None => write!(f, "         "),
        }
    }
}
