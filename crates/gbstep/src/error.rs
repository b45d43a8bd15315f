use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Access past the end of a fixed memory image.
    #[error("memory access at {address:#06X} is outside the {len}-byte image")]
    OutOfRange { address: u16, len: usize },

    /// Opcode slot with no instruction behind it. `pc` is the opcode's address.
    #[error("illegal opcode {opcode:#04X} at PC={pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    #[error("fixed memory image must not be empty")]
    EmptyImage,

    #[error("fixed memory image of {len} bytes exceeds the 64 KiB address space")]
    ImageTooLarge { len: usize },

    #[error("seed sequence must not be empty")]
    EmptySeed,

    /// Restored seed cursor that does not index the seed sequence.
    #[error("seed cursor {cursor} is outside the {len}-byte seed")]
    CursorOutOfRange { cursor: usize, len: usize },
}
