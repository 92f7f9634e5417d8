use std::io;

/// Faults that stop the interpreter or reject its inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("program is too large ({size} bytes), max size is {max} bytes")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("program counter {pc:#06X} runs past the end of memory")]
    PcOutOfBounds { pc: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("stack overflow: call at {pc:#06X} exceeds the call depth")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("key index {key} is not a hex key")]
    InvalidKey { key: usize },

    #[error("could not read program: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
