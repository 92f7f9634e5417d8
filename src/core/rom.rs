use std::fs;
use std::path::Path;

use crate::consts;
use crate::error::{Error, Result};

/// Raw program image, loaded verbatim at the program offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rom {
    pub buffer: Vec<u8>,
}

impl Rom {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > consts::MAX_ROM_BYTES {
            return Err(Error::ProgramTooLarge {
                size: bytes.len(),
                max: consts::MAX_ROM_BYTES,
            });
        }
        Ok(Rom {
            buffer: bytes.to_vec(),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        log::debug!(
            "read {} program bytes from {}",
            bytes.len(),
            path.as_ref().display()
        );
        Self::from_bytes(&bytes)
    }
}
