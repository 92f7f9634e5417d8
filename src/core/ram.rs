use crate::consts;
use crate::error::{Error, Result};
use crate::utils;

#[derive(Debug, Clone)]
pub struct Ram {
    pub buffer: [u8; consts::RAM_BYTES],
}

impl Default for Ram {
    fn default() -> Self {
        Ram {
            buffer: [0; consts::RAM_BYTES],
        }
    }
}

impl Ram {
    /// Range-checks `len` bytes starting at `address`.
    fn span(address: usize, len: usize) -> Result<std::ops::Range<usize>> {
        match address.checked_add(len) {
            Some(end) if end <= consts::RAM_BYTES => Ok(address..end),
            _ => Err(Error::MemoryOutOfBounds {
                address: address.max(consts::RAM_BYTES),
            }),
        }
    }

    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8]> {
        Ok(&self.buffer[Self::span(address, len)?])
    }

    pub fn slice_mut(&mut self, address: usize, len: usize) -> Result<&mut [u8]> {
        Ok(&mut self.buffer[Self::span(address, len)?])
    }

    pub fn read(&self, address: usize) -> Result<u8> {
        self.buffer
            .get(address)
            .copied()
            .ok_or(Error::MemoryOutOfBounds { address })
    }

    /// Big-endian 16-bit word at `address`.
    pub fn read_word(&self, address: usize) -> Result<u16> {
        let bytes = self.slice(address, consts::OP_CODE_BYTES)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn write(&mut self, address: usize, data: &[u8]) -> Result<()> {
        self.slice_mut(address, data.len())?.copy_from_slice(data);
        Ok(())
    }
}

/// 64x32 monochrome bitmap; bit `x` of `rows[y]` is pixel (x, y).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    pub rows: [u64; consts::CHIP8_HEIGHT],
}

impl DisplayBuffer {
    pub fn clear(&mut self) {
        self.rows = [0; consts::CHIP8_HEIGHT];
    }

    /// XORs `mask` into row `y`, returning true when a lit pixel was turned off.
    pub fn xor_row(&mut self, y: usize, mask: u64) -> bool {
        let collided = self.rows[y] & mask != 0;
        self.rows[y] ^= mask;
        collided
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        utils::bounds_check(x, y) && (self.rows[y] >> x) & 1 == 1
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }
}

#[derive(Default, Debug, Clone)]
pub struct KeyboardBuffer {
    pub buffer: [bool; consts::KEYBOARD_SIZE],
}

impl KeyboardBuffer {
    pub fn is_pressed(&self, key: u8) -> bool {
        self.buffer[(key & 0xF) as usize]
    }

    /// Lowest-numbered key currently held down.
    pub fn first_pressed(&self) -> Option<u8> {
        self.buffer.iter().position(|pressed| *pressed).map(|i| i as u8)
    }
}
