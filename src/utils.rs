use crate::consts;

/// Splits an instruction word into its four nibbles, most significant first.
pub fn nibble_split(word: u16) -> (u8, u8, u8, u8) {
    (
        ((word & 0xF000) >> 12) as u8,
        ((word & 0x0F00) >> 8) as u8,
        ((word & 0x00F0) >> 4) as u8,
        (word & 0x000F) as u8,
    )
}

/// Hundreds, tens and units digits of `value`.
pub fn bcd_split(value: u8) -> [u8; 3] {
    [value / 100, (value % 100) / 10, value % 10]
}

pub fn bounds_check(x: usize, y: usize) -> bool {
    x < consts::CHIP8_WIDTH && y < consts::CHIP8_HEIGHT
}
