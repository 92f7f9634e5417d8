use crate::consts;
use crate::core::ram;
use crate::core::rom::Rom;
use crate::core::timer::Timer;
use crate::error::{Error, Result};
use crate::utils;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What the host should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    RedrawScreen,
    Continue,
    /// Blocked on `FX0A` until a key is held.
    Waiting,
}

#[derive(Debug, Clone)]
pub struct Processor {
    pub(crate) stack: [u16; consts::STACK_SIZE],
    pub(crate) registers: [u8; consts::REG_COUNT],
    pub(crate) idx_register: u16,
    pub(crate) pc: u16,
    /// Next free stack slot.
    pub(crate) stack_pointer: usize,
    pub(crate) delay_timer: Timer,
    pub(crate) sound_timer: Timer,
    pub(crate) ram: ram::Ram,
    pub(crate) display_buffer: ram::DisplayBuffer,
    pub(crate) keyboard_buffer: ram::KeyboardBuffer,
    rng: StdRng,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Processor whose `CXNN` results are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut processor = Processor {
            stack: [0; consts::STACK_SIZE],
            registers: [0; consts::REG_COUNT],
            idx_register: 0,
            pc: 0,
            stack_pointer: 0,
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            ram: ram::Ram::default(),
            display_buffer: ram::DisplayBuffer::default(),
            keyboard_buffer: ram::KeyboardBuffer::default(),
            rng,
        };
        processor.initialize();
        processor
    }

    /// Zeroes all machine state and installs the glyph table.
    pub fn initialize(&mut self) {
        self.stack = [0; consts::STACK_SIZE];
        self.registers = [0; consts::REG_COUNT];
        self.idx_register = 0;
        self.pc = 0;
        self.stack_pointer = 0;
        self.delay_timer = Timer::default();
        self.sound_timer = Timer::default();
        self.ram = ram::Ram::default();
        self.display_buffer.clear();
        self.keyboard_buffer = ram::KeyboardBuffer::default();

        let font_end = consts::FONT_OFFSET + consts::FONT_SET.len();
        self.ram.buffer[consts::FONT_OFFSET..font_end].copy_from_slice(&consts::FONT_SET);
        debug_assert_eq!(font_end - 1, consts::FONT_END);
        log::debug!("processor initialized, glyphs at {:#05X}", consts::FONT_OFFSET);
    }

    /// Copies `program` to the program offset and points pc at it.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > consts::MAX_ROM_BYTES {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                max: consts::MAX_ROM_BYTES,
            });
        }
        self.ram.write(consts::PROG_OFFSET, program)?;
        self.pc = consts::PROG_OFFSET as u16;
        log::debug!("loaded {} program bytes", program.len());
        Ok(())
    }

    pub fn load_rom(&mut self, rom: &Rom) -> Result<()> {
        self.load_program(&rom.buffer)
    }

    pub fn set_key(&mut self, key: usize, pressed: bool) -> Result<()> {
        let slot = self
            .keyboard_buffer
            .buffer
            .get_mut(key)
            .ok_or(Error::InvalidKey { key })?;
        *slot = pressed;
        Ok(())
    }

    pub fn framebuffer(&self) -> &ram::DisplayBuffer {
        &self.display_buffer
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer.value()
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer.value()
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn index_register(&self) -> u16 {
        self.idx_register
    }

    pub fn registers(&self) -> &[u8; consts::REG_COUNT] {
        &self.registers
    }

    pub fn memory(&self) -> &[u8; consts::RAM_BYTES] {
        &self.ram.buffer
    }

    fn fetch(&mut self) -> Result<u16> {
        let word = self
            .ram
            .read_word(self.pc as usize)
            .map_err(|_| Error::PcOutOfBounds { pc: self.pc })?;
        self.pc += consts::OP_CODE_BYTES as u16;
        Ok(word)
    }

    /// Runs one instruction, then decays the timers by `elapsed_ms`.
    pub fn step(&mut self, elapsed_ms: u64) -> Result<CycleStatus> {
        let addr = self.pc;
        let instr = self.fetch()?;
        log::trace!("{:#06X}: {:#06X}", addr, instr);
        let status = self.execute(addr, instr)?;
        self.delay_timer.update(elapsed_ms);
        self.sound_timer.update(elapsed_ms);
        Ok(status)
    }

    fn execute(&mut self, addr: u16, instr: u16) -> Result<CycleStatus> {
        let (opcode, x, y, n) = utils::nibble_split(instr);
        let (x, y) = (x as usize, y as usize);
        let nn = (instr & 0x00FF) as u8;
        let nnn = instr & 0x0FFF;
        let skip = consts::OP_CODE_BYTES as u16;

        match (opcode, x, y, n) {
            // Clears screen
            (0, 0, 0xE, 0) => {
                self.display_buffer.clear();
                return Ok(CycleStatus::RedrawScreen);
            }

            // Draw on display
            (0xD, _, _, _) => {
                self.draw(x, y, n as usize)?;
                return Ok(CycleStatus::RedrawScreen);
            }

            // Jumps
            (1, _, _, _) => {
                self.pc = nnn;
            }
            (0xB, _, _, _) => {
                self.pc = nnn.wrapping_add(self.registers[0] as u16);
            }

            // Subroutines: enter and exit
            (0, 0, 0xE, 0xE) => {
                if self.stack_pointer == 0 {
                    return Err(Error::StackUnderflow { pc: addr });
                }
                self.stack_pointer -= 1;
                self.pc = self.stack[self.stack_pointer];
            }
            (2, _, _, _) => {
                if self.stack_pointer == consts::STACK_SIZE {
                    return Err(Error::StackOverflow { pc: addr });
                }
                self.stack[self.stack_pointer] = self.pc;
                self.stack_pointer += 1;
                self.pc = nnn;
            }

            // Conditional skips
            (3, _, _, _) => {
                if self.registers[x] == nn {
                    self.pc += skip;
                }
            }
            (4, _, _, _) => {
                if self.registers[x] != nn {
                    self.pc += skip;
                }
            }
            (5, _, _, 0) => {
                if self.registers[x] == self.registers[y] {
                    self.pc += skip;
                }
            }
            (9, _, _, 0) => {
                if self.registers[x] != self.registers[y] {
                    self.pc += skip;
                }
            }

            // Set register
            (6, _, _, _) => {
                self.registers[x] = nn;
            }
            (8, _, _, 0) => {
                self.registers[x] = self.registers[y];
            }
            (0xA, _, _, _) => {
                self.idx_register = nnn;
            }

            // Add/subtract instructions
            (7, _, _, _) => {
                self.registers[x] = self.registers[x].wrapping_add(nn);
            }
            (8, _, _, 4) => {
                let (sum, carry) = self.registers[x].overflowing_add(self.registers[y]);
                self.registers[x] = sum;
                self.registers[consts::FLAG_REG] = carry as u8;
            }
            (8, _, _, 5) => {
                let (diff, borrow) = self.registers[x].overflowing_sub(self.registers[y]);
                self.registers[x] = diff;
                self.registers[consts::FLAG_REG] = !borrow as u8;
            }
            (8, _, _, 7) => {
                let (diff, borrow) = self.registers[y].overflowing_sub(self.registers[x]);
                self.registers[x] = diff;
                self.registers[consts::FLAG_REG] = !borrow as u8;
            }

            // Logical instructions
            (8, _, _, 1) => {
                self.registers[x] |= self.registers[y];
            }
            (8, _, _, 2) => {
                self.registers[x] &= self.registers[y];
            }
            (8, _, _, 3) => {
                self.registers[x] ^= self.registers[y];
            }

            // Shifting instructions, flag taken from Vy before the shift
            (8, _, _, 6) => {
                let vy = self.registers[y];
                self.registers[x] = vy >> 1;
                self.registers[consts::FLAG_REG] = vy & 0b00000001;
            }
            (8, _, _, 0xE) => {
                let vy = self.registers[y];
                self.registers[x] = vy << 1;
                self.registers[consts::FLAG_REG] = (vy & 0b10000000) >> 7;
            }

            // Generate randomness
            (0xC, _, _, _) => {
                let rand_val: u8 = self.rng.gen();
                self.registers[x] = nn & rand_val;
            }

            // Skip on keypress
            (0xE, _, 9, 0xE) => {
                if self.keyboard_buffer.is_pressed(self.registers[x]) {
                    self.pc += skip;
                }
            }
            (0xE, _, 0xA, 1) => {
                if !self.keyboard_buffer.is_pressed(self.registers[x]) {
                    self.pc += skip;
                }
            }

            // Halt till a key is held
            (0xF, _, 0, 0xA) => match self.keyboard_buffer.first_pressed() {
                Some(key) => self.registers[x] = key,
                None => {
                    self.pc -= skip;
                    return Ok(CycleStatus::Waiting);
                }
            },

            // Change timers (delay/sound)
            (0xF, _, 0, 7) => {
                self.registers[x] = self.delay_timer.value();
            }
            (0xF, _, 1, 5) => {
                self.delay_timer.set(self.registers[x]);
            }
            (0xF, _, 1, 8) => {
                self.sound_timer.set(self.registers[x]);
            }

            // Update index register
            (0xF, _, 1, 0xE) => {
                self.idx_register = self.idx_register.wrapping_add(self.registers[x] as u16);
            }

            // Point index to font character
            (0xF, _, 2, 9) => {
                let glyph = (self.registers[x] & 0xF) as usize;
                self.idx_register = (consts::FONT_OFFSET + glyph * consts::FONT_CHAR_BYTES) as u16;
            }

            // Binary byte to decimal digits
            (0xF, _, 3, 3) => {
                let digits = utils::bcd_split(self.registers[x]);
                self.ram.write(self.idx_register as usize, &digits)?;
            }

            // Store and load memory
            (0xF, _, 5, 5) => {
                self.ram
                    .write(self.idx_register as usize, &self.registers[..=x])?;
            }
            (0xF, _, 6, 5) => {
                let src = self.ram.slice(self.idx_register as usize, x + 1)?;
                self.registers[..=x].copy_from_slice(src);
            }

            // Invalid/unsupported opcodes
            (_, _, _, _) => {
                log::warn!("unrecognized instruction {:#06X} at {:#06X}", instr, addr);
            }
        }
        Ok(CycleStatus::Continue)
    }

    /// XOR-blits an `n`-row sprite from `[I]` at (Vx, Vy), clipping at the edges.
    fn draw(&mut self, x: usize, y: usize, n: usize) -> Result<()> {
        let x_coord = self.registers[x] as usize % consts::CHIP8_WIDTH;
        // the start row wraps at 64 like the column, so rows 32..63 clip entirely
        let y_coord = self.registers[y] as usize % consts::CHIP8_WIDTH;
        let rows = n.min(consts::CHIP8_HEIGHT.saturating_sub(y_coord));
        let sprite = self.ram.slice(self.idx_register as usize, rows)?;

        let mut collided = false;
        for (i, byte) in sprite.iter().enumerate() {
            let mask = (byte.reverse_bits() as u64) << x_coord;
            collided |= self.display_buffer.xor_row(y_coord + i, mask);
        }
        self.registers[consts::FLAG_REG] = collided as u8;
        Ok(())
    }
}
