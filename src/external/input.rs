use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8::Processor;

/// Hex keypad index for a host key, laid out as the COSMAC VIP keypad:
///
/// ```text
/// 1 2 3 4      1 2 3 C
/// Q W E R  ->  4 5 6 D
/// A S D F      7 8 9 E
/// Z X C V      A 0 B F
/// ```
pub fn keypad_index(key: Keycode) -> Option<usize> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

pub struct KeyboardDriver {
    events: sdl2::EventPump,
}

impl KeyboardDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
        Ok(KeyboardDriver {
            events: context.event_pump()?,
        })
    }

    /// Forwards pending key events to `processor`; false once the user quits.
    pub fn poll(&mut self, processor: &mut Processor) -> chip8::Result<bool> {
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return Ok(false),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(i) = keypad_index(key) {
                        processor.set_key(i, true)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(i) = keypad_index(key) {
                        processor.set_key(i, false)?;
                    }
                }
                _ => continue,
            }
        }
        Ok(true)
    }
}
