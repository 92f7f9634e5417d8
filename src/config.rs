use crate::consts;
use crate::error::{Error, Result};

/// Frontend settings taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rom_path: String,
    pub scale: u32,
    /// Instructions run per 60 Hz host frame.
    pub steps_per_frame: u32,
}

pub const USAGE: &str = "usage: chip8 <rom> [--scale N] [--steps N]";

impl Config {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut rom_path = None;
        let mut scale = consts::DEFAULT_SCALE_FACTOR;
        let mut steps_per_frame = consts::DEFAULT_STEPS_PER_FRAME;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--scale" => scale = positive(&arg, args.next())?,
                "--steps" => steps_per_frame = positive(&arg, args.next())?,
                flag if flag.starts_with("--") => {
                    return Err(Error::Usage(format!("unknown option {flag}\n{USAGE}")));
                }
                _ if rom_path.is_none() => rom_path = Some(arg),
                _ => return Err(Error::Usage(format!("unexpected argument {arg:?}\n{USAGE}"))),
            }
        }

        let rom_path =
            rom_path.ok_or_else(|| Error::Usage(format!("Need to specify rom path\n{USAGE}")))?;
        Ok(Config {
            rom_path,
            scale,
            steps_per_frame,
        })
    }

    pub fn window_size(&self) -> (u32, u32) {
        (
            consts::CHIP8_WIDTH as u32 * self.scale,
            consts::CHIP8_HEIGHT as u32 * self.scale,
        )
    }
}

fn positive(flag: &str, value: Option<String>) -> Result<u32> {
    let value = value.ok_or_else(|| Error::Usage(format!("{flag} needs a value\n{USAGE}")))?;
    match value.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(Error::Usage(format!(
            "invalid {flag} value {value:?}, expected a positive integer"
        ))),
    }
}
