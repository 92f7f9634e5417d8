mod external;

use chip8::config::Config;
use chip8::{consts, CycleStatus, Processor, Rom};
use external::{input::KeyboardDriver, output::DisplayDriver};
use std::env;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("chip8=info"))
        .init();

    let config = Config::from_args(env::args().skip(1))?;
    let rom = Rom::from_path(&config.rom_path)?;
    let mut chip8 = Processor::new();
    chip8.load_rom(&rom)?;
    log::info!("running {}", config.rom_path);

    let context = sdl2::init()?;
    let mut display = DisplayDriver::new(&context, &config)?;
    let mut keyboard = KeyboardDriver::new(&context)?;
    display.draw(chip8.framebuffer())?;

    let frame = Duration::from_micros(consts::FRAME_MICROS);
    let mut last_tick = Instant::now();
    while keyboard.poll(&mut chip8)? {
        let frame_start = Instant::now();
        // hand over whole milliseconds only; the remainder carries to the next frame
        let elapsed_ms = frame_start.duration_since(last_tick).as_millis() as u64;
        last_tick += Duration::from_millis(elapsed_ms);

        let mut redraw = false;
        for i in 0..config.steps_per_frame {
            let elapsed = if i == 0 { elapsed_ms } else { 0 };
            match chip8.step(elapsed) {
                Ok(CycleStatus::RedrawScreen) => redraw = true,
                Ok(CycleStatus::Waiting) => break,
                Ok(CycleStatus::Continue) => {}
                Err(e) => {
                    log::error!("halting: {e}");
                    return Err(e.into());
                }
            }
        }
        if redraw {
            display.draw(chip8.framebuffer())?;
        }

        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
    Ok(())
}
