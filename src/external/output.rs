use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use chip8::config::Config;
use chip8::{consts, DisplayBuffer};

const OFF: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
const ON: Color = Color {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};

pub struct DisplayDriver {
    pub screen: Canvas<Window>,
    scale: u32,
}

impl DisplayDriver {
    pub fn new(context: &sdl2::Sdl, config: &Config) -> Result<Self, String> {
        let video_subsystem = context.video()?;
        let (width, height) = config.window_size();
        let window = video_subsystem
            .window("CHIP-8 Window", width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        canvas.set_draw_color(OFF);
        canvas.clear();
        canvas.present();

        Ok(DisplayDriver {
            screen: canvas,
            scale: config.scale,
        })
    }

    pub fn draw(&mut self, display: &DisplayBuffer) -> Result<(), String> {
        let lit: Vec<Rect> = (0..consts::CHIP8_HEIGHT)
            .flat_map(|y| (0..consts::CHIP8_WIDTH).map(move |x| (x, y)))
            .filter(|&(x, y)| display.pixel(x, y))
            .map(|(x, y)| {
                Rect::new(
                    (x as u32 * self.scale) as i32,
                    (y as u32 * self.scale) as i32,
                    self.scale,
                    self.scale,
                )
            })
            .collect();

        self.screen.set_draw_color(OFF);
        self.screen.clear();
        self.screen.set_draw_color(ON);
        self.screen.fill_rects(&lit)?;
        self.screen.present();
        Ok(())
    }
}
