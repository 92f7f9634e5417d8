//! CHIP-8 interpreter core: memory, registers, call stack, 64x32 framebuffer
//! and the two 60 Hz timers, advanced one instruction per [`Processor::step`].
//!
//! Windowing, input polling and ROM file handling live outside the core; the
//! `chip8` binary (feature `sdl`) wires them up with SDL2.

pub mod config;
pub mod consts;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::processor::{CycleStatus, Processor};
pub use crate::core::ram::DisplayBuffer;
pub use crate::core::rom::Rom;
pub use crate::error::{Error, Result};
