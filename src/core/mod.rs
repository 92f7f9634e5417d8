pub mod processor;
pub mod ram;
pub mod rom;
pub mod timer;
