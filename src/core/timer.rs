use crate::consts;

/// 8-bit down-counter that decays at 60 Hz of accumulated host time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
    elapsed_ms: u64,
}

impl Timer {
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Loads a new count; any partially elapsed tick is discarded.
    pub fn set(&mut self, value: u8) {
        self.value = value;
        self.elapsed_ms = 0;
    }

    pub fn update(&mut self, elapsed_ms: u64) {
        if self.value == 0 {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        while self.elapsed_ms >= consts::TIMER_TICK_MS {
            self.elapsed_ms -= consts::TIMER_TICK_MS;
            self.value -= 1;
            if self.value == 0 {
                self.elapsed_ms = 0;
                break;
            }
        }
    }
}
