//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode stays on until the guard is dropped.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}
