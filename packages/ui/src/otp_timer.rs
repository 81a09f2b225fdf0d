//! Countdown gating the "resend code" action.

use std::time::Duration;

use dioxus::prelude::*;

use crate::time::sleep;

/// Seconds before a code may be re-sent.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Counts down once per tick; resending is allowed exactly at zero.
///
/// Display only: the backend decides when a code actually expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendTimer {
    remaining: u32,
}

impl Default for ResendTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResendTimer {
    pub fn new() -> Self {
        Self {
            remaining: RESEND_COOLDOWN_SECS,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// One second passed. Stops at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    /// Start over after a successful resend.
    pub fn reset(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
    }

    pub fn label(&self) -> String {
        if self.can_resend() {
            "Resend code".to_string()
        } else {
            format!("Resend code in {}s", self.remaining)
        }
    }
}

/// A [`ResendTimer`] that ticks every second while the component is mounted.
pub fn use_resend_timer() -> Signal<ResendTimer> {
    let mut timer = use_signal(ResendTimer::new);
    use_future(move || async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            if !timer.peek().can_resend() {
                timer.write().tick();
            }
        }
    });
    timer
}
