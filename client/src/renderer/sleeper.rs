use std::time::{Duration, Instant};

use log::trace;

/// Paces frames so that consecutive wake-ups are `target_delta_time` apart,
/// regardless of how long the work between them took.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Marks the start of the first frame.
    pub fn start(&mut self) {
        self.last_instant = Some(Instant::now());
    }

    /// Sleeps out the rest of the current frame. Returns `false` if the frame
    /// already overran and no sleep happened.
    pub fn sleep(&mut self) -> bool {
        let this_instant = Instant::now();
        let delta_time = self
            .last_instant
            .map_or(Duration::ZERO, |last_instant| this_instant - last_instant);

        let slept = if self.target_delta_time > delta_time {
            let remaining = self.target_delta_time - delta_time;
            trace!("Frame took {delta_time:?}, sleeping {remaining:?}");
            spin_sleep::sleep(remaining);

            true
        } else {
            false
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}
