#![no_std]

extern crate alloc;

use core::time::Duration;

pub use button::*;
pub use controller::*;
pub use error::*;
pub use messages::*;
pub use placement::*;
pub use session::*;
pub use types::*;

mod button;
mod controller;
mod error;
mod messages;
mod placement;
mod session;
mod types;

/// How long the numbered buttons stay still per button before scrambling starts.
pub const SETUP_DELAY_PER_BUTTON: Duration = Duration::from_secs(1);

/// Time between two scramble steps.
pub const SCRAMBLE_INTERVAL: Duration = Duration::from_secs(2);

/// Timing and length of the scramble sequence for one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScramblePlan {
    pub session: SessionId,
    pub delay: Duration,
    pub interval: Duration,
    pub steps: u8,
}

impl ScramblePlan {
    pub fn for_count(session: SessionId, count: ButtonCount) -> Self {
        Self {
            session,
            delay: SETUP_DELAY_PER_BUTTON * u32::from(count.get()),
            interval: SCRAMBLE_INTERVAL,
            steps: count.get(),
        }
    }

    pub fn delay_millis(&self) -> u32 {
        self.delay.as_millis().try_into().unwrap_or(u32::MAX)
    }

    pub fn interval_millis(&self) -> u32 {
        self.interval.as_millis().try_into().unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_scales_delay_and_steps_with_count() {
        let count = ButtonCount::new(5).unwrap();
        let plan = ScramblePlan::for_count(SessionId::FIRST, count);

        assert_eq!(plan.delay_millis(), 5_000);
        assert_eq!(plan.interval_millis(), 2_000);
        assert_eq!(plan.steps, 5);
    }
}
