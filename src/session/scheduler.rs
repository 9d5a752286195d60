//! Scheduled bot actions.
//!
//! The host owns the timer. It asks the session for the next
//! `PendingAction`, waits `delay`, and hands the action back. Any state
//! change in between bumps the session version, and the stale action is
//! dropped when it fires.

use std::time::Duration;

use crate::core::PlayerId;

/// Which half of a bot turn is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BotStep {
    /// Play the first legal card, or draw.
    Decide,
    /// After a draw: play if now legal, otherwise pass.
    FollowUp,
}

/// A bot action waiting for its delay to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAction {
    /// Session version the action was scheduled against.
    pub version: u64,
    pub actor: PlayerId,
    pub step: BotStep,
    pub delay: Duration,
}

impl PendingAction {
    /// Still valid against a session at `version`?
    #[must_use]
    pub fn is_current(&self, version: u64) -> bool {
        self.version == version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_gate() {
        let pending = PendingAction {
            version: 3,
            actor: PlayerId::new(1),
            step: BotStep::Decide,
            delay: Duration::from_millis(1500),
        };

        assert!(pending.is_current(3));
        assert!(!pending.is_current(4));
    }
}
