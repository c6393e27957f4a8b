//! Player-side resources.
use bevy::prelude::*;

/// Where the player stands, in scene coordinates, plus presentation flags the
/// scene mirrors onto the avatar.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerState {
    pub position: Vec2,
    pub facing_left: bool,
    pub walking: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec2::new(50.0, 400.0),
            facing_left: false,
            walking: false,
        }
    }
}

/// Pending scripted walk-up to the doorman (Sebbe's one-shot intro).
///
/// The timer only ticks during exploration and is cleared when the phase is
/// left, so a stale trigger can never fire into another conversation.
#[derive(Resource, Debug, Default)]
pub struct AutoApproach {
    pending: Option<Timer>,
}

impl AutoApproach {
    /// Arms the trigger unless one is already pending.
    pub fn arm(&mut self, delay_secs: f32) {
        if self.pending.is_none() {
            self.pending = Some(Timer::from_seconds(delay_secs, TimerMode::Once));
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[allow(dead_code)]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticks the pending timer. Returns true exactly once, when it fires.
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        let Some(timer) = self.pending.as_mut() else {
            return false;
        };
        if timer.tick(delta).is_finished() {
            self.pending = None;
            return true;
        }
        false
    }
}

/// Repeat timer turning held arrow keys into a stream of steps.
#[derive(Resource, Debug)]
pub struct KeyRepeat {
    pub timer: Timer,
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.12, TimerMode::Repeating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn auto_approach_fires_once_after_the_delay() {
        let mut auto = AutoApproach::default();
        assert!(!auto.tick(Duration::from_millis(100)));

        auto.arm(0.1);
        assert!(auto.is_armed());
        assert!(!auto.tick(Duration::from_millis(50)));
        assert!(auto.tick(Duration::from_millis(60)));
        assert!(!auto.is_armed());
        assert!(!auto.tick(Duration::from_millis(500)));
    }

    #[test]
    fn arming_twice_keeps_the_first_timer() {
        let mut auto = AutoApproach::default();
        auto.arm(0.1);
        auto.tick(Duration::from_millis(90));
        auto.arm(10.0);
        assert!(auto.tick(Duration::from_millis(20)));
    }

    #[test]
    fn cancel_clears_the_pending_trigger() {
        let mut auto = AutoApproach::default();
        auto.arm(0.1);
        auto.cancel();
        assert!(!auto.is_armed());
        assert!(!auto.tick(Duration::from_millis(500)));
    }
}
