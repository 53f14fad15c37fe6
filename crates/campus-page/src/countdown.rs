//! Whole days left until the admission deadline.

use campus_core::{RenderOp, Target};
use chrono::NaiveDateTime;

const DAY_MS: i64 = 86_400_000;

/// `floor((deadline - now) / 1 day)`, never negative.
pub fn days_remaining(deadline: NaiveDateTime, now: NaiveDateTime) -> u64 {
    let remaining_ms = (deadline - now).num_milliseconds();
    if remaining_ms <= 0 {
        0
    } else {
        (remaining_ms / DAY_MS) as u64
    }
}

#[derive(Debug, Clone)]
pub struct Countdown {
    deadline: NaiveDateTime,
    refresh_ms: u64,
    days: Option<u64>,
}

impl Countdown {
    pub fn new(deadline: NaiveDateTime, refresh_ms: u64) -> Self {
        Self {
            deadline,
            refresh_ms,
            days: None,
        }
    }

    pub fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    pub fn refresh_ms(&self) -> u64 {
        self.refresh_ms
    }

    /// Last computed day count.
    pub fn days(&self) -> Option<u64> {
        self.days
    }

    pub fn refresh(&mut self, now: NaiveDateTime) -> Vec<RenderOp> {
        let days = days_remaining(self.deadline, now);
        if self.days != Some(days) {
            tracing::debug!(days, "countdown updated");
        }
        self.days = Some(days);
        vec![RenderOp::text(Target::CountdownDays, days.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn whole_days_are_floored() {
        let deadline = at("2026-03-15T23:59:59");
        assert_eq!(days_remaining(deadline, at("2026-03-05T23:59:59")), 10);
        assert_eq!(days_remaining(deadline, at("2026-03-06T00:00:00")), 9);
        assert_eq!(days_remaining(deadline, at("2026-03-15T00:00:00")), 0);
    }

    #[test]
    fn past_deadline_is_zero() {
        let deadline = at("2026-03-15T23:59:59");
        assert_eq!(days_remaining(deadline, at("2026-10-19T09:00:00")), 0);
        assert_eq!(days_remaining(deadline, deadline), 0);
    }

    #[test]
    fn refresh_renders_day_count() {
        let mut countdown = Countdown::new(at("2026-03-15T23:59:59"), 3_600_000);
        let ops = countdown.refresh(at("2026-03-01T12:00:00"));
        assert_eq!(countdown.days(), Some(14));
        assert_eq!(ops, vec![RenderOp::text(Target::CountdownDays, "14")]);
    }
}
