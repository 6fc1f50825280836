//! Review deadline classification.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Where a submission stands relative to its review deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "state", content = "daysRemaining")]
pub enum DeadlineState {
    NoDeadline,
    Overdue(i64),
    DueSoon(i64),
    OnTrack(i64),
}

impl DeadlineState {
    /// Whole days left, rounded up. `None` without a deadline.
    #[must_use]
    pub const fn days_remaining(self) -> Option<i64> {
        match self {
            Self::NoDeadline => None,
            Self::Overdue(d) | Self::DueSoon(d) | Self::OnTrack(d) => Some(d),
        }
    }
}

/// Classify `deadline` as seen at `now`.
///
/// The deadline is taken as midnight UTC of its date. Days remaining are
/// rounded up, so anything later today counts as one day left and a
/// deadline that passed earlier today counts as zero.
#[must_use]
pub fn deadline_status(
    deadline: Option<NaiveDate>,
    now: DateTime<Utc>,
    warning_days: u32,
) -> DeadlineState {
    let Some(date) = deadline else {
        return DeadlineState::NoDeadline;
    };
    let due = date.and_time(chrono::NaiveTime::MIN).and_utc();
    let delta = (due - now).num_milliseconds();
    let days = ceil_div(delta, MILLIS_PER_DAY);
    if days < 0 {
        DeadlineState::Overdue(days)
    } else if days <= i64::from(warning_days) {
        DeadlineState::DueSoon(days)
    } else {
        DeadlineState::OnTrack(days)
    }
}

const fn ceil_div(n: i64, d: i64) -> i64 {
    let q = n / d;
    if n % d > 0 { q + 1 } else { q }
}
