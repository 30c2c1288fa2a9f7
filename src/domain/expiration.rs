//! Days-until-expiration arithmetic and the status bands derived from it.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of one day in milliseconds.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Last day count (inclusive) that still falls into [`ExpirationStatus::Danger`].
pub const DANGER_MAX_DAYS: i64 = 7;

/// Last day count (inclusive) that still falls into [`ExpirationStatus::Warning`].
pub const WARNING_MAX_DAYS: i64 = 30;

/// Whole days from `now` until `expiration`, rounded toward positive infinity.
///
/// The difference is taken in milliseconds, so an expiration 30.1 hours ahead
/// yields `2` and one 36 hours in the past yields `-1`.
pub fn days_remaining(now: DateTime<Utc>, expiration: DateTime<Utc>) -> i64 {
    let millis = expiration.timestamp_millis() - now.timestamp_millis();
    ceil_div(millis, MILLIS_PER_DAY)
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Urgency band of a product given its remaining days.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationStatus {
    Expired,
    Danger,
    Warning,
    Safe,
}

impl ExpirationStatus {
    /// Maps a day count onto its band. Boundaries 7 and 30 belong to the
    /// tighter band.
    pub const fn classify(days: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days <= DANGER_MAX_DAYS {
            Self::Danger
        } else if days <= WARNING_MAX_DAYS {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// String representation used in templates and CSS classes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Safe => "safe",
        }
    }
}

impl Display for ExpirationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human readable summary of a day count.
pub fn describe(days: i64) -> String {
    match days {
        d if d < 0 => format!("expired {} days ago", d.unsigned_abs()),
        0 => "expires today".to_string(),
        1 => "expires tomorrow".to_string(),
        d => format!("{d} days remaining"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap()
    }

    #[test]
    fn whole_days_ahead_yield_exact_count() {
        for n in [0_i64, 1, 5, 30, 365] {
            assert_eq!(days_remaining(now(), now() + Duration::days(n)), n);
        }
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(days_remaining(now(), now() + Duration::minutes(30 * 60 + 6)), 2);
        assert_eq!(days_remaining(now(), now() + Duration::milliseconds(1)), 1);
    }

    #[test]
    fn whole_days_in_the_past_are_negative() {
        for n in [1_i64, 3, 40] {
            assert_eq!(days_remaining(now(), now() - Duration::days(n)), -n);
        }
    }

    #[test]
    fn partial_days_in_the_past_round_toward_zero() {
        assert_eq!(days_remaining(now(), now() - Duration::hours(36)), -1);
        assert_eq!(days_remaining(now(), now() - Duration::milliseconds(1)), 0);
    }

    #[test]
    fn classifies_band_boundaries() {
        assert_eq!(ExpirationStatus::classify(-1), ExpirationStatus::Expired);
        assert_eq!(ExpirationStatus::classify(0), ExpirationStatus::Danger);
        assert_eq!(ExpirationStatus::classify(7), ExpirationStatus::Danger);
        assert_eq!(ExpirationStatus::classify(8), ExpirationStatus::Warning);
        assert_eq!(ExpirationStatus::classify(30), ExpirationStatus::Warning);
        assert_eq!(ExpirationStatus::classify(31), ExpirationStatus::Safe);
    }

    #[test]
    fn describes_day_counts() {
        assert_eq!(describe(0), "expires today");
        assert_eq!(describe(1), "expires tomorrow");
        assert_eq!(describe(5), "5 days remaining");
        assert_eq!(describe(-3), "expired 3 days ago");
    }
}
