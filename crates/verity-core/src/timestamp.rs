//! Millisecond-precision timestamps.
//!
//! Every timestamp the engine records is truncated to whole milliseconds and
//! serialized as `YYYY-MM-DDTHH:MM:SS.mmmZ`. Truncating at creation time keeps
//! the persisted document a fixed point under save/load.
//!
//! Use with `#[serde(with = "timestamp::millis")]` on struct fields:
//!
//! ```ignore
//! use verity_core::timestamp;
//! use chrono::{DateTime, Utc};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "timestamp::millis")]
//!     pub created_at: DateTime<Utc>,
//!
//!     #[serde(with = "timestamp::millis_option")]
//!     pub closed_at: Option<DateTime<Utc>>,
//! }
//! ```

use chrono::{DateTime, DurationRound, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Current UTC time truncated to milliseconds.
#[must_use]
pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// Drop sub-millisecond precision from `ts`.
#[must_use]
pub fn truncate(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(ts)
}

/// Render `ts` the way it appears on the wire and in CSV exports.
#[must_use]
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse<E: serde::de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| truncate(dt.with_timezone(&Utc)))
        .map_err(|e| E::custom(format!("invalid timestamp '{raw}': {e}")))
}

/// Serialize `DateTime<Utc>` as an RFC 3339 string with millisecond precision.
pub mod millis {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse(&raw)
    }
}

/// Serialize `Option<DateTime<Utc>>` as a nullable millisecond RFC 3339 string.
pub mod millis_option {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(ts: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => s.serialize_some(&super::format(ts)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|raw| super::parse(&raw))
            .transpose()
    }
}
