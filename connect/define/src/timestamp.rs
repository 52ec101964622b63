//! Epoch-second instants.
//!
//! The service exchanges instants as seconds since the Unix epoch, written as
//! an integer when the instant falls on a whole second and as a fraction
//! otherwise. A fraction travels as an `f64`, which resolves about a quarter
//! of a microsecond at current epoch values, so parsed instants are rounded
//! to the nearest microsecond. Sub-microsecond detail does not survive a
//! round trip.

use chrono::{DateTime, Utc};

const MICROS_PER_SECOND: f64 = 1_000_000.0;
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Converts an instant to fractional epoch seconds.
///
/// ## Examples
///
/// ```
/// use chrono::DateTime;
/// use connect_define::timestamp::to_epoch_seconds;
///
/// let instant = DateTime::from_timestamp(1_700_000_000, 500_000_000).unwrap();
/// assert_eq!(to_epoch_seconds(&instant), 1_700_000_000.5);
/// ```
pub fn to_epoch_seconds(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / NANOS_PER_SECOND
}

/// Converts fractional epoch seconds to an instant.
///
/// Returns `None` for non-finite input or values outside chrono's range.
///
/// ## Examples
///
/// ```
/// use connect_define::timestamp::from_epoch_seconds;
///
/// let instant = from_epoch_seconds(1_700_000_000.25).unwrap();
/// assert_eq!(instant.timestamp(), 1_700_000_000);
/// assert_eq!(instant.timestamp_subsec_millis(), 250);
/// assert!(from_epoch_seconds(f64::NAN).is_none());
/// ```
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let mut secs = whole as i64;
    let mut micros = ((seconds - whole) * MICROS_PER_SECOND).round() as u32;
    if micros >= 1_000_000 {
        secs += 1;
        micros = 0;
    }
    DateTime::from_timestamp(secs, micros * 1_000)
}

/// Serde adapter for `Option<DateTime<Utc>>` members.
///
/// Use together with `default` and `skip_serializing_if`:
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct QueueInfo {
///     #[serde(
///         default,
///         skip_serializing_if = "Option::is_none",
///         with = "connect_define::timestamp::epoch_seconds"
///     )]
///     enqueue_timestamp: Option<DateTime<Utc>>,
/// }
///
/// let info: QueueInfo = serde_json::from_str(r#"{"EnqueueTimestamp": 1700000000}"#).unwrap();
/// assert_eq!(info.enqueue_timestamp.unwrap().timestamp(), 1_700_000_000);
/// ```
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) if instant.timestamp_subsec_nanos() == 0 => {
                serializer.serialize_i64(instant.timestamp())
            }
            Some(instant) => serializer.serialize_f64(super::to_epoch_seconds(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<f64>::deserialize(deserializer)? {
            Some(seconds) => super::from_epoch_seconds(seconds)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("epoch seconds out of range: {seconds}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::SubsecRound;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Stamped {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "epoch_seconds"
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn whole_seconds_serialize_as_integer() {
        let value = Stamped {
            at: DateTime::from_timestamp(1_700_000_000, 0),
        };
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"At":1700000000}"#);
    }

    #[test]
    fn fractional_seconds_serialize_as_float() {
        let value = Stamped {
            at: DateTime::from_timestamp(1_700_000_000, 125_000_000),
        };
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"At":1700000000.125}"#);
    }

    #[test]
    fn absent_instant_is_omitted() {
        let value = Stamped { at: None };
        assert_eq!(serde_json::to_string(&value).unwrap(), "{}");

        let parsed: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Stamped { at: None });
    }

    #[test]
    fn millisecond_instants_survive_a_round_trip() {
        let value = Stamped {
            at: DateTime::from_timestamp_millis(1_697_040_000_123),
        };
        let json = serde_json::to_string(&value).unwrap();
        let parsed: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn nanosecond_instants_keep_microsecond_precision() {
        let value = Stamped {
            at: DateTime::from_timestamp(1_700_000_000, 123_456_789),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.starts_with(r#"{"At":1700000000.123"#), "{json}");

        let parsed: Stamped = serde_json::from_str(&json).unwrap();
        let expected = value.at.map(|at| at.round_subsecs(6));
        assert_eq!(parsed.at, expected);
        assert_eq!(parsed.at.unwrap().timestamp_subsec_nanos(), 123_457_000);
    }

    #[test]
    fn sub_microsecond_offset_is_not_written_as_whole_second() {
        let value = Stamped {
            at: DateTime::from_timestamp(1_700_000_000, 500),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_ne!(json, r#"{"At":1700000000}"#);
        assert!(json.contains('.'), "{json}");

        let parsed: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn explicit_null_is_absent() {
        let parsed: Stamped = serde_json::from_str(r#"{"At":null}"#).unwrap();
        assert!(parsed.at.is_none());
    }

    #[test]
    fn rounding_carries_into_the_next_second() {
        let instant = from_epoch_seconds(9.999_999_9).unwrap();
        assert_eq!(instant.timestamp(), 10);
        assert_eq!(instant.timestamp_subsec_micros(), 0);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(from_epoch_seconds(f64::INFINITY).is_none());
        assert!(serde_json::from_str::<Stamped>(r#"{"At":1e300}"#).is_err());
    }
}
