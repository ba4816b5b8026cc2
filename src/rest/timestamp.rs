//! Gerrit's timestamp format.
//!
//! Gerrit writes instants as `"YYYY-MM-DD HH:MM:SS.nnnnnnnnn"`: a space
//! instead of `T`, always nine fraction digits and no zone suffix, the zone
//! being implicitly UTC. [`Timestamp`] round-trips that text exactly.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::TimestampError;

const LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.9f";
const LAYOUT_LEN: usize = 29;

/// An instant in UTC with nanosecond precision.
///
/// Serializes to and from Gerrit's timestamp text. JSON `null` decodes to
/// the zero instant (`0001-01-01 00:00:00 UTC`) instead of failing, which
/// is also the [`Default`].
///
/// # Example
///
/// ```rust
/// use gerrit_api::rest::Timestamp;
///
/// let ts: Timestamp = serde_json::from_str(r#""2024-11-19 08:51:36.123456789""#).unwrap();
/// assert_eq!(ts.timestamp_subsec_nanos(), 123_456_789);
/// assert_eq!(
///     serde_json::to_string(&ts).unwrap(),
///     r#""2024-11-19 08:51:36.123456789""#
/// );
///
/// let unset: Timestamp = serde_json::from_str("null").unwrap();
/// assert!(unset.is_zero());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wraps an instant from any time zone, normalized to UTC.
    #[must_use]
    pub fn new<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.with_timezone(&Utc))
    }

    /// Returns the zero instant, `0001-01-01 00:00:00 UTC`.
    #[must_use]
    pub fn zero() -> Self {
        let midnight = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or(NaiveDateTime::MIN);
        Self(Utc.from_utc_datetime(&midnight))
    }

    /// Returns `true` for the zero instant, as produced by decoding `null`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns the wrapped instant.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Renders the instant without surrounding quotes.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::YearOutOfRange`] if the year is outside
    /// `[0, 9999]`.
    pub fn encode(&self) -> Result<String, TimestampError> {
        let year = self.0.year();
        if !(0..=9999).contains(&year) {
            return Err(TimestampError::YearOutOfRange { year });
        }
        Ok(self.0.format(LAYOUT).to_string())
    }

    /// Parses unquoted timestamp text.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::InvalidFormat`] unless `input` matches
    /// `YYYY-MM-DD HH:MM:SS.nnnnnnnnn` exactly.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        let invalid = || TimestampError::InvalidFormat {
            input: input.to_string(),
        };
        if input.len() != LAYOUT_LEN || !input.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let naive = NaiveDateTime::parse_from_str(input, LAYOUT).map_err(|_| invalid())?;
        Ok(Self(Utc.from_utc_datetime(&naive)))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.encode().map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a Gerrit timestamp string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Timestamp::parse(value).map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::zero())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::zero())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> Timestamp {
        let naive = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_nano_opt(h, mi, s, nanos)
            .unwrap();
        Timestamp::from(Utc.from_utc_datetime(&naive))
    }

    #[test]
    fn test_encode_uses_fixed_layout() {
        let ts = utc(2024, 11, 19, 8, 51, 36, 0);
        assert_eq!(ts.encode().unwrap(), "2024-11-19 08:51:36.000000000");
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            r#""2024-11-19 08:51:36.000000000""#
        );
    }

    #[test]
    fn test_round_trip_keeps_nanoseconds() {
        for ts in [
            utc(2024, 2, 29, 23, 59, 59, 999_999_999),
            utc(1970, 1, 1, 0, 0, 0, 1),
            utc(0, 1, 1, 0, 0, 0, 0),
            utc(9999, 12, 31, 23, 59, 59, 123_000_000),
        ] {
            let text = serde_json::to_string(&ts).unwrap();
            let decoded: Timestamp = serde_json::from_str(&text).unwrap();
            assert_eq!(decoded, ts, "round trip of {text}");
        }
    }

    #[test]
    fn test_encode_rejects_years_out_of_range() {
        let ts = utc(10000, 1, 1, 0, 0, 0, 0);
        assert_eq!(
            ts.encode(),
            Err(TimestampError::YearOutOfRange { year: 10000 })
        );
        assert!(serde_json::to_string(&ts).is_err());

        let ts = utc(-1, 1, 1, 0, 0, 0, 0);
        assert!(matches!(
            ts.encode(),
            Err(TimestampError::YearOutOfRange { year: -1 })
        ));
    }

    #[test]
    fn test_null_decodes_to_zero() {
        let ts: Timestamp = serde_json::from_value(json!(null)).unwrap();
        assert!(ts.is_zero());
        assert_eq!(ts, Timestamp::default());
        assert_eq!(ts.encode().unwrap(), "0001-01-01 00:00:00.000000000");
    }

    #[test]
    fn test_optional_field_accepts_missing_and_null() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default)]
            at: Option<Timestamp>,
            updated: Timestamp,
        }

        let wrapper: Wrapper = serde_json::from_str(r#"{"updated": null}"#).unwrap();
        assert!(wrapper.at.is_none());
        assert!(wrapper.updated.is_zero());
    }

    #[test]
    fn test_decode_rejects_other_layouts() {
        for text in [
            r#""2024-11-19T08:51:36.000000000""#,
            r#""2024-11-19 08:51:36""#,
            r#""2024-11-19 08:51:36.000000""#,
            r#""2024-11-19 08:51:36.000000000Z""#,
            r#""+024-11-19 08:51:36.000000000""#,
            r#""""#,
            "12",
        ] {
            assert!(
                serde_json::from_str::<Timestamp>(text).is_err(),
                "accepted {text}"
            );
        }
    }

    #[test]
    fn test_parse_reports_input() {
        let error = Timestamp::parse("yesterday").unwrap_err();
        assert_eq!(
            error,
            TimestampError::InvalidFormat {
                input: "yesterday".to_string()
            }
        );
    }

    #[test]
    fn test_new_normalizes_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let ts = Timestamp::new(&local);

        assert_eq!(ts.encode().unwrap(), "2024-06-01 10:00:00.000000000");
    }

    #[test]
    fn test_from_str_and_deref() {
        let ts: Timestamp = "2023-01-02 03:04:05.000000006".parse().unwrap();
        assert_eq!(ts.year(), 2023);
        assert_eq!(ts.timestamp_subsec_nanos(), 6);
    }
}
