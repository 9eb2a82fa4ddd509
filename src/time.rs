use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

/// Calendar date, optionally followed by a time of day and a UTC offset.
static ISO_8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})",
        r"(?:[T ]([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:[.,]([0-9]{1,9}))?)?",
        r"(Z|[+-][0-9]{2}:?[0-9]{2})?)?$",
    ))
    .expect("ISO-8601 pattern is valid")
});

/// Parse a string with the strict ISO-8601 grammar used for date reconstitution.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM[:SS[.fraction]]` with an optional
/// `Z` or `±HH:MM` offset. The time may also follow a single space instead of
/// `T`, and the fraction may start with `,`. Values without an offset are taken as UTC. Anything
/// else, including out-of-range calendar values, yields `None`.
pub fn parse_iso8601(input: &str) -> Option<DateTime<Utc>> {
    let caps = ISO_8601.captures(input)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(2)?, number(3)?)?;

    if caps.get(4).is_none() {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    let nanos = match caps.get(7) {
        // right-pad to nine digits: ".5" is 500ms, not 5ns
        Some(m) => format!("{:0<9}", m.as_str()).parse::<u32>().ok()?,
        None => 0,
    };
    let time =
        NaiveTime::from_hms_nano_opt(number(4)?, number(5)?, number(6).unwrap_or(0), nanos)?;
    let local = date.and_time(time);

    let offset = match caps.get(8).map(|m| m.as_str()) {
        None | Some("Z") => FixedOffset::east_opt(0)?,
        Some(raw) => parse_offset(raw)?,
    };
    let dt = offset.from_local_datetime(&local).single()?;
    Some(dt.with_timezone(&Utc))
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let sign = if raw.starts_with('-') { -1 } else { 1 };
    let digits: String = raw[1..].chars().filter(|c| *c != ':').collect();
    let hours: i32 = digits.get(0..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Canonical ISO-8601 form: UTC with a `Z` suffix and at least millisecond
/// precision. Finer fractions are kept as micro- or nanoseconds, so parsing
/// the output gives back the same instant.
pub fn format_iso8601(dt: &DateTime<Utc>) -> String {
    let format = if dt.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    dt.to_rfc3339_opts(format, true)
}

/// Timestamp as exchanged with the service: an ISO-8601 string on the wire,
/// a `chrono::DateTime<Utc>` in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub DateTime<Utc>);

impl Time {
    /// Create a new Time from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }

    /// Parse with the strict ISO-8601 grammar
    pub fn parse(input: &str) -> Option<Self> {
        parse_iso8601(input).map(Time)
    }

    /// Get the timestamp in milliseconds
    pub fn unix_milli(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Get the canonical ISO-8601 string
    pub fn iso(&self) -> String {
        format_iso8601(&self.0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso())
    }
}

impl Deref for Time {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(t: Time) -> Self {
        t.0
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.iso())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Time::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_accepts_date_time_with_zulu() {
        assert_eq!(
            parse_iso8601("2021-06-15T10:00:00Z"),
            Some(utc("2021-06-15T10:00:00Z"))
        );
        assert_eq!(
            parse_iso8601("2021-06-15T10:00:00.000Z"),
            Some(utc("2021-06-15T10:00:00Z"))
        );
    }

    #[test]
    fn test_parse_accepts_date_only_as_utc_midnight() {
        assert_eq!(parse_iso8601("2021-06-15"), Some(utc("2021-06-15T00:00:00Z")));
    }

    #[test]
    fn test_parse_applies_offsets() {
        let expected = Some(utc("2021-06-15T08:00:00Z"));
        assert_eq!(parse_iso8601("2021-06-15T10:00:00+02:00"), expected);
        assert_eq!(parse_iso8601("2021-06-15T10:00:00+0200"), expected);
        assert_eq!(
            parse_iso8601("2021-06-15T10:00-01:30"),
            Some(utc("2021-06-15T11:30:00Z"))
        );
    }

    #[test]
    fn test_parse_fraction_is_right_padded() {
        let dt = parse_iso8601("2021-06-15T10:00:00.5Z").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_parse_without_offset_is_utc() {
        assert_eq!(
            parse_iso8601("2021-06-15T10:00:00"),
            Some(utc("2021-06-15T10:00:00Z"))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        for input in [
            "2021-13-40",
            "2021-02-30",
            "2021-06-15T24:00:00Z",
            "2021-06-15T10:00:60Z",
            "2021-06-15T10:00:00+25:00",
            "2021",
            "20210615",
            "12345",
            "1.5",
            "2021-6-15",
            " 2021-06-15",
            "2021-06-15 ",
            "2021-06-15T10",
            "2021-06-15T10:00:00ZZ",
            "2021-06-15  10:00:00",
            "2021-06-15T10:00:00.Z",
            "2021-06-15t10:00:00z",
            "Namespace 1",
            "",
        ] {
            assert_eq!(parse_iso8601(input), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_accepts_space_separator_and_comma_fraction() {
        assert_eq!(
            parse_iso8601("2021-06-15 10:00:00"),
            Some(utc("2021-06-15T10:00:00Z"))
        );
        assert_eq!(
            parse_iso8601("2021-06-15T10:00:00,123Z"),
            Some(utc("2021-06-15T10:00:00.123Z"))
        );
        assert_eq!(
            parse_iso8601("2021-06-15 10:00+02:00"),
            Some(utc("2021-06-15T08:00:00Z"))
        );
    }

    #[test]
    fn test_format_keeps_sub_millisecond_precision() {
        let micros = parse_iso8601("2021-06-15T10:00:00.123456Z").unwrap();
        assert_eq!(format_iso8601(&micros), "2021-06-15T10:00:00.123456Z");
        assert_eq!(parse_iso8601(&format_iso8601(&micros)), Some(micros));

        let nanos = parse_iso8601("2021-06-15T10:00:00.000000001Z").unwrap();
        assert_eq!(format_iso8601(&nanos), "2021-06-15T10:00:00.000000001Z");

        let millis = parse_iso8601("2021-06-15T10:00:00.120Z").unwrap();
        assert_eq!(format_iso8601(&millis), "2021-06-15T10:00:00.120Z");
    }

    #[test]
    fn test_format_round_trips_canonical_strings() {
        let original = "2021-06-15T10:00:00.000Z";
        let dt = parse_iso8601(original).unwrap();
        assert_eq!(format_iso8601(&dt), original);
    }

    #[test]
    fn test_time_serialization() {
        let time = Time::parse("2021-06-15T12:30:00+02:00").unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"2021-06-15T10:30:00.000Z\"");
    }

    #[test]
    fn test_time_deserialization() {
        let time: Time = serde_json::from_str("\"2021-06-15\"").unwrap();
        assert_eq!(time.iso(), "2021-06-15T00:00:00.000Z");

        let err = serde_json::from_str::<Time>("\"not a date\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_time_null() {
        let result: Result<Option<Time>, _> = serde_json::from_str("null");
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }
}
