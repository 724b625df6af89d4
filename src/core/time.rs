//! Wire format for lesson datetimes
//!
//! Lesson `start`/`end` travel as `YYYY-MM-DD HH:MM:SS` strings and are
//! stored as `NaiveDateTime`. The format is strict: anything else is a
//! validation failure.

use chrono::NaiveDateTime;

/// The strict datetime wire format
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a wire-format datetime string
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
}

/// serde adapter for `NaiveDateTime` fields in the wire format
pub mod wire {
    use super::{DATETIME_FORMAT, parse_datetime};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}

/// serde adapter for `Option<NaiveDateTime>` fields in the wire format
pub mod wire_opt {
    use super::{DATETIME_FORMAT, parse_datetime};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        dt: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| parse_datetime(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_datetime() {
        let dt = parse_datetime("2024-01-01 09:00:00").unwrap();
        assert_eq!(dt.format(DATETIME_FORMAT).to_string(), "2024-01-01 09:00:00");
    }

    #[test]
    fn test_parse_rejects_slashes() {
        assert!(parse_datetime("2020/01/01 09:00:00").is_err());
    }

    #[test]
    fn test_parse_rejects_date_only() {
        assert!(parse_datetime("2024-01-01").is_err());
    }
}
