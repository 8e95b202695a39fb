/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `#[serde(with = ...)]` helpers for [`Instant`](crate::Instant) fields.
//!
//! AWS protocols carry timestamps in three formats; each module below maps
//! one of them onto `Instant`, with an `option` submodule for the
//! `Option<Instant>` fields shape structs actually use.

macro_rules! string_format {
    ($mod_name:ident, $format:expr, $expecting:literal) => {
        /// Serde support for timestamps in the named wire format.
        pub mod $mod_name {
            use crate::instant::Format;
            use crate::Instant;
            use serde::de::{Error, Unexpected};
            use serde::{Deserialize, Deserializer, Serializer};

            /// Serializes an `Instant` in this wire format.
            pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&instant.fmt($format))
            }

            /// Deserializes an `Instant` from this wire format.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
            where
                D: Deserializer<'de>,
            {
                let ts = String::deserialize(deserializer)?;
                Instant::from_str(&ts, $format)
                    .map_err(|_| D::Error::invalid_value(Unexpected::Str(&ts), &$expecting))
            }

            /// The same format, for `Option<Instant>` fields.
            pub mod option {
                use crate::instant::Format;
                use crate::Instant;
                use serde::de::{Error, Unexpected};
                use serde::{Deserialize, Deserializer, Serializer};

                /// Serializes an optional `Instant` in this wire format.
                pub fn serialize<S>(
                    instant: &Option<Instant>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    match instant {
                        Some(instant) => serializer.serialize_str(&instant.fmt($format)),
                        None => serializer.serialize_none(),
                    }
                }

                /// Deserializes an optional `Instant` from this wire format.
                pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let ts = Option::<String>::deserialize(deserializer)?;
                    match ts {
                        None => Ok(None),
                        Some(ts) => Instant::from_str(&ts, $format)
                            .map(Some)
                            .map_err(|_| {
                                D::Error::invalid_value(Unexpected::Str(&ts), &$expecting)
                            }),
                    }
                }
            }
        }
    };
}

string_format!(instant_iso8601, Format::DateTime, "valid iso8601 date");
string_format!(instant_httpdate, Format::HttpDate, "valid http date");

/// Serde support for timestamps carried as fractional epoch seconds.
pub mod instant_epoch {
    use crate::Instant;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an `Instant` as a JSON number of epoch seconds.
    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(instant.as_secs_f64())
    }

    /// Deserializes an `Instant` from a JSON number of epoch seconds.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let epoch = f64::deserialize(deserializer)?;
        Ok(Instant::from_secs_f64(epoch))
    }

    /// Epoch-seconds format for `Option<Instant>` fields.
    pub mod option {
        use crate::Instant;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes an optional `Instant` as epoch seconds.
        pub fn serialize<S>(instant: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match instant {
                Some(instant) => serializer.serialize_f64(instant.as_secs_f64()),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional `Instant` from epoch seconds.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let epoch = Option::<f64>::deserialize(deserializer)?;
            Ok(epoch.map(Instant::from_secs_f64))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug, Default)]
    struct TimestampShape {
        #[serde(
            rename = "CreatedTime",
            with = "crate::serde_util::instant_iso8601::option",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        created_time: Option<Instant>,
        #[serde(
            rename = "StartedOn",
            with = "crate::serde_util::instant_epoch::option",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        started_on: Option<Instant>,
    }

    #[test]
    fn iso8601_field_round_trip() {
        let shape = TimestampShape {
            created_time: Some(Instant::from_secs(1576540098)),
            started_on: None,
        };
        let json = serde_json::to_string(&shape).expect("serializable");
        assert_eq!(json, r#"{"CreatedTime":"2019-12-16T23:48:18Z"}"#);
        let back: TimestampShape = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(shape, back);
    }

    #[test]
    fn epoch_field_round_trip() {
        let shape = TimestampShape {
            created_time: None,
            started_on: Some(Instant::from_fractional_secs(1576540098, 0.5)),
        };
        let json = serde_json::to_string(&shape).expect("serializable");
        assert_eq!(json, r#"{"StartedOn":1576540098.5}"#);
        let back: TimestampShape = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(shape, back);
    }

    #[test]
    fn absent_fields_stay_absent() {
        let shape: TimestampShape = serde_json::from_str("{}").expect("deserializable");
        assert_eq!(shape, TimestampShape::default());
        assert_eq!(serde_json::to_string(&shape).unwrap(), "{}");
    }
}
