/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use thiserror::Error;

/// Failure to parse an `Instant` from a string.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstantParseError {
    /// The string was not a valid timestamp in the requested format.
    #[error("invalid timestamp: {0}")]
    Invalid(Cow<'static, str>),
}

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Appends the sub-second component as `.52`-style decimals, trailing zeros trimmed.
fn push_subsec(out: &mut String, subsec_nanos: u32) {
    if subsec_nanos != 0 {
        let padded = format!("{:09}", subsec_nanos);
        out.push('.');
        out.push_str(padded.trim_end_matches('0'));
    }
}

/// Splits `55.123` into whole seconds and subsecond nanos.
///
/// Fractions longer than 9 digits are truncated rather than rounded.
fn parse_seconds_and_fraction(s: &str) -> Result<(i64, u32), InstantParseError> {
    let invalid = || InstantParseError::Invalid(format!("expected seconds, found: {}", s).into());
    let (whole, fraction) = match s.find('.') {
        Some(idx) => (&s[..idx], &s[idx + 1..]),
        None => (s, ""),
    };
    let mut seconds: i64 = whole.parse().map_err(|_| invalid())?;
    let mut nanos = 0u32;
    if !fraction.is_empty() {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let digits: String = fraction.chars().take(9).collect();
        nanos = digits.parse::<u32>().map_err(|_| invalid())?
            * 10u32.pow(9 - digits.len() as u32);
        // `-5.25` is 0.25 seconds before -5, not after it
        if whole.starts_with('-') && nanos != 0 {
            seconds = seconds
                .checked_sub(1)
                .ok_or_else(|| InstantParseError::Invalid("seconds out of range".into()))?;
            nanos = NANOS_PER_SECOND - nanos;
        }
    }
    Ok((seconds, nanos))
}

pub(crate) mod epoch_seconds {
    use super::super::Instant;
    use super::InstantParseError;
    use super::NANOS_PER_SECOND;

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let (seconds, nanos) = super::parse_seconds_and_fraction(s)?;
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }

    pub(crate) fn format(instant: &Instant) -> String {
        let (seconds, nanos) = (instant.secs(), instant.subsec_nanos());
        if seconds < 0 && nanos != 0 {
            // Negative instants with a fraction print as one decimal value,
            // so the integer part is one closer to zero than `secs()`.
            let mut out = String::new();
            if seconds + 1 == 0 {
                out.push('-');
            }
            out.push_str(&(seconds + 1).to_string());
            super::push_subsec(&mut out, NANOS_PER_SECOND - nanos);
            out
        } else {
            let mut out = seconds.to_string();
            super::push_subsec(&mut out, nanos);
            out
        }
    }
}

pub(crate) mod rfc3339 {
    use super::super::Instant;
    use super::InstantParseError;
    use chrono::{DateTime, Utc};

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let date = DateTime::parse_from_rfc3339(s).map_err(|err| {
            InstantParseError::Invalid(format!("invalid rfc3339 timestamp: {}", err).into())
        })?;
        // The modulus drops chrono's leap-second representation (nanos >= 1e9)
        Ok(Instant::from_secs_and_nanos(
            date.timestamp(),
            date.timestamp_subsec_nanos() % 1_000_000_000,
        ))
    }

    pub(crate) fn format(instant: &Instant) -> String {
        let date: DateTime<Utc> =
            DateTime::from_timestamp(instant.secs(), instant.subsec_nanos())
                .expect("Instant out of range for rfc3339 formatting");
        let mut out = date.format("%Y-%m-%dT%H:%M:%S").to_string();
        super::push_subsec(&mut out, instant.subsec_nanos());
        out.push('Z');
        out
    }
}

pub(crate) mod http_date {
    use super::super::Instant;
    use super::InstantParseError;
    use chrono::{DateTime, NaiveDateTime, Utc};

    const FMT: &str = "%a, %d %b %Y %H:%M:%S";

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let invalid =
            |msg: &'static str| InstantParseError::Invalid(std::borrow::Cow::Borrowed(msg));
        let s = s
            .strip_suffix(" GMT")
            .ok_or_else(|| invalid("http dates must end in GMT"))?;
        let (base, nanos) = match s.find('.') {
            // The fraction must extend a two-digit seconds field; anything
            // else (including multibyte text before the dot) is malformed.
            Some(idx) if idx >= 2 && s.as_bytes()[idx - 2..idx].iter().all(u8::is_ascii_digit) => {
                let (_, fraction) = super::parse_seconds_and_fraction(&s[idx - 2..])?;
                (&s[..idx], fraction)
            }
            Some(_) => return Err(invalid("invalid http date")),
            None => (s, 0),
        };
        let date = NaiveDateTime::parse_from_str(base, FMT)
            .map_err(|_| invalid("invalid http date"))?;
        Ok(Instant::from_secs_and_nanos(
            date.and_utc().timestamp(),
            nanos,
        ))
    }

    pub(crate) fn format(instant: &Instant) -> String {
        let date: DateTime<Utc> =
            DateTime::from_timestamp(instant.secs(), instant.subsec_nanos())
                .expect("Instant out of range for http-date formatting");
        let mut out = date.format(FMT).to_string();
        super::push_subsec(&mut out, instant.subsec_nanos());
        out.push_str(" GMT");
        out
    }
}

#[cfg(test)]
mod test {
    use super::super::{Format, Instant};
    use proptest::prelude::*;

    #[test]
    fn epoch_seconds_negative_fraction() {
        let instant = Instant::from_str("-5.25", Format::EpochSeconds).expect("valid");
        assert_eq!(instant.secs(), -6);
        assert_eq!(instant.subsec_nanos(), 750_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds), "-5.25");
    }

    #[test]
    fn http_date_rejects_fraction_without_leading_digits() {
        // A dot not preceded by two ASCII digit bytes must come back as an
        // error, even when the preceding character is multibyte.
        assert!(Instant::from_str("\u{20ac}.5 GMT", Format::HttpDate).is_err());
        assert!(Instant::from_str("Mon, 16 Dec 2019 23:48:1\u{20ac}.5 GMT", Format::HttpDate).is_err());
        assert!(Instant::from_str(".5 GMT", Format::HttpDate).is_err());
    }

    #[test]
    fn fraction_truncated_beyond_nanos() {
        let instant = Instant::from_str("5.1234567891", Format::EpochSeconds).expect("valid");
        assert_eq!(instant.subsec_nanos(), 123_456_789);
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(seconds in -8_000_000_000i64..8_000_000_000i64, millis in 0u32..1000) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            let formatted = instant.fmt(Format::EpochSeconds);
            let parsed = Instant::from_str(&formatted, Format::EpochSeconds).expect("valid");
            prop_assert_eq!(instant, parsed);
        }

        #[test]
        fn rfc3339_round_trip(seconds in -8_000_000_000i64..8_000_000_000i64, millis in 0u32..1000) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            let formatted = instant.fmt(Format::DateTime);
            let parsed = Instant::from_str(&formatted, Format::DateTime).expect("valid");
            prop_assert_eq!(instant, parsed);
        }

        #[test]
        fn http_date_round_trip(seconds in 0i64..8_000_000_000i64, millis in 0u32..1000) {
            let instant = Instant::from_secs_and_nanos(seconds, millis * 1_000_000);
            let formatted = instant.fmt(Format::HttpDate);
            let parsed = Instant::from_str(&formatted, Format::HttpDate).expect("valid");
            prop_assert_eq!(instant, parsed);
        }
    }
}
