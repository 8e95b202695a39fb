/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The timestamp type carried by shape fields.
//!
//! AWS services put the same point in time on the wire three different ways
//! depending on the protocol: an RFC-3339 string, an RFC-7231 `Date` header
//! string, or a (possibly fractional) count of epoch seconds. [`Instant`]
//! stores the value once, as seconds and sub-second nanos since the Unix
//! epoch, and converts to and from each wire [`Format`].

mod format;

pub use format::InstantParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and sub-second nanos since the Unix
/// epoch (January 1, 1970 at midnight UTC).
///
/// The sub-second component is always a forward offset, so one quarter
/// second *before* the epoch is `seconds: -1, nanos: 750_000_000`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanos: u32,
}

impl Instant {
    /// Creates an `Instant` from whole seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            nanos: 0,
        }
    }

    /// Creates an `Instant` from seconds and sub-second nanos.
    ///
    /// # Panics
    ///
    /// Panics when `nanos` amounts to a full second or more.
    pub fn from_secs_and_nanos(epoch_seconds: i64, nanos: u32) -> Self {
        assert!(
            nanos < NANOS_PER_SECOND,
            "sub-second nanos must stay below one second, got {}",
            nanos
        );
        Instant {
            seconds: epoch_seconds,
            nanos,
        }
    }

    /// Creates an `Instant` from whole seconds and a `[0, 1)` fraction.
    ///
    /// # Example
    /// ```
    /// # use shape_types::Instant;
    /// assert_eq!(
    ///     Instant::from_secs_and_nanos(1, 500_000_000u32),
    ///     Instant::from_fractional_secs(1, 0.5),
    /// );
    /// ```
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        Instant::from_secs_and_nanos(epoch_seconds, (fraction * NANOS_PER_SECOND as f64) as u32)
    }

    /// Creates an `Instant` from an `f64` count of epoch seconds.
    ///
    /// This is the value the epoch-seconds wire format carries; precision
    /// beyond what an `f64` holds is lost.
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let whole = epoch_seconds.floor();
        Instant::from_fractional_secs(whole as i64, epoch_seconds - whole)
    }

    /// Returns the instant as an `f64` count of epoch seconds.
    ///
    /// _Note: This conversion will lose precision due to the nature of
    /// floating point numbers._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Parses an `Instant` from its representation in the given wire `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    /// Formats the `Instant` for the given wire `format`.
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::HttpDate => format::http_date::format(self),
            Format::EpochSeconds => format::epoch_seconds::format(self),
        }
    }

    /// The whole-seconds component, excluding sub-second nanos.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// The sub-second nanos component, excluding the seconds.
    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }
}

/// The wire representations an [`Instant`] converts to and from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC-3339 date-time string, e.g. `2019-12-16T23:48:18Z`.
    DateTime,
    /// RFC-7231 `Date` header string, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`.
    HttpDate,
    /// Count of epoch seconds as a decimal number, e.g. `1576540098.52`.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};

    #[test]
    fn one_instant_three_wire_forms() {
        let instant = Instant::from_secs(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");
    }

    #[test]
    fn fractions_survive_each_format() {
        let instant = Instant::from_fractional_secs(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(
            instant.fmt(Format::HttpDate),
            "Mon, 16 Dec 2019 23:48:18.52 GMT"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");

        for format in [Format::DateTime, Format::HttpDate, Format::EpochSeconds] {
            let parsed = Instant::from_str(&instant.fmt(format), format).expect("valid");
            assert_eq!(parsed, instant);
        }
    }

    #[test]
    fn each_format_parses_its_own_rendition() {
        let expected = Instant::from_secs(1576540098);
        for (text, format) in [
            ("2019-12-16T23:48:18Z", Format::DateTime),
            ("Mon, 16 Dec 2019 23:48:18 GMT", Format::HttpDate),
            ("1576540098", Format::EpochSeconds),
        ] {
            assert_eq!(Instant::from_str(text, format).expect("valid"), expected);
        }
    }

    #[test]
    fn malformed_text_is_an_error_in_every_format() {
        for format in [Format::DateTime, Format::HttpDate, Format::EpochSeconds] {
            assert!(Instant::from_str("Mon, 16 Dec 2019", format).is_err());
            assert!(Instant::from_str("not a timestamp", format).is_err());
        }
    }

    #[test]
    fn f64_epoch_seconds_round_trip() {
        let instant = Instant::from_secs_f64(1576540098.5);
        assert_eq!(instant.secs(), 1576540098);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
        assert_eq!(instant.as_secs_f64(), 1576540098.5);

        // Negative fractional values floor toward the epoch's past
        let instant = Instant::from_secs_f64(-0.75);
        assert_eq!(instant.secs(), -1);
        assert_eq!(instant.subsec_nanos(), 250_000_000);
    }
}
