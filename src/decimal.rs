// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Decimal Components
//!
//! ISO 8601 lets the lowest-order component of a time or duration carry a
//! decimal fraction, written with either a comma or a full stop. This module
//! parses such components into an exact rational value while keeping the
//! original digit strings around, so that unit conversion never goes through
//! floating point.
//!
//! ```
//! use chumsky_iso8601::decimal::Decimal;
//!
//! let hours = Decimal::parse("14,9999999999999999").unwrap();
//! assert_eq!(hours.integer(), "14");
//! assert_eq!(hours.fraction(), Some("9999999999999999"));
//!
//! // 14.9999999999999999 hours in microseconds, truncated rather than rounded.
//! assert_eq!(hours.scaled(3_600_000_000).to_string(), "53999999999");
//! ```

use crate::Error;
use num::{ToPrimitive, Zero};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::borrow::Cow;
use std::str::FromStr;

pub const MICROS_PER_SECOND: u64 = 1_000_000;
pub const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;
pub const MICROS_PER_HOUR: u64 = 60 * MICROS_PER_MINUTE;
pub const MICROS_PER_DAY: u64 = 24 * MICROS_PER_HOUR;

/// Replaces a decimal comma with a full stop.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.contains(',') {
        Cow::Owned(text.replace(',', "."))
    } else {
        Cow::Borrowed(text)
    }
}

/// A non-negative decimal component such as `14`, `14.5` or `14,5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    /// The exact value.
    value: BigRational,

    /// Digits before the decimal mark.
    integer: String,

    /// Digits after the decimal mark, if a mark was present.
    fraction: Option<String>,
}

impl Decimal {
    /// Parses a component made of digits with an optional fraction.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let normalized = normalize(text);
        let (integer, fraction) = match normalized.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (&*normalized, None),
        };

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !fraction.map_or(true, all_digits) {
            return Err(Error::format(format!("{text:?} is not a valid decimal component")));
        }

        let fraction_digits = fraction.unwrap_or("");
        let numerator = BigInt::from_str(&format!("{integer}{fraction_digits}"))
            .map_err(|_| Error::format(format!("{text:?} is not a valid decimal component")))?;
        let denominator = num_traits::pow(BigInt::from(10), fraction_digits.len());

        Ok(Decimal {
            value: BigRational::new(numerator, denominator),
            integer: integer.to_string(),
            fraction: fraction.map(str::to_string),
        })
    }

    /// Digits before the decimal mark, as written.
    pub fn integer(&self) -> &str {
        &self.integer
    }

    /// Digits after the decimal mark, as written.
    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Whether the component was written with a decimal mark.
    pub fn is_fractional(&self) -> bool {
        self.fraction.is_some()
    }

    /// Whether the value has a non-zero fractional part (`1.0` does not).
    pub fn has_remainder(&self) -> bool {
        !self.value.is_integer()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The exact value.
    pub fn value(&self) -> &BigRational {
        &self.value
    }

    /// The whole part of the value.
    pub fn whole(&self) -> BigInt {
        self.value.to_integer()
    }

    /// The whole part, if it fits in a `u64`.
    pub fn whole_u64(&self) -> Option<u64> {
        self.whole().to_u64()
    }

    /// Expresses the value in a unit `factor` times finer, truncating
    /// whatever is left below one of those units.
    pub fn scaled(&self, factor: u64) -> BigInt {
        (&self.value * BigRational::from_integer(BigInt::from(factor))).to_integer()
    }
}

/// Splits a count of microseconds within one day into hours, minutes,
/// seconds and microseconds.
pub fn split_clock(total_micros: u64) -> (u64, u64, u64, u64) {
    let hours = total_micros / MICROS_PER_HOUR;
    let rest = total_micros % MICROS_PER_HOUR;
    let minutes = rest / MICROS_PER_MINUTE;
    let rest = rest % MICROS_PER_MINUTE;
    (hours, minutes, rest / MICROS_PER_SECOND, rest % MICROS_PER_SECOND)
}
