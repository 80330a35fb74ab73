// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The finest unit present in a parsed string, ordered coarse to fine.

/// Finest unit of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateResolution {
    Year,
    Month,
    Week,
    Weekday,
    Day,
    Ordinal,
}

/// Finest unit of a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeResolution {
    Hours,
    Minutes,
    Seconds,
}

/// Lowest-order unit of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationResolution {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// Finest unit of any part of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntervalResolution {
    Year,
    Month,
    Week,
    Weekday,
    Day,
    Ordinal,
    Hours,
    Minutes,
    Seconds,
}

impl From<DateResolution> for IntervalResolution {
    fn from(value: DateResolution) -> Self {
        match value {
            DateResolution::Year => IntervalResolution::Year,
            DateResolution::Month => IntervalResolution::Month,
            DateResolution::Week => IntervalResolution::Week,
            DateResolution::Weekday => IntervalResolution::Weekday,
            DateResolution::Day => IntervalResolution::Day,
            DateResolution::Ordinal => IntervalResolution::Ordinal,
        }
    }
}

impl From<TimeResolution> for IntervalResolution {
    fn from(value: TimeResolution) -> Self {
        match value {
            TimeResolution::Hours => IntervalResolution::Hours,
            TimeResolution::Minutes => IntervalResolution::Minutes,
            TimeResolution::Seconds => IntervalResolution::Seconds,
        }
    }
}

impl From<DurationResolution> for IntervalResolution {
    fn from(value: DurationResolution) -> Self {
        match value {
            DurationResolution::Years => IntervalResolution::Year,
            DurationResolution::Months => IntervalResolution::Month,
            DurationResolution::Weeks => IntervalResolution::Week,
            DurationResolution::Days => IntervalResolution::Day,
            DurationResolution::Hours => IntervalResolution::Hours,
            DurationResolution::Minutes => IntervalResolution::Minutes,
            DurationResolution::Seconds => IntervalResolution::Seconds,
        }
    }
}
