// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Output values of [`TimeBuilder`](super::TimeBuilder).

use super::step::DurationStep;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// A time of day with the UTC offset it was written with, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoTime {
    pub time: Time,
    pub offset: Option<UtcOffset>,
}

/// A date and time with the UTC offset it was written with, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoDateTime {
    pub datetime: PrimitiveDateTime,
    pub offset: Option<UtcOffset>,
}

impl IsoDateTime {
    /// Attaches the offset, if there was one.
    pub fn to_offset_datetime(&self) -> Option<OffsetDateTime> {
        self.offset.map(|offset| self.datetime.assume_offset(offset))
    }
}

/// One end of an interval, or one value of a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Date(Date),
    DateTime(IsoDateTime),
}

impl Endpoint {
    pub fn date(&self) -> Date {
        match self {
            Endpoint::Date(date) => *date,
            Endpoint::DateTime(value) => value.datetime.date(),
        }
    }

    pub fn offset(&self) -> Option<UtcOffset> {
        match self {
            Endpoint::Date(_) => None,
            Endpoint::DateTime(value) => value.offset,
        }
    }

    /// The endpoint as a date-time, with dates at midnight.
    pub fn to_primitive(&self) -> PrimitiveDateTime {
        match self {
            Endpoint::Date(date) => date.midnight(),
            Endpoint::DateTime(value) => value.datetime,
        }
    }

    /// Turns a bare date into a date-time at midnight.
    pub fn promoted(self) -> Endpoint {
        match self {
            Endpoint::Date(date) => {
                Endpoint::DateTime(IsoDateTime { datetime: date.midnight(), offset: None })
            }
            datetime => datetime,
        }
    }

    /// Time elapsed from `self` to `later`.
    ///
    /// When both ends carry an offset the difference is taken between the
    /// instants they denote; otherwise between the wall clock readings.
    pub fn elapsed_until(&self, later: &Endpoint) -> Duration {
        match (self.offset(), later.offset()) {
            (Some(from), Some(to)) => {
                later.to_primitive().assume_offset(to) - self.to_primitive().assume_offset(from)
            }
            _ => later.to_primitive() - self.to_primitive(),
        }
    }

    /// Moves the endpoint by `step`.
    ///
    /// A date stays a date unless `promote` is set. Returns `None` when the
    /// result would leave the representable range.
    pub(crate) fn shifted<D: DurationStep>(&self, step: &D, promote: bool) -> Option<Endpoint> {
        let anchor = self.to_primitive();
        if !step.fits(anchor) {
            return None;
        }
        match self {
            Endpoint::Date(date) if !promote => step.add_to_date(*date).map(Endpoint::Date),
            _ => step.add_to_datetime(anchor).map(|datetime| {
                Endpoint::DateTime(IsoDateTime { datetime, offset: self.offset() })
            }),
        }
    }
}

impl From<Date> for Endpoint {
    fn from(date: Date) -> Self {
        Endpoint::Date(date)
    }
}

impl From<IsoDateTime> for Endpoint {
    fn from(value: IsoDateTime) -> Self {
        Endpoint::DateTime(value)
    }
}

/// A resolved interval.
///
/// `<start>/<duration>` and `<duration>/<end>` always give `start <= end`.
/// A `<start>/<end>` interval keeps both ends as written, even when the end
/// comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: Endpoint,
    pub end: Endpoint,
}
