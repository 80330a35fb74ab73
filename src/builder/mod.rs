// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Builders
//!
//! Every tokenizer ends by handing its component tuple to a [`Builder`],
//! which decides what the caller gets back. Three are provided:
//!
//! * [`TimeBuilder`] range-checks the components and constructs `time`
//!   values. This is what the `parse_*` entry points use.
//! * [`RelativeTimeBuilder`] does the same but keeps years and months of a
//!   duration symbolic, so that adding `P1M` moves to the same day of the
//!   next month.
//! * [`ComponentsBuilder`] returns the tuples unchanged, without any checks.
//!
//! ```
//! use chumsky_iso8601::builder::{ComponentsBuilder, RelativeTimeBuilder};
//! use chumsky_iso8601::duration::parse_duration_with;
//! use chumsky_iso8601::interval::{parse_interval_with, Delimiters};
//! use time::macros::date;
//!
//! let raw = parse_duration_with("P1M", &ComponentsBuilder).unwrap();
//! assert_eq!(raw.months.as_deref(), Some("1"));
//!
//! let interval =
//!     parse_interval_with("2020-01-31/P1M", &Delimiters::new(), &RelativeTimeBuilder::default())
//!         .unwrap();
//! assert_eq!(interval.end.date(), date!(2020 - 02 - 29));
//! ```

mod calendar;
mod components;
mod repeat;
mod step;
mod value;

pub use calendar::{RelativeTimeBuilder, TimeBuilder};
pub use components::ComponentsBuilder;
pub use repeat::Repetitions;
pub use step::{DurationStep, DurationValues, RelativeDuration};
pub use value::{Endpoint, Interval, IsoDateTime, IsoTime};

use crate::components::{
    DateComponents, DurationComponents, IntervalComponents, RepeatingIntervalComponents,
    TimeComponents, TimezoneComponents,
};
use crate::Error;

/// Turns component tuples into output values.
///
/// Each method receives the tuple produced by the matching tokenizer. An
/// implementation decides both the output type and how much validation
/// happens on the way.
pub trait Builder {
    type Date;
    type Time;
    type DateTime;
    type Timezone;
    type Duration;
    type Interval;
    type RepeatingInterval;

    fn build_date(&self, date: DateComponents) -> Result<Self::Date, Error>;

    fn build_time(&self, time: TimeComponents) -> Result<Self::Time, Error>;

    fn build_datetime(
        &self,
        date: DateComponents,
        time: TimeComponents,
    ) -> Result<Self::DateTime, Error>;

    fn build_timezone(&self, timezone: TimezoneComponents) -> Result<Self::Timezone, Error>;

    fn build_duration(&self, duration: DurationComponents) -> Result<Self::Duration, Error>;

    fn build_interval(&self, interval: IntervalComponents) -> Result<Self::Interval, Error>;

    fn build_repeating_interval(
        &self,
        repeating: RepeatingIntervalComponents,
    ) -> Result<Self::RepeatingInterval, Error>;
}
