// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Chumsky ISO 8601
//!
//! Parsers for ISO 8601 dates, times, UTC offsets, durations, intervals and
//! repeating intervals, built on the
//! [chumsky](https://github.com/zesterer/chumsky) parser combinator library.
//!
//! Parsing happens in two steps. A tokenizer scans the input into a tuple of
//! digit strings, one per grammar component, and a [`Builder`] then
//! range-checks that tuple and constructs the output. The default builder
//! produces values from the [`time`] crate; others can be plugged in through
//! the `*_with` entry points.
//!
//! ## Features
//!
//! * **Dates** - calendar (`1981-04-05`), week (`1981-W14-7`), ordinal
//!   (`1981-095`) and truncated (`1981-04`, `19`) forms, basic or extended.
//! * **Times** - `hh:mm:ss`, `hhmmss` and their truncations, a decimal
//!   fraction on the lowest field, hour 24 as midnight, and UTC offsets.
//! * **Durations** - `PnYnMnDTnHnMnS`, `PnW` and `PYYYY-MM-DDThh:mm:ss`.
//! * **Intervals** - any two of start, end and duration, with concise ends.
//! * **Repeating intervals** - `Rn/...` and `R/...` as lazy iterators.
//! * **Resolution probing** - the finest unit present in any of the above.
//!
//! ## Usage
//!
//! ```rust
//! use chumsky_iso8601::{parse_date, parse_datetime, parse_duration, parse_interval};
//! use chumsky_iso8601::builder::Endpoint;
//! use time::macros::{date, datetime};
//!
//! assert_eq!(parse_date("1981-W14-7").unwrap(), date!(1981 - 04 - 05));
//!
//! let value = parse_datetime("1981-04-05T23:21:28,5").unwrap();
//! assert_eq!(value.datetime, datetime!(1981-04-05 23:21:28.5));
//!
//! assert_eq!(parse_duration("PT36H").unwrap(), time::Duration::hours(36));
//!
//! let interval = parse_interval("2007-12-14T13:30/15:30").unwrap();
//! assert_eq!(interval.end.date(), date!(2007 - 12 - 14));
//! ```
//!
//! ## Range Limits
//!
//! Every field is checked against a range before anything is built, and each
//! field has its own error variant. The year range and leap second policy
//! are configurable:
//!
//! ```rust
//! use chumsky_iso8601::builder::TimeBuilder;
//! use chumsky_iso8601::limits::RangeLimits;
//! use chumsky_iso8601::{parse_date, parse_date_with, Error};
//!
//! assert!(matches!(parse_date("1981-02-29"), Err(Error::DayOutOfBounds(_))));
//!
//! let builder = TimeBuilder::new().with_limits(RangeLimits::new().years(2000, 2099));
//! assert!(matches!(parse_date_with("1999", &builder), Err(Error::YearOutOfBounds(_))));
//! ```
//!
//! ## Raw Components
//!
//! [`ComponentsBuilder`](builder::ComponentsBuilder) skips validation and
//! returns the scanned strings:
//!
//! ```rust
//! use chumsky_iso8601::builder::ComponentsBuilder;
//! use chumsky_iso8601::parse_time_with;
//!
//! let time = parse_time_with("23:21:28.512400Z", &ComponentsBuilder).unwrap();
//! assert_eq!(time.second.as_deref(), Some("28.512400"));
//! assert_eq!(time.timezone.map(|tz| tz.designator), Some("Z".to_string()));
//! ```
//!
//! ## Logging
//!
//! With the `logging` feature enabled, tokenizers and builders emit `trace`
//! and `debug` records through the [`log`](https://docs.rs/log) facade.

#[macro_use]
mod logging;

pub mod builder;
pub mod clock;
pub mod components;
pub mod date;
pub mod decimal;
pub mod diagnostic;
pub mod duration;
mod error;
pub mod interval;
pub mod limits;
pub mod resolution;
mod scan;
pub mod timezone;

pub use builder::Builder;
pub use clock::{
    get_datetime_resolution, get_time_resolution, parse_datetime, parse_datetime_with, parse_time,
    parse_time_with,
};
pub use date::{get_date_resolution, parse_date, parse_date_with};
pub use duration::{get_duration_resolution, parse_duration, parse_duration_with};
pub use error::Error;
pub use interval::{
    get_interval_resolution, get_repeating_interval_resolution, parse_interval,
    parse_interval_with, parse_repeating_interval, parse_repeating_interval_with, Delimiters,
};
pub use timezone::{parse_timezone, parse_timezone_with};
