// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

use super::Builder;
use crate::components::{
    DateComponents, DateTimeComponents, DurationComponents, IntervalComponents,
    RepeatingIntervalComponents, TimeComponents, TimezoneComponents,
};
use crate::Error;

/// Returns component tuples exactly as scanned.
///
/// Nothing is range-checked, so `1981-02-30` comes back as written. The
/// interval tokenizers and the `get_*_resolution` functions use this to share
/// the date, time and duration grammars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentsBuilder;

impl Builder for ComponentsBuilder {
    type Date = DateComponents;
    type Time = TimeComponents;
    type DateTime = DateTimeComponents;
    type Timezone = TimezoneComponents;
    type Duration = DurationComponents;
    type Interval = IntervalComponents;
    type RepeatingInterval = RepeatingIntervalComponents;

    fn build_date(&self, date: DateComponents) -> Result<DateComponents, Error> {
        Ok(date)
    }

    fn build_time(&self, time: TimeComponents) -> Result<TimeComponents, Error> {
        Ok(time)
    }

    fn build_datetime(
        &self,
        date: DateComponents,
        time: TimeComponents,
    ) -> Result<DateTimeComponents, Error> {
        Ok(DateTimeComponents { date, time })
    }

    fn build_timezone(&self, timezone: TimezoneComponents) -> Result<TimezoneComponents, Error> {
        Ok(timezone)
    }

    fn build_duration(&self, duration: DurationComponents) -> Result<DurationComponents, Error> {
        Ok(duration)
    }

    fn build_interval(&self, interval: IntervalComponents) -> Result<IntervalComponents, Error> {
        Ok(interval)
    }

    fn build_repeating_interval(
        &self,
        repeating: RepeatingIntervalComponents,
    ) -> Result<RepeatingIntervalComponents, Error> {
        Ok(repeating)
    }
}
