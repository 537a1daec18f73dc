use crate::{
    field::{Field, FieldSpec},
    Error, Result,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use std::{fmt::Display, str::FromStr};

/// Forward search bound, in years from the reference timestamp.
const SEARCH_HORIZON_YEARS: i32 = 5;

/// Represents a parsed cron schedule with its methods.
///
/// For cron schedule clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    second: FieldSpec,
    minute: FieldSpec,
    hour: FieldSpec,
    dom: FieldSpec,
    month: FieldSpec,
    dow: FieldSpec,
}

impl Schedule {
    /// Parses and validates provided `expression` and constructs [`Schedule`] instance.
    ///
    /// The expression is either six whitespace-separated fields or one of the
    /// `@yearly`/`@annually`, `@monthly`, `@weekly`, `@daily`/`@midnight`, `@hourly` macros.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`Error`] in a case provided expression is unparsable or has format errors.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        let mut fields: Vec<&str> = expression.split_whitespace().collect();

        if fields.len() == 1 {
            fields = match fields[0] {
                "@yearly" | "@annually" => vec!["0", "0", "0", "1", "1", "*"],
                "@monthly" => vec!["0", "0", "0", "1", "*", "*"],
                "@weekly" => vec!["0", "0", "0", "*", "*", "0"],
                "@daily" | "@midnight" => vec!["0", "0", "0", "*", "*", "*"],
                "@hourly" => vec!["0", "0", "*", "*", "*", "*"],
                _ => return Err(Error::MalformedExpression(expression)),
            };
        } else if fields.len() != 6 {
            return Err(Error::MalformedExpression(expression));
        }

        Ok(Self {
            second: FieldSpec::parse(Field::Second, fields[0])?,
            minute: FieldSpec::parse(Field::Minute, fields[1])?,
            hour: FieldSpec::parse(Field::Hour, fields[2])?,
            dom: FieldSpec::parse(Field::DayOfMonth, fields[3])?,
            month: FieldSpec::parse(Field::Month, fields[4])?,
            dow: FieldSpec::parse(Field::DayOfWeek, fields[5])?,
        })
    }

    /// Returns the time of the next event, strictly after the provided `after` value.
    ///
    /// Sub-second components of `after` are zeroed before the search, so the result is
    /// always at least one whole second past the reference.
    ///
    /// The timestamp is zone-free: the caller decides which timezone `after` is
    /// expressed in, and the result is in the same one.
    ///
    /// Returns [`Error::UnsatisfiableSchedule`] if no event exists within the search
    /// horizon, e.g. for a schedule restricted to day 31 of February.
    pub fn upcoming(&self, after: NaiveDateTime) -> Result<NaiveDateTime> {
        let start = after.with_nanosecond(0).unwrap();
        let mut current = start
            .checked_add_signed(TimeDelta::seconds(1))
            .ok_or_else(|| self.unsatisfiable())?;
        let horizon = start.year() + SEARCH_HORIZON_YEARS;

        while current.year() <= horizon {
            let month = current.month() as u8;
            if !self.month.contains(month) {
                let next = match self.month.first_from(month) {
                    Some(next) => month_start(current.year(), next),
                    None => month_start(current.year() + 1, 1),
                };
                current = next.ok_or_else(|| self.unsatisfiable())?;
                continue;
            }

            if !self.day_matches(current.year(), month, current.day() as u8) {
                current = next_day(current).ok_or_else(|| self.unsatisfiable())?;
                continue;
            }

            let date = current.date();
            let hour = current.hour() as u8;
            if !self.hour.contains(hour) {
                let next = match self.hour.first_from(hour) {
                    Some(next) => Some(at(date, next, 0, 0)),
                    None => next_day(current),
                };
                current = next.ok_or_else(|| self.unsatisfiable())?;
                continue;
            }

            let minute = current.minute() as u8;
            if !self.minute.contains(minute) {
                let next = match self.minute.first_from(minute) {
                    Some(next) => Some(at(date, hour, next, 0)),
                    None => at(date, hour, 0, 0).checked_add_signed(TimeDelta::hours(1)),
                };
                current = next.ok_or_else(|| self.unsatisfiable())?;
                continue;
            }

            let second = current.second() as u8;
            if !self.second.contains(second) {
                let next = match self.second.first_from(second) {
                    Some(next) => Some(at(date, hour, minute, next)),
                    None => at(date, hour, minute, 0).checked_add_signed(TimeDelta::minutes(1)),
                };
                current = next.ok_or_else(|| self.unsatisfiable())?;
                continue;
            }

            return Ok(current);
        }

        Err(self.unsatisfiable())
    }

    /// Day-of-month and day-of-week combine with OR when both are restricted,
    /// otherwise whichever one is restricted decides.
    fn day_matches(&self, year: i32, month: u8, day: u8) -> bool {
        match (self.dom.is_unrestricted(), self.dow.is_unrestricted()) {
            (true, true) => true,
            (false, true) => self.dom.matches_date(year, month, day),
            (true, false) => self.dow.matches_date(year, month, day),
            (false, false) => {
                self.dom.matches_date(year, month, day) || self.dow.matches_date(year, month, day)
            }
        }
    }

    fn unsatisfiable(&self) -> Error {
        Error::UnsatisfiableSchedule(self.to_string())
    }

    /// Returns iterator of events strictly after `after`.
    ///
    /// The iterator ends when the search horizon is exhausted.
    #[inline]
    pub fn iter(&self, after: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        ScheduleIterator {
            next: self.upcoming(after).ok(),
            schedule: self.clone(),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of events strictly after `after`.
    #[inline]
    pub fn into_iter(self, after: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        let next = self.upcoming(after).ok();
        ScheduleIterator { schedule: self, next }
    }
}

/// Start of the first day of the month, or `None` outside of the supported calendar.
#[inline]
fn month_start(year: i32, month: u8) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, u32::from(month), 1).map(|date| date.and_time(NaiveTime::MIN))
}

/// Midnight of the following day.
#[inline]
fn next_day(current: NaiveDateTime) -> Option<NaiveDateTime> {
    current.date().succ_opt().map(|date| date.and_time(NaiveTime::MIN))
}

/// Timestamp of the given date at the given time components;
/// field values are range-checked at parse time.
#[inline]
fn at(date: NaiveDate, hour: u8, minute: u8, second: u8) -> NaiveDateTime {
    date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
        .unwrap()
}

/// Contains iterator state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct ScheduleIterator {
    schedule: Schedule,
    next: Option<NaiveDateTime>,
}

impl Iterator for ScheduleIterator {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.upcoming(current).ok();
        Some(current)
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = Error;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.second, self.minute, self.hour, self.dom, self.month, self.dow
        )
    }
}
