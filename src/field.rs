use crate::{series::SteppedRange, utils, Error, Result};
use std::fmt::Display;

/// One of the six cron positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Seconds, `0-59`.
    Second,
    /// Minutes, `0-59`.
    Minute,
    /// Hours, `0-23`.
    Hour,
    /// Day of month, `1-31`.
    DayOfMonth,
    /// Month, `1-12` or `JAN-DEC`.
    Month,
    /// Day of week, `0-7` or `SUN-SAT`, with `0` and `7` both meaning Sunday.
    DayOfWeek,
}

impl Field {
    const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    pub(crate) fn min_max(&self) -> (u8, u8) {
        match self {
            Self::Second | Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 7),
        }
    }

    /// Parses a single numeric or mnemonic value of this field.
    pub(crate) fn parse_value(&self, input: &str) -> Result<u8> {
        let (min, max) = self.min_max();
        let value = match self {
            Self::Month => utils::parse_digital_value(input, min, max)
                .or_else(|| utils::parse_string_value(input, &Self::MONTHS).map(|v| v + 1)),
            Self::DayOfWeek => utils::parse_digital_value(input, min, max)
                .or_else(|| utils::parse_string_value(input, &Self::DAYS_OF_WEEK)),
            _ => utils::parse_digital_value(input, min, max),
        };

        value.ok_or_else(|| Error::token(*self, input))
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Second => "seconds",
            Self::Minute => "minutes",
            Self::Hour => "hours",
            Self::DayOfMonth => "day-of-month",
            Self::Month => "month",
            Self::DayOfWeek => "day-of-week",
        };
        write!(f, "{name}")
    }
}

/// One parsed field of a schedule: the position plus its expression tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct FieldSpec {
    field: Field,
    expr: FieldExpr,
}

impl FieldSpec {
    pub(crate) fn parse(field: Field, input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::token(field, input));
        }

        let mut items = input
            .split(',')
            .map(|value| Self::parse_item(field, value))
            .collect::<Result<Vec<_>>>()?;

        if items.len() > 1 && (items.contains(&FieldExpr::All) || items.contains(&FieldExpr::Any)) {
            return Err(Error::token(field, input));
        }

        let expr = if items.len() > 1 {
            FieldExpr::List(items)
        } else {
            items.remove(0)
        };

        Ok(Self { field, expr })
    }

    fn parse_item(field: Field, value: &str) -> Result<FieldExpr> {
        let (min, _) = field.min_max();

        if value == "*" {
            Ok(FieldExpr::All)
        } else if value == "?" && matches!(field, Field::DayOfMonth | Field::DayOfWeek) {
            Ok(FieldExpr::Any)
        } else if field == Field::DayOfMonth && value == "L" {
            Ok(FieldExpr::LastDom)
        } else if field == Field::DayOfMonth && value == "LW" {
            Ok(FieldExpr::LastWeekdayDom)
        } else if field == Field::DayOfMonth && value.starts_with("L-") {
            match utils::parse_digital_value(&value[2..], 1, 30) {
                Some(offset) => Ok(FieldExpr::LastDomOffset(offset)),
                None => Err(Error::token(field, value)),
            }
        } else if field == Field::DayOfMonth && value.ends_with('W') {
            match utils::parse_digital_value(value.trim_end_matches('W'), 1, 31) {
                Some(day) => Ok(FieldExpr::NearestWeekday(day)),
                None => Err(Error::token(field, value)),
            }
        } else if field == Field::DayOfWeek && value.len() > 1 && value.ends_with('L') {
            let dow = field.parse_value(value.trim_end_matches('L'))?;
            Ok(FieldExpr::LastDow(dow % 7))
        } else if field == Field::DayOfWeek && value.contains('#') {
            let (dow, nth) = value.split_once('#').unwrap_or((value, ""));
            let dow = field.parse_value(dow)?;
            match utils::parse_digital_value(nth, 1, 5) {
                Some(nth) => Ok(FieldExpr::NthDow(dow % 7, nth)),
                None => Err(Error::token(field, value)),
            }
        } else if let Some((base, step)) = value.split_once('/') {
            let step = match step.parse::<u8>() {
                Ok(step) if step >= 1 => step,
                _ => return Err(Error::token(field, value)),
            };

            if base == "*" {
                Ok(FieldExpr::RepeatingValue(min, step))
            } else if let Some((start, end)) = base.split_once('-') {
                let start = field.parse_value(start)?;
                let end = field.parse_value(end)?;
                if start > end {
                    return Err(Error::token(field, value));
                }
                Ok(FieldExpr::RepeatingRange(start, end, step))
            } else {
                Ok(FieldExpr::RepeatingValue(field.parse_value(base)?, step))
            }
        } else if let Some((start, end)) = value.split_once('-') {
            let start = field.parse_value(start)?;
            let end = field.parse_value(end)?;
            if start > end {
                return Err(Error::token(field, value));
            }
            Ok(FieldExpr::Range(start, end))
        } else {
            Ok(FieldExpr::Particular(field.parse_value(value)?))
        }
    }

    /// `*` or `?` — the field doesn't constrain anything.
    pub(crate) fn is_unrestricted(&self) -> bool {
        matches!(self.expr, FieldExpr::All | FieldExpr::Any)
    }

    /// True if the field's value set contains `value`. Scalar fields only.
    pub(crate) fn contains(&self, value: u8) -> bool {
        Self::expr_contains(&self.expr, self.field, value)
    }

    fn expr_contains(expr: &FieldExpr, field: Field, value: u8) -> bool {
        match expr {
            FieldExpr::List(items) => items.iter().any(|item| Self::expr_contains(item, field, value)),
            _ => Self::stepped(expr, field)
                .map(|series| series.into_iter().any(|v| v == value))
                .unwrap_or(false),
        }
    }

    /// Smallest field value `>= from`, if any. Scalar fields only.
    pub(crate) fn first_from(&self, from: u8) -> Option<u8> {
        Self::expr_first_from(&self.expr, self.field, from)
    }

    fn expr_first_from(expr: &FieldExpr, field: Field, from: u8) -> Option<u8> {
        match expr {
            FieldExpr::List(items) => items
                .iter()
                .filter_map(|item| Self::expr_first_from(item, field, from))
                .min(),
            _ => Self::stepped(expr, field).and_then(|series| series.first_from(from)),
        }
    }

    /// True if the concrete date satisfies this day-of-month or day-of-week field.
    pub(crate) fn matches_date(&self, year: i32, month: u8, day: u8) -> bool {
        Self::expr_matches_date(&self.expr, self.field, year, month, day)
    }

    fn expr_matches_date(expr: &FieldExpr, field: Field, year: i32, month: u8, day: u8) -> bool {
        match expr {
            FieldExpr::List(items) => items
                .iter()
                .any(|item| Self::expr_matches_date(item, field, year, month, day)),
            FieldExpr::LastDom => day == utils::days_in_month(year, month),
            FieldExpr::LastDomOffset(offset) => {
                utils::days_in_month(year, month).checked_sub(*offset) == Some(day)
            }
            FieldExpr::LastWeekdayDom => day == utils::last_weekday(year, month),
            FieldExpr::NearestWeekday(dom) => {
                *dom <= utils::days_in_month(year, month) && day == utils::nearest_weekday(year, month, *dom)
            }
            FieldExpr::LastDow(dow) => day == utils::last_dow(year, month, *dow),
            FieldExpr::NthDow(dow, nth) => utils::nth_dow(year, month, *dow, *nth) == Some(day),
            _ => match field {
                Field::DayOfMonth => Self::expr_contains(expr, field, day),
                // 7 in a plain pattern is an alias for Sunday, folded here
                Field::DayOfWeek => {
                    let weekday = utils::day_of_week(year, month, day);
                    Self::stepped(expr, field)
                        .map(|series| series.into_iter().any(|v| v % 7 == weekday))
                        .unwrap_or(false)
                }
                _ => false,
            },
        }
    }

    /// Plain patterns as a stepped sequence; day rules have none.
    fn stepped(expr: &FieldExpr, field: Field) -> Option<SteppedRange> {
        let (min, max) = field.min_max();
        match expr {
            FieldExpr::All | FieldExpr::Any => Some(SteppedRange::new(min, max, 1)),
            FieldExpr::Particular(value) => Some(SteppedRange::new(*value, *value, 1)),
            FieldExpr::Range(start, end) => Some(SteppedRange::new(*start, *end, 1)),
            FieldExpr::RepeatingValue(start, step) => Some(SteppedRange::new(*start, max, *step)),
            FieldExpr::RepeatingRange(start, end, step) => Some(SteppedRange::new(*start, *end, *step)),
            _ => None,
        }
    }
}

impl Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldExpr {
    All,
    Any,
    Particular(u8),
    List(Vec<FieldExpr>),
    // start-finish
    Range(u8, u8),
    // start/step
    RepeatingValue(u8, u8),
    // start-finish/step
    RepeatingRange(u8, u8, u8),
    // last day of the month
    LastDom,
    // n-th-to-last day of the month
    LastDomOffset(u8),
    // last weekday of the month
    LastWeekdayDom,
    // weekday nearest to the day of month
    NearestWeekday(u8),
    // last occurrence of the weekday in the month
    LastDow(u8),
    // n-th occurrence of the weekday in the month
    NthDow(u8, u8),
}

impl Display for FieldExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldExpr::All => write!(f, "*"),
            FieldExpr::Any => write!(f, "?"),
            FieldExpr::Particular(value) => write!(f, "{value}"),
            FieldExpr::Range(start, end) => write!(f, "{start}-{end}"),
            FieldExpr::RepeatingValue(start, step) => write!(f, "{start}/{step}"),
            FieldExpr::RepeatingRange(start, end, step) => write!(f, "{start}-{end}/{step}"),
            FieldExpr::LastDom => write!(f, "L"),
            FieldExpr::LastDomOffset(offset) => write!(f, "L-{offset}"),
            FieldExpr::LastWeekdayDom => write!(f, "LW"),
            FieldExpr::NearestWeekday(dom) => write!(f, "{dom}W"),
            FieldExpr::LastDow(dow) => write!(f, "{dow}L"),
            FieldExpr::NthDow(dow, nth) => write!(f, "{dow}#{nth}"),
            FieldExpr::List(items) => {
                let values = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{values}")
            }
        }
    }
}
