//! Cron expression parser and next-occurrence generator.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse six-field cron schedule expressions;
//! - compute series of timestamps according to the schedule.
//!
//! It has a single mandatory external dependency - [chrono](https://crates.io/crates/chrono).
//!
//! _This is not a cron jobs scheduler or runner._ It only computes the occurrence
//! timestamps; firing the jobs a schedule would trigger is up to the caller.
//!
//! ## Cron schedule format
//!
//! A schedule expression has six whitespace-separated fields:
//! seconds, minutes, hours, day of month, month and day of week.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Allowed values  | Allowed special characters |
//! |--------------|-----------------|----------------------------|
//! | Seconds      | 0-59            | * , - /                    |
//! | Minutes      | 0-59            | * , - /                    |
//! | Hours        | 0-23            | * , - /                    |
//! | Day of Month | 1-31            | * , - / ? L W              |
//! | Month        | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | 0-7 or SUN-SAT  | * , - / ? L #              |
//!
//! Both `0` and `7` in the day of week field mean Sunday.
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - inclusive range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`;
//! - `?` - for days of month or week, the same as `*`: the field doesn't restrict anything;
//! - `L` - last day of the month (`L`), n-th-to-last day of the month (`L-n`),
//!   last weekday of the month (`LW`), or last particular day of the week (`5L`, `FRIL`);
//! - `W` - the weekday (not Saturday or Sunday) nearest to the specified day of month,
//!   within the same month, i.e. `22W`; `1W` on a Saturday moves forward to Monday the 3rd;
//! - `#` - n-th particular day of the week in the month, i.e. `fri#1`, `1#4`, up to `#5`.
//!
//! When both day of month and day of week are restricted (neither is `*` nor `?`),
//! a day satisfying **either** field matches; all other fields must match simultaneously.
//!
//! Also, short aliases for well-known schedule expressions are allowed:
//!
//! | Alias                      | Expression  |
//! |----------------------------|-------------|
//! | `@yearly` (or `@annually`) | 0 0 0 1 1 * |
//! | `@monthly`                 | 0 0 0 1 * * |
//! | `@weekly`                  | 0 0 0 * * 0 |
//! | `@daily` (or `@midnight`)  | 0 0 0 * * * |
//! | `@hourly`                  | 0 0 * * * * |
//!
//! ## Time representation
//!
//! All timestamps are [`chrono::NaiveDateTime`] values: plain calendar time with no
//! attached zone. The crate never consults the system clock or a timezone database;
//! the caller picks the zone, converts the reference timestamp into it and interprets
//! the results in it.
//!
//! ## How to use
//!
//! The single entry point of the crate is a [`Schedule`] structure, which has three basic methods:
//! - [new()](Schedule::new): constructor to parse and validate provided schedule;
//! - [upcoming()](Schedule::upcoming): returns time of the next schedule's event,
//!   strictly after the provided timestamp;
//! - [iter()](Schedule::iter): returns an `Iterator` which produces a series of
//!   timestamps according to the schedule.
//!
//! ### Example with `upcoming`
//! ```rust
//! use chrono::Utc;
//! use crontick::{Result, Schedule};
//!
//! fn upcoming() -> Result<()> {
//!     let schedule = Schedule::new("0 0 0 * * *")?;
//!     let now = Utc::now().naive_utc();
//!
//!     // Get the next event's timestamp strictly after now
//!     let next = schedule.upcoming(now)?;
//!     assert!(next > now);
//!
//!     println!("next: {next}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::Utc;
//! use crontick::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::new("0 0 0 * * *")?;
//!     let now = Utc::now().naive_utc();
//!
//!     // Get the next 10 timestamps starting right after now
//!     schedule.iter(now).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and
//!   [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait
//!   implementation for [`Schedule`].

/// Crate specific Error implementation.
pub mod error;
mod field;
/// Cron schedule parser and upcoming event generator.
pub mod schedule;
mod series;
mod utils;

// Re-export of public entities.
pub use error::Error;
pub use field::Field;
pub use schedule::Schedule;

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
