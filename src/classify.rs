//! Divisibility classification and weekday descriptions

use clap::ValueEnum;
use std::fmt;

/// Where a number falls in the divisible-by-3/5 scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Divisible by both 3 and 5.
    FizzBuzz,
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Divisible by neither.
    Plain(u64),
}

/// Classify a number. Zero is divisible by fifteen, so it classifies as
/// `FizzBuzz`.
pub fn classify(n: u64) -> Classification {
    if n % 15 == 0 {
        Classification::FizzBuzz
    } else if n % 3 == 0 {
        Classification::Fizz
    } else if n % 5 == 0 {
        Classification::Buzz
    } else {
        Classification::Plain(n)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::FizzBuzz => write!(f, "FizzBuzz"),
            Classification::Fizz => write!(f, "Fizz"),
            Classification::Buzz => write!(f, "Buzz"),
            Classification::Plain(n) => write!(f, "{n}"),
        }
    }
}

/// Days of the week, selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// A one-line mood for the day.
    pub fn describe(self) -> &'static str {
        match self {
            Weekday::Monday => "Start of the work week.",
            Weekday::Friday => "Almost weekend!",
            Weekday::Saturday | Weekday::Sunday => "Weekend!",
            _ => "Midweek days.",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}
