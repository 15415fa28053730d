//! Published dates from book sources are free-form: a full date, a year and month or only a
//! year. [`PublishedDate`] keeps the parsed date together with how much of it is known, filling
//! the unknown parts with `1`.

use std::fmt;

use chrono::NaiveDate;

/// How much of a published date is actually known.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Precision {
    /// Nothing could be parsed.
    Unknown,
    /// Only the year is known, month and day are set to `1`.
    Year,
    /// Year and month are known, the day is set to `1`.
    Month,
    /// The full date is known.
    Day,
}

impl Precision {
    /// The code stored by the catalog form for this precision.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A parsed published date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublishedDate {
    date: Option<NaiveDate>,
    precision: Precision,
}

impl PublishedDate {
    const UNKNOWN: Self = Self {
        date: None,
        precision: Precision::Unknown,
    };

    /// Parses `YYYY-MM-DD`, `YYYY-MM` or `YYYY`, in that order.
    ///
    /// The year takes exactly four digits, month and day one or two. Anything else, including
    /// dates that do not exist such as `2025-13-01`, is [`Precision::Unknown`] without a date.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let parts: Vec<&str> = s.split('-').collect();
        let precision = match parts.as_slice() {
            [_] => Precision::Year,
            [_, _] => Precision::Month,
            [_, _, _] => Precision::Day,
            _ => return Self::UNKNOWN,
        };

        let well_formed = parts.iter().enumerate().all(|(i, part)| {
            let digits = part.bytes().all(|b| b.is_ascii_digit());
            let width = if i == 0 { 4..=4 } else { 1..=2 };
            digits && width.contains(&part.len())
        });
        if !well_formed {
            return Self::UNKNOWN;
        }

        let text = match precision {
            Precision::Year => format!("{s}-01-01"),
            Precision::Month => format!("{s}-01"),
            Precision::Day | Precision::Unknown => s.to_owned(),
        };

        NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map(|date| Self {
                date: Some(date),
                precision,
            })
            .unwrap_or(Self::UNKNOWN)
    }

    /// The date with unknown parts set to `1`.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// How much of [`PublishedDate::date`] is known.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }
}
