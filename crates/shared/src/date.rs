use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime, macros::format_description};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Sunday to Saturday week containing `date`.
    pub fn week_of(date: Date) -> crate::Result<Self> {
        let days_since_sunday = date.weekday().number_days_from_sunday();
        let start = add_days(date, -i64::from(days_since_sunday))?;

        Ok(Self {
            start,
            end: add_days(start, 6)?,
        })
    }

    pub fn current_week() -> crate::Result<Self> {
        Self::week_of(today())
    }

    /// A range whose start is after its end matches nothing.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> Vec<Date> {
        let mut days = vec![];
        let mut current = Some(self.start);

        while let Some(day) = current {
            if day > self.end {
                break;
            }
            days.push(day);
            current = day.next_day();
        }

        days
    }

    pub fn shift_weeks(&self, weeks: i64) -> crate::Result<Self> {
        let days = weeks.saturating_mul(7);

        Ok(Self {
            start: add_days(self.start, days)?,
            end: add_days(self.end, days)?,
        })
    }
}

/// `date` moved by `days`, failing outside the supported calendar.
pub fn add_days(date: Date, days: i64) -> crate::Result<Date> {
    let moved = days
        .checked_mul(86_400)
        .and_then(|seconds| date.checked_add(Duration::seconds(seconds)));

    match moved {
        Some(date) => Ok(date),
        None => Err(crate::Error::User(format!("date out of range: {date} {days:+} days"))),
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn parse_date(value: &str) -> crate::Result<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        crate::Error::User(format!("invalid date '{value}', expected YYYY-MM-DD"))
    })
}
