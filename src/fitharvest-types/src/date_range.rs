use chrono::{Local, NaiveDate, TimeDelta};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar days from `start` up to, but not including, `end`.
///
/// The number of days is the whole-day difference between the two dates, so
/// a range whose start and end fall on the same day is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range ending today when `end` is absent.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self::between(start, end.unwrap_or_else(today))
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        usize::try_from((self.end - self.start).num_days()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Days {
        Days {
            start: self.start,
            offset: 0,
            len: self.len(),
        }
    }

    pub fn date_strings(&self) -> impl Iterator<Item = String> + use<> {
        self.iter().map(|date| date.format(DATE_FORMAT).to_string())
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Clone, Debug)]
pub struct Days {
    start: NaiveDate,
    offset: usize,
    len: usize,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.len {
            return None;
        }
        // offset from start, never accumulated
        let date = self.start + TimeDelta::days(self.offset as i64);
        self.offset += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
