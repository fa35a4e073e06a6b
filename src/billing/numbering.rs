use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use super::types::CustomerId;
use crate::error::KontorError;

/// Counter capacity per day; numbers are `days * PER_DAY + n`.
const PER_DAY: u64 = 1000;

/// Day-derived invoice number sequence.
///
/// Numbers take the form `days_since_epoch * 1000 + n` with a per-day
/// counter `n` starting at 1, so they stay numeric, strictly increasing,
/// and sortable by issue day. Capacity is 999 numbers per day; running
/// over is an error rather than a silent bleed into the next day's range.
#[derive(Debug, Clone)]
pub struct DayNumberSequence {
    day: i64,
    next: u64,
}

fn days_since_epoch(date: NaiveDate) -> i64 {
    // NaiveDate::default() is 1970-01-01
    (date - NaiveDate::default()).num_days()
}

impl DayNumberSequence {
    /// Create a sequence positioned at `date` with the day counter at 1.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            day: days_since_epoch(date),
            next: 1,
        }
    }

    /// Create a sequence continuing from a known counter, e.g. restored
    /// from the store.
    pub fn starting_at(date: NaiveDate, next: u64) -> Self {
        Self {
            day: days_since_epoch(date),
            next,
        }
    }

    /// Issue the next number for `date`.
    ///
    /// Moving to a later day resets the counter; asking for a number on an
    /// earlier day than the sequence has already reached is refused.
    pub fn next_number(&mut self, date: NaiveDate) -> Result<u64, KontorError> {
        let day = days_since_epoch(date);
        if day < 0 {
            return Err(KontorError::Numbering(format!(
                "date {date} lies before the epoch"
            )));
        }
        if day < self.day {
            return Err(KontorError::Numbering(format!(
                "date {date} lies before the day the sequence has reached"
            )));
        }
        if day > self.day {
            self.day = day;
            self.next = 1;
        }
        if self.next >= PER_DAY {
            return Err(KontorError::Numbering(format!(
                "no invoice numbers left for {date}"
            )));
        }
        let n = self.next;
        self.next += 1;
        Ok(self.day as u64 * PER_DAY + n)
    }

    /// Preview the number the next call would issue for `date`, without
    /// consuming it. `None` when the call would be refused.
    pub fn peek(&self, date: NaiveDate) -> Option<u64> {
        let day = days_since_epoch(date);
        if day < 0 || day < self.day {
            return None;
        }
        if day > self.day {
            return Some(day as u64 * PER_DAY + 1);
        }
        if self.next >= PER_DAY {
            return None;
        }
        Some(self.day as u64 * PER_DAY + self.next)
    }
}

/// Per-customer number sequences, matching the per-customer uniqueness of
/// invoice numbers.
#[derive(Debug, Default)]
pub struct NumberRegistry {
    sequences: HashMap<CustomerId, DayNumberSequence>,
}

impl NumberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next invoice number for `customer` on `date`.
    pub fn next_for(
        &mut self,
        customer: &CustomerId,
        date: NaiveDate,
    ) -> Result<u64, KontorError> {
        let sequence = self
            .sequences
            .entry(customer.clone())
            .or_insert_with(|| DayNumberSequence::new(date));
        let number = sequence.next_number(date)?;
        debug!(customer = %customer, number, "issued invoice number");
        Ok(number)
    }
}
