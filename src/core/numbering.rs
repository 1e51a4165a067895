use chrono::{Datelike, NaiveDate};

use super::error::InvoiceError;

/// Invoice number sequence, gapless within a month.
///
/// Generates invoice numbers in the format `{prefix}{YYYYMM}-{sequential}`,
/// e.g. "SUGE-202503-0001", "SUGE-202503-0002". The counter restarts at 1
/// in each new month.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    month: u32,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence for the month of `date`, starting at 1.
    pub fn new(prefix: impl Into<String>, date: NaiveDate) -> Self {
        Self::starting_at(prefix, date, 1)
    }

    /// Create a sequence for the month of `date` continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, date: NaiveDate, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            year: date.year(),
            month: date.month(),
            next_number,
            zero_pad: 4,
        }
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    pub fn next_number(&mut self) -> String {
        let number = self.peek();
        self.next_number += 1;
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{:04}{:02}-{:0>width$}",
            self.prefix,
            self.year,
            self.month,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// Current period as `(year, month)`.
    pub fn period(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Move to the month of `date`, resetting the counter to 1.
    /// The new month must be later than the current one.
    pub fn advance_to(&mut self, date: NaiveDate) -> Result<(), InvoiceError> {
        let target = (date.year(), date.month());
        if target <= self.period() {
            return Err(InvoiceError::Numbering(format!(
                "period {:04}-{:02} must be after current period {:04}-{:02}",
                target.0, target.1, self.year, self.month
            )));
        }
        self.year = target.0;
        self.month = target.1;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance if the given date falls in a later month.
    /// Returns true if the period was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        self.advance_to(date).is_ok()
    }
}
