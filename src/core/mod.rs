//! Invoice types, totals calculation, and presentation helpers.
//!
//! The calculator is a pure function from [`InvoiceInput`] to
//! [`TaxBreakdown`]; validation and numbering are separate steps around it.

mod amount;
mod builder;
mod calculator;
mod currencies;
mod error;
mod numbering;
mod stats;
mod types;
mod validation;
mod words;

pub use builder::*;
pub use calculator::*;
pub use currencies::{format_currency, is_known_currency_code, minor_digits};
pub use error::*;
pub use numbering::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
pub use words::number_to_words;
