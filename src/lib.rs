//! # rechenwerk
//!
//! Invoice tax and totals calculation for freelancers: VAT, GST (with
//! CGST/SGST/IGST split), US sales tax, and custom taxes, in exclusive or
//! inclusive pricing, with line discounts, reverse charge, and withholding
//! tax (TDS).
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Intermediate values are kept at full precision; rounding only happens
//! when an amount is presented ([`core::format_currency`],
//! [`core::number_to_words`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use rechenwerk::core::*;
//! use rust_decimal_macros::dec;
//!
//! let input = InvoiceInputBuilder::new("INR", TaxType::Gst, dec!(18))
//!     .gst(GstRates::intra_state(dec!(9), dec!(9)))
//!     .add_item(LineItemBuilder::new("1", "E-commerce Platform", dec!(1), dec!(100000)).build())
//!     .add_item(LineItemBuilder::new("2", "Payment Gateway", dec!(1), dec!(25000)).build())
//!     .build()
//!     .unwrap();
//!
//! let totals = compute_invoice_totals(&input);
//! assert_eq!(totals.total_tax, dec!(22500));
//! assert_eq!(totals.grand_total, dec!(147500));
//! assert_eq!(format_currency(totals.grand_total, "INR"), "₹147,500.00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Calculator, validation, formatting, numbering, invoice statistics |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
