//! Invoice lifecycle status and revenue statistics over stored invoices.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;
use super::error::InvoiceError;

/// Category recorded on earnings created by [`StoredInvoice::mark_paid`].
pub const INVOICE_PAYMENT_CATEGORY: &str = "Invoice Payment";

/// Payment method recorded when none is given.
pub const DEFAULT_PAYMENT_METHOD: &str = "Bank Transfer";

/// Lifecycle status of a stored invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Only drafts may be deleted; anything issued stays on record.
    pub fn is_deletable(self) -> bool {
        self == Self::Draft
    }

    /// Issued but not yet paid.
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Sent | Self::Overdue)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The parts of a persisted invoice document that statistics and status
/// changes need. Other document fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredInvoice {
    pub invoice_number: String,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub currency: String,
    /// Grand total as stored with the document.
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
}

/// Income recorded when an invoice is paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earning {
    pub invoice_number: String,
    pub amount: Decimal,
    pub currency: String,
    pub category: String,
    pub payment_method: String,
    pub notes: String,
    pub received_on: NaiveDate,
}

impl StoredInvoice {
    /// Check that the invoice may be deleted.
    pub fn ensure_deletable(&self) -> Result<(), InvoiceError> {
        if self.status.is_deletable() {
            Ok(())
        } else {
            Err(InvoiceError::Status(format!(
                "can only delete draft invoices, {} is {}",
                self.invoice_number, self.status
            )))
        }
    }

    /// Mark the invoice paid and return the earning to record for it.
    ///
    /// The earning carries the stored `total_amount` in the invoice
    /// currency. Payment method and notes fall back to
    /// [`DEFAULT_PAYMENT_METHOD`] and "Payment for {invoice number}".
    /// Paying an invoice twice, or paying a cancelled one, is an error and
    /// leaves the invoice unchanged.
    pub fn mark_paid(
        &mut self,
        paid_on: NaiveDate,
        payment_method: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Earning, InvoiceError> {
        if matches!(self.status, InvoiceStatus::Paid | InvoiceStatus::Cancelled) {
            return Err(InvoiceError::Status(format!(
                "invoice {} is already {}",
                self.invoice_number, self.status
            )));
        }

        self.status = InvoiceStatus::Paid;
        self.paid_on = Some(paid_on);
        tracing::debug!(invoice = %self.invoice_number, amount = %self.total_amount, "invoice paid");

        Ok(Earning {
            invoice_number: self.invoice_number.clone(),
            amount: self.total_amount,
            currency: self.currency.clone(),
            category: INVOICE_PAYMENT_CATEGORY.into(),
            payment_method: payment_method
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_PAYMENT_METHOD)
                .into(),
            notes: notes
                .filter(|n| !n.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Payment for {}", self.invoice_number)),
            received_on: paid_on,
        })
    }
}

/// Counts and revenue over a set of invoices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStats {
    pub total: usize,
    pub draft: usize,
    pub sent: usize,
    pub paid: usize,
    pub overdue: usize,
    /// Sum of `total_amount` over paid invoices.
    pub total_revenue: Decimal,
    /// Sum of `total_amount` over sent and overdue invoices.
    pub pending_revenue: Decimal,
}

/// Summarize invoices by status.
///
/// Cancelled invoices count towards `total` only. Amounts are summed as
/// stored, without currency conversion, and saturate at the `Decimal`
/// bounds.
pub fn invoice_stats(invoices: &[StoredInvoice]) -> InvoiceStats {
    let mut stats = InvoiceStats {
        total: invoices.len(),
        ..InvoiceStats::default()
    };

    for invoice in invoices {
        match invoice.status {
            InvoiceStatus::Draft => stats.draft += 1,
            InvoiceStatus::Sent => stats.sent += 1,
            InvoiceStatus::Paid => stats.paid += 1,
            InvoiceStatus::Overdue => stats.overdue += 1,
            InvoiceStatus::Cancelled => {}
        }

        if invoice.status == InvoiceStatus::Paid {
            stats.total_revenue = amount::add(stats.total_revenue, invoice.total_amount);
        } else if invoice.status.is_outstanding() {
            stats.pending_revenue = amount::add(stats.pending_revenue, invoice.total_amount);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn invoice(number: &str, status: InvoiceStatus, total: Decimal) -> StoredInvoice {
        StoredInvoice {
            invoice_number: number.into(),
            status,
            currency: "EUR".into(),
            total_amount: total,
            paid_on: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_slice() {
        assert_eq!(invoice_stats(&[]), InvoiceStats::default());
    }

    #[test]
    fn mixed_statuses() {
        let invoices = [
            invoice("SUGE-202401-0001", InvoiceStatus::Draft, dec!(100)),
            invoice("SUGE-202401-0002", InvoiceStatus::Sent, dec!(250.50)),
            invoice("SUGE-202401-0003", InvoiceStatus::Paid, dec!(1000)),
            invoice("SUGE-202401-0004", InvoiceStatus::Paid, dec!(499.99)),
            invoice("SUGE-202402-0001", InvoiceStatus::Overdue, dec!(750)),
            invoice("SUGE-202402-0002", InvoiceStatus::Cancelled, dec!(300)),
        ];

        let stats = invoice_stats(&invoices);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.draft, 1);
        assert_eq!(stats.sent, 1);
        assert_eq!(stats.paid, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.total_revenue, dec!(1499.99));
        assert_eq!(stats.pending_revenue, dec!(1000.50));
    }

    #[test]
    fn revenue_saturates() {
        let invoices = [
            invoice("A", InvoiceStatus::Paid, Decimal::MAX),
            invoice("B", InvoiceStatus::Paid, Decimal::MAX),
        ];
        assert_eq!(invoice_stats(&invoices).total_revenue, Decimal::MAX);
    }

    #[test]
    fn status_wire_names() {
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(serde_json::from_str::<InvoiceStatus>(&json).unwrap(), status);
        }
        assert!(serde_json::from_str::<InvoiceStatus>("\"Paid\"").is_err());
    }

    #[test]
    fn deserializes_stored_document() {
        let json = r#"{
            "invoiceNumber": "SUGE-202401-0042",
            "status": "overdue",
            "currency": "INR",
            "totalAmount": 147500,
            "clientId": "abc",
            "issueDate": "2024-01-15"
        }"#;
        let invoice: StoredInvoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Overdue);
        assert_eq!(invoice.total_amount, dec!(147500));
        assert_eq!(invoice.paid_on, None);
    }

    #[test]
    fn only_drafts_are_deletable() {
        assert!(InvoiceStatus::Draft.is_deletable());
        for status in [
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ] {
            assert!(!status.is_deletable());
            let err = invoice("X-1", status, dec!(1)).ensure_deletable().unwrap_err();
            assert!(err.to_string().contains("can only delete draft invoices"));
        }
        assert!(invoice("X-1", InvoiceStatus::Draft, dec!(1)).ensure_deletable().is_ok());
    }

    #[test]
    fn mark_paid_records_total_as_earning() {
        let mut inv = invoice("SUGE-202401-0007", InvoiceStatus::Overdue, dec!(53100));
        inv.currency = "INR".into();

        let earning = inv.mark_paid(date(2024, 2, 3), None, None).unwrap();
        assert_eq!(inv.status, InvoiceStatus::Paid);
        assert_eq!(inv.paid_on, Some(date(2024, 2, 3)));
        assert_eq!(earning.amount, dec!(53100));
        assert_eq!(earning.currency, "INR");
        assert_eq!(earning.category, "Invoice Payment");
        assert_eq!(earning.payment_method, "Bank Transfer");
        assert_eq!(earning.notes, "Payment for SUGE-202401-0007");
        assert_eq!(earning.received_on, date(2024, 2, 3));

        let stats = invoice_stats(std::slice::from_ref(&inv));
        assert_eq!(stats.total_revenue, dec!(53100));
        assert_eq!(stats.pending_revenue, Decimal::ZERO);
    }

    #[test]
    fn mark_paid_keeps_given_method_and_notes() {
        let mut inv = invoice("SUGE-202401-0008", InvoiceStatus::Sent, dec!(10));
        let earning = inv
            .mark_paid(date(2024, 1, 31), Some("UPI"), Some("Paid early"))
            .unwrap();
        assert_eq!(earning.payment_method, "UPI");
        assert_eq!(earning.notes, "Paid early");
    }

    #[test]
    fn cannot_pay_twice_or_pay_cancelled() {
        for status in [InvoiceStatus::Paid, InvoiceStatus::Cancelled] {
            let mut inv = invoice("SUGE-202401-0009", status, dec!(10));
            let before = inv.clone();
            let err = inv.mark_paid(date(2024, 1, 31), None, None).unwrap_err();
            assert!(matches!(err, InvoiceError::Status(_)));
            assert_eq!(inv, before);
        }
    }
}
