use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;

/// One billable entry on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Identifier, unique within the invoice.
    pub id: String,
    /// Free-text description shown on the invoice.
    pub description: String,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Price per unit. Net or gross depending on [`TaxMode`].
    pub unit_price: Decimal,
    /// Line discount in percent (0-100). `None` means no discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    /// Line tax rate in percent. Overrides the invoice default when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
}

/// Tax system the invoice is issued under.
///
/// Only affects the label on the tax line, except for [`TaxType::Gst`]
/// which enables the CGST/SGST/IGST component calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxType {
    /// EU-style value-added tax.
    Vat,
    /// Indian goods and services tax.
    Gst,
    /// US sales tax.
    SalesTax,
    /// No tax charged.
    None,
    /// Anything else, usually paired with a custom label.
    Custom,
}

impl TaxType {
    /// Wire name as stored in invoice documents.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vat => "vat",
            Self::Gst => "gst",
            Self::SalesTax => "sales_tax",
            Self::None => "none",
            Self::Custom => "custom",
        }
    }

    /// Parse from the stored wire name.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vat" => Some(Self::Vat),
            "gst" => Some(Self::Gst),
            "sales_tax" => Some(Self::SalesTax),
            "none" => Some(Self::None),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Whether unit prices exclude or already include tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    /// Tax is added on top of the price.
    #[default]
    Exclusive,
    /// Price already contains tax; tax is only disclosed.
    Inclusive,
}

/// India GST component rates in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GstRates {
    /// Central GST.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgst: Option<Decimal>,
    /// State GST.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sgst: Option<Decimal>,
    /// Integrated (inter-state) GST.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub igst: Option<Decimal>,
}

impl GstRates {
    /// Intra-state split: CGST + SGST.
    pub fn intra_state(cgst: Decimal, sgst: Decimal) -> Self {
        Self {
            cgst: Some(cgst),
            sgst: Some(sgst),
            igst: None,
        }
    }

    /// Inter-state: IGST only.
    pub fn inter_state(igst: Decimal) -> Self {
        Self {
            cgst: None,
            sgst: None,
            igst: Some(igst),
        }
    }

    /// True when at least one component rate is positive.
    pub fn has_positive_rate(&self) -> bool {
        [self.cgst, self.sgst, self.igst]
            .into_iter()
            .flatten()
            .any(|rate| rate > Decimal::ZERO)
    }
}

/// Line items plus the invoice-level tax policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    /// Billable lines.
    pub items: Vec<LineItem>,
    /// ISO 4217 currency code (e.g. "EUR").
    pub currency: String,
    /// Tax system.
    pub tax_type: TaxType,
    /// Default tax rate in percent for lines without their own rate.
    pub tax_rate: Decimal,
    /// Exclusive or inclusive pricing.
    #[serde(default)]
    pub tax_mode: TaxMode,
    /// EU B2B reverse charge: the seller charges no tax.
    #[serde(default)]
    pub reverse_charge: bool,
    /// Withholding tax (TDS) in percent, deducted from the grand total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withholding_tax: Option<Decimal>,
    /// Label replacing the default one derived from `tax_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tax_label: Option<String>,
    /// GST component rates. Only used when `tax_type` is [`TaxType::Gst`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_breakdown: Option<GstRates>,
}

/// Calculated invoice totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    /// Sum of `quantity * unit_price` over all lines.
    pub subtotal: Decimal,
    /// Sum of line discounts.
    pub total_discount: Decimal,
    /// `subtotal - total_discount`.
    pub taxable_amount: Decimal,
    /// Aggregate tax. Zero under reverse charge.
    pub total_tax: Decimal,
    /// Amount withheld at source. Zero when no withholding applies.
    pub withholding_tax: Decimal,
    /// Amount payable after tax and withholding.
    pub grand_total: Decimal,
    /// `grand_total` spelled out in English.
    pub total_in_words: String,
    /// Per-line detail.
    pub line_items: Vec<LineBreakdown>,
    /// Tax lines for display. Empty under reverse charge or without tax.
    pub tax_breakdown: Vec<TaxLine>,
    /// GST components, when the GST split applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_breakdown: Option<GstBreakdown>,
}

/// Calculated values for a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    /// Id of the input line.
    pub id: String,
    /// Description of the input line.
    pub description: String,
    /// Quantity as given on the input line.
    pub quantity: Decimal,
    /// Unit price as given on the input line.
    pub unit_price: Decimal,
    /// `quantity * unit_price`.
    pub line_total: Decimal,
    /// Discount amount (not percent).
    pub discount: Decimal,
    /// `line_total - discount`.
    pub discounted_amount: Decimal,
    /// Effective rate after applying the invoice default.
    pub tax_rate: Decimal,
    /// Tax on this line, added (exclusive) or extracted (inclusive).
    pub tax_amount: Decimal,
    /// Line amount payable.
    pub line_grand_total: Decimal,
}

/// A labelled tax line, e.g. "VAT 21%".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Custom label, or the default label for the tax type.
    pub label: String,
    /// Invoice default rate in percent.
    pub rate: Decimal,
    /// Aggregate tax after the GST override.
    pub amount: Decimal,
}

/// Calculated GST components.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// Central GST, when a positive rate was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgst: Option<GstComponent>,
    /// State GST, when a positive rate was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sgst: Option<GstComponent>,
    /// Integrated GST, when a positive rate was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub igst: Option<GstComponent>,
}

impl GstBreakdown {
    /// Sum of all component amounts, saturating at the `Decimal` bounds.
    pub fn total(&self) -> Decimal {
        amount::sum(
            [&self.cgst, &self.sgst, &self.igst]
                .into_iter()
                .flatten()
                .map(|c| c.amount),
        )
    }
}

/// One GST component with its rate and amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstComponent {
    /// Component rate in percent.
    pub rate: Decimal,
    /// `taxable_amount * rate / 100`.
    pub amount: Decimal,
}

/// Totals as persisted alongside an invoice document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTotals {
    pub subtotal: Decimal,
    pub total_discount: Decimal,
    pub total_tax: Decimal,
    pub total_amount: Decimal,
}

impl From<&TaxBreakdown> for StoredTotals {
    fn from(breakdown: &TaxBreakdown) -> Self {
        Self {
            subtotal: breakdown.subtotal,
            total_discount: breakdown.total_discount,
            total_tax: breakdown.total_tax,
            total_amount: breakdown.grand_total,
        }
    }
}
