use rust_decimal::Decimal;

use super::error::InvoiceError;
use super::types::*;
use super::validation;

/// Upper bound on line items accepted by [`InvoiceInputBuilder::build`].
pub const MAX_ITEMS: usize = 10_000;

/// Builder for [`InvoiceInput`].
///
/// ```
/// use rechenwerk::core::*;
/// use rust_decimal_macros::dec;
///
/// let input = InvoiceInputBuilder::new("INR", TaxType::Gst, dec!(18))
///     .gst(GstRates::intra_state(dec!(9), dec!(9)))
///     .withholding_tax(dec!(10))
///     .add_item(LineItemBuilder::new("1", "Professional Services", dec!(1), dec!(50000)).build())
///     .build()
///     .unwrap();
///
/// let totals = compute_invoice_totals(&input);
/// assert_eq!(totals.withholding_tax, dec!(5900));
/// assert_eq!(totals.grand_total, dec!(53100));
/// ```
pub struct InvoiceInputBuilder {
    items: Vec<LineItem>,
    currency: String,
    tax_type: TaxType,
    tax_rate: Decimal,
    tax_mode: TaxMode,
    reverse_charge: bool,
    withholding_tax: Option<Decimal>,
    custom_tax_label: Option<String>,
    gst_breakdown: Option<GstRates>,
}

impl InvoiceInputBuilder {
    pub fn new(currency: impl Into<String>, tax_type: TaxType, tax_rate: Decimal) -> Self {
        Self {
            items: Vec::new(),
            currency: currency.into(),
            tax_type,
            tax_rate,
            tax_mode: TaxMode::Exclusive,
            reverse_charge: false,
            withholding_tax: None,
            custom_tax_label: None,
            gst_breakdown: None,
        }
    }

    pub fn tax_mode(mut self, mode: TaxMode) -> Self {
        self.tax_mode = mode;
        self
    }

    /// Shorthand for `tax_mode(TaxMode::Inclusive)`.
    pub fn inclusive(self) -> Self {
        self.tax_mode(TaxMode::Inclusive)
    }

    pub fn reverse_charge(mut self, reverse_charge: bool) -> Self {
        self.reverse_charge = reverse_charge;
        self
    }

    pub fn withholding_tax(mut self, percent: Decimal) -> Self {
        self.withholding_tax = Some(percent);
        self
    }

    pub fn custom_tax_label(mut self, label: impl Into<String>) -> Self {
        self.custom_tax_label = Some(label.into());
        self
    }

    pub fn gst(mut self, rates: GstRates) -> Self {
        self.gst_breakdown = Some(rates);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Build the input and run [`validate_input`](validation::validate_input).
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<InvoiceInput, InvoiceError> {
        // Input limits to prevent abuse
        if self.items.len() > MAX_ITEMS {
            return Err(InvoiceError::Builder(format!(
                "invoice cannot have more than {MAX_ITEMS} line items"
            )));
        }
        if self
            .custom_tax_label
            .as_ref()
            .is_some_and(|label| label.chars().count() > 100)
        {
            return Err(InvoiceError::Builder(
                "custom tax label cannot exceed 100 characters".into(),
            ));
        }

        let input = self.build_unchecked();

        let errors = validation::validate_input(&input);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(InvoiceError::Validation(msg));
        }

        Ok(input)
    }

    /// Build without validation. The calculator accepts any input.
    pub fn build_unchecked(self) -> InvoiceInput {
        InvoiceInput {
            items: self.items,
            currency: self.currency,
            tax_type: self.tax_type,
            tax_rate: self.tax_rate,
            tax_mode: self.tax_mode,
            reverse_charge: self.reverse_charge,
            withholding_tax: self.withholding_tax,
            custom_tax_label: self.custom_tax_label,
            gst_breakdown: self.gst_breakdown,
        }
    }
}

/// Builder for [`LineItem`].
pub struct LineItemBuilder {
    id: String,
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    discount: Option<Decimal>,
    tax_rate: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_price,
            discount: None,
            tax_rate: None,
        }
    }

    /// Discount in percent.
    pub fn discount(mut self, percent: Decimal) -> Self {
        self.discount = Some(percent);
        self
    }

    /// Line-specific tax rate in percent.
    pub fn tax_rate(mut self, percent: Decimal) -> Self {
        self.tax_rate = Some(percent);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            id: self.id,
            description: self.description,
            quantity: self.quantity,
            unit_price: self.unit_price,
            discount: self.discount,
            tax_rate: self.tax_rate,
        }
    }
}
