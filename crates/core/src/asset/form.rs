//! Class selection and rate autofill semantics for the asset form.

use rust_decimal::Decimal;

use crate::asset::cca::rate_for_class;

/// Form state for creating or editing a fixed asset.
///
/// Selecting a class autofills the rate from the statutory table, but a
/// manual rate override survives re-selecting the same class: autofill
/// fires only on an actual class change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetForm {
    /// Selected CCA class number, if any.
    pub cca_class: Option<String>,
    /// Current rate in percent, autofilled or manually entered.
    pub cca_rate: Option<Decimal>,
}

impl AssetForm {
    /// Handles a class selection.
    ///
    /// Re-selecting the current class is a no-op so a manual rate
    /// override is not clobbered.
    pub fn select_class(&mut self, number: &str) {
        if self.cca_class.as_deref() == Some(number) {
            return;
        }
        self.cca_class = Some(number.to_string());
        if let Some(rate) = rate_for_class(number) {
            self.cca_rate = Some(rate);
        }
    }

    /// Handles a manual rate edit.
    pub fn set_rate(&mut self, rate: Decimal) {
        self.cca_rate = Some(rate);
    }
}
