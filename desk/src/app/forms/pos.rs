//! Point-of-sale inputs: the code lookup field and the manual item draft.

use shared::dto::PaymentMethod;

use crate::domain::cart::ManualItem;
use crate::domain::numeric::NumericField;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualItemForm {
    pub name: String,
    pub unit: String,
    pub quantity: NumericField,
    pub unit_price: NumericField,
}

impl ManualItemForm {
    pub fn to_item(&self) -> ManualItem {
        ManualItem {
            name: self.name.clone(),
            unit: self.unit.clone(),
            quantity: (!self.quantity.is_blank()).then(|| self.quantity.value()),
            unit_price: (!self.unit_price.is_blank()).then(|| self.unit_price.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    /// Product search over the loaded catalog
    pub search: String,
    /// QR or bar code typed by hand
    pub code: String,
    pub payment_method: PaymentMethod,
    pub manual: ManualItemForm,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            search: String::new(),
            code: String::new(),
            payment_method: PaymentMethod::Money,
            manual: ManualItemForm::default(),
        }
    }
}
