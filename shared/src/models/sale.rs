//! Sale Models
//!
//! Read models for sales history plus the submission payload the
//! checkout flow sends to `POST /sales`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recorded sale (backend-owned read model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub receipt_number: String,
    pub total_amount: Decimal,
    pub payment_method: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    /// User id of the operator who recorded the sale
    pub created_by: Option<i64>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

/// One line of a recorded sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: Option<i64>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// One line of a sale submission
///
/// `unit_price` is the snapshot taken when the product was added to the
/// cart, never re-fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItemInput {
    pub product_id: i64,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Payload for `POST /sales`
///
/// `receipt_number` is a client-generated time-based token used only to
/// label the record; the backend is the authority on final receipt
/// identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleSubmission {
    pub receipt_number: String,
    pub total_amount: Decimal,
    pub payment_method: String,
    pub items: Vec<SaleItemInput>,
}
