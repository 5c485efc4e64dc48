//! Checkout cart
//!
//! In-memory line items for one checkout session. The cart is an owned
//! value object with no I/O so it can be unit-tested without a transport
//! or rendering environment. It is created empty, mutated by add /
//! set-quantity operations and cleared wholesale after a successful
//! submission; it is never persisted.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Product, SaleItemInput, SaleSubmission};
use crate::money;
use crate::util;

/// Checkout attempted with no line items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cart is empty")]
pub struct EmptyCartError;

/// One product + quantity pairing within a cart
///
/// `product` is a snapshot taken when the line was created; catalog
/// changes after that never alter an existing line.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    /// Always >= 1; a line reaching 0 is removed from the cart
    pub quantity: u32,
}

impl CartLine {
    /// `unit_price * quantity` for this line
    pub fn subtotal(&self) -> Decimal {
        money::line_total(self.product.price, self.quantity)
    }
}

/// The in-memory set of selected products for one checkout session
///
/// Ordered by insertion, keyed by product id: at most one line per
/// distinct product id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `product.id`, or inserts a new
    /// line at quantity 1 with the given product snapshot. Stock is
    /// advisory display data; adding never rejects on insufficiency.
    pub fn add_product(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Set the quantity of a line.
    ///
    /// A quantity <= 0 removes the line (no-op when absent); otherwise
    /// the line is updated in place, saturating at `u32::MAX` so an
    /// oversized value can never wrap a retained line down to 0. Unknown
    /// product ids with a positive quantity are ignored, there is no
    /// product snapshot to attach.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|l| l.product.id != product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Order total: the fresh sum of `price * quantity` over all lines.
    ///
    /// Recomputed on every call rather than accumulated, so it can never
    /// drift from the lines. Exactly zero for an empty cart.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }

    /// Remove all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Build the sale submission payload from the current lines.
    ///
    /// Fails on an empty cart. Generates a fresh receipt number each
    /// call; items keep their snapshotted unit price and cart order.
    pub fn to_submission(&self, payment_method: &str) -> Result<SaleSubmission, EmptyCartError> {
        if self.lines.is_empty() {
            return Err(EmptyCartError);
        }

        let items = self
            .lines
            .iter()
            .map(|l| SaleItemInput {
                product_id: l.product.id,
                quantity: l.quantity,
                unit_price: l.product.price,
            })
            .collect();

        Ok(SaleSubmission {
            receipt_number: util::receipt_number(),
            total_amount: self.total(),
            payment_method: payment_method.to_string(),
            items,
        })
    }
}

/// Clamp free-form operator input to a non-negative quantity.
///
/// Non-numeric input counts as 0, which `set_quantity` treats as
/// removal.
pub fn parse_quantity(input: &str) -> i64 {
    input.trim().parse::<i64>().map(|q| q.max(0)).unwrap_or(0)
}
