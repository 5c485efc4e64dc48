//! Shared domain types for the POS client
//!
//! Pure data models and computation shared across the workspace:
//! product/sale/user models, the checkout cart, money helpers and
//! permission definitions. No I/O lives here.

pub mod cart;
pub mod client;
pub mod models;
pub mod money;
pub mod permissions;
pub mod util;

pub use cart::{Cart, CartLine, EmptyCartError};
