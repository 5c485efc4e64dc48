//! Domain models
//!
//! Entities owned by the backend and the payloads used to mutate them.
//! Field names follow the backend API wire format.

pub mod analytics;
pub mod category;
pub mod product;
pub mod sale;
pub mod user;

pub use analytics::{
    AnalyticsReport, DailySales, LowStockProduct, PaymentMethodStat, SalesStatistics, TopProduct,
};
pub use category::{Category, CategoryCreate};
pub use product::{Product, ProductCreate, ProductUpdate, normalize_sku};
pub use sale::{Sale, SaleItem, SaleItemInput, SaleSubmission};
pub use user::{PermissionInfo, UserInfo, UserSummary};
