//! Analytics Models
//!
//! Precomputed aggregates from `GET /analytics`. Consumed read-only by
//! dashboard views; nothing here is recomputed client-side.

use serde::{Deserialize, Serialize};

/// Full analytics report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub daily_sales: Vec<DailySales>,
    pub payment_methods: Vec<PaymentMethodStat>,
    pub top_products: Vec<TopProduct>,
    pub statistics: SalesStatistics,
    #[serde(default)]
    pub low_stock_products: Vec<LowStockProduct>,
}

/// Revenue and order count for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    /// Short weekday label ("Mon", "Tue", ...)
    pub day: String,
    /// ISO date
    pub date: String,
    pub revenue: f64,
    pub orders: u64,
}

/// Revenue share of one payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodStat {
    pub name: String,
    pub value: f64,
    pub count: u64,
}

/// Top-selling product by quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u64,
    pub revenue: f64,
}

/// Overall sales statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesStatistics {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub today_revenue: f64,
    pub today_orders: u64,
    pub avg_order_value: f64,
}

/// Product at or below its reorder level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockProduct {
    pub id: i64,
    pub name: String,
    pub stock: i32,
    pub reorder_level: i32,
}
