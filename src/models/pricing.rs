use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricingCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub sort_order: Option<i32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// One row of the price table: an exact (service, vehicle, duration) price.
/// A `duration_hours` of 1 doubles as the hourly rate used for charter math.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricingItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub service_type_id: String,
    pub vehicle_id: String,
    pub category_id: Option<String>,
    pub duration_hours: f64,
    pub price: f64,
    pub currency: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TimeBasedRule {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub service_type_id: Option<String>,
    /// Lowercase day names ("sunday".."saturday"). Empty means every day.
    #[serde(default)]
    pub days_of_week: Vec<String>,
    /// "HH:MM". When start > end the window wraps past midnight.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub adjustment_percentage: f64,
    #[serde(default)]
    pub priority: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Promotion {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub maximum_discount: Option<f64>,
    pub minimum_amount: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub times_used: i64,
}

fn default_active() -> bool {
    true
}
