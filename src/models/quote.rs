use serde::{Deserialize, Serialize};

use crate::models::pricing::TimeBasedRule;
use crate::models::vehicle::VehicleSummary;

/// Inbound body of POST /api/bookings/calculate-pricing.
///
/// Required fields are Options so the handler can answer 400 with the names
/// of whichever fields are missing instead of a serde parse error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PricingRequest {
    pub service_type_id: Option<String>,
    pub vehicle_id: Option<String>,
    pub duration_hours: Option<f64>,
    pub service_days: Option<i64>,
    pub hours_per_day: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub tax_percentage: Option<f64>,
    pub coupon_code: Option<String>,
    pub date_time: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
}

/// Copy of the rule that won, echoed back so the dashboard can show why the
/// price moved.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppliedRuleSummary {
    pub name: String,
    pub adjustment_percentage: f64,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub days_of_week: Vec<String>,
}

impl From<&TimeBasedRule> for AppliedRuleSummary {
    fn from(rule: &TimeBasedRule) -> Self {
        Self {
            name: rule.name.clone(),
            adjustment_percentage: rule.adjustment_percentage,
            description: rule.description.clone(),
            start_time: rule.start_time.clone(),
            end_time: rule.end_time.clone(),
            days_of_week: rule.days_of_week.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_amount: f64,
    pub time_based_adjustment: f64,
    pub adjusted_base_amount: f64,
    pub applied_time_based_rule: Option<AppliedRuleSummary>,
    pub discount_amount: f64,
    pub regular_discount_amount: f64,
    pub coupon_discount_amount: f64,
    pub coupon_discount_percentage: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub currency: String,
    pub price_source: String,
    pub category: String,
    pub vehicle: VehicleSummary,
}
