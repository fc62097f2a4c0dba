use serde::{Deserialize, Serialize};

/// Which pricing tier produced the base amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    DatabaseExactMatch,
    DatabaseHourlyRate,
    Fallback,
}

impl PriceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::DatabaseExactMatch => "database_exact_match",
            PriceSource::DatabaseHourlyRate => "database_hourly_rate",
            PriceSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Base amount used when no pricing row matches at all.
    pub fallback_price: f64,
    /// Tax percentage applied when the request does not carry one.
    pub default_tax_percentage: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            fallback_price: 32000.0,
            default_tax_percentage: 10.0,
        }
    }
}

impl PricingConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            fallback_price: std::env::var("PRICING_FALLBACK_PRICE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.fallback_price),
            default_tax_percentage: std::env::var("PRICING_DEFAULT_TAX_PERCENTAGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_tax_percentage),
        }
    }
}

pub struct PricingService;

impl PricingService {
    /// A request counts as a charter when it spans multiple days or books
    /// more than one hour per day; otherwise it is a single trip.
    pub fn is_charter(service_days: i64, hours_per_day: Option<f64>) -> bool {
        service_days > 1 || hours_per_day.map_or(false, |h| h > 1.0)
    }

    /// Derive the base amount from an hourly rate row.
    pub fn base_from_hourly_rate(
        hourly_rate: f64,
        duration_hours: f64,
        service_days: i64,
        hours_per_day: Option<f64>,
    ) -> f64 {
        if Self::is_charter(service_days, hours_per_day) {
            let effective_hours_per_day = hours_per_day.unwrap_or(duration_hours);
            let daily_rate = hourly_rate * effective_hours_per_day;
            daily_rate * service_days as f64
        } else {
            hourly_rate * duration_hours
        }
    }

    pub fn regular_discount(adjusted_base_amount: f64, discount_percentage: f64) -> f64 {
        adjusted_base_amount * (discount_percentage / 100.0)
    }

    /// Informational figure only; the breakdown reports what percentage of
    /// the adjusted base the coupon ended up removing.
    pub fn coupon_discount_percentage(adjusted_base_amount: f64, coupon_discount: f64) -> f64 {
        if coupon_discount > 0.0 && adjusted_base_amount > 0.0 {
            (coupon_discount / adjusted_base_amount) * 100.0
        } else {
            0.0
        }
    }

    /// Combined discounts may exceed the adjusted base; the amount carried
    /// into taxation is clamped at zero so tax never goes negative.
    pub fn amount_after_discount(adjusted_base_amount: f64, total_discount: f64) -> f64 {
        (adjusted_base_amount - total_discount).max(0.0)
    }

    /// Returns (tax_amount, total_amount).
    pub fn apply_tax(amount_after_discount: f64, tax_percentage: f64) -> (f64, f64) {
        let tax_amount = amount_after_discount * (tax_percentage / 100.0);
        (tax_amount, amount_after_discount + tax_amount)
    }
}
