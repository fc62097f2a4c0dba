use chrono::{DateTime, Utc};

use crate::models::pricing::{DiscountType, Promotion};

/// Result of checking a promotion against an order amount at a point in time.
///
/// The calculator folds every non-applied outcome into a zero discount; the
/// validate-coupon endpoint surfaces the reason to the dashboard instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CouponOutcome {
    Applied(f64),
    NotYetActive,
    Expired,
    BelowMinimum { minimum_amount: f64 },
}

impl CouponOutcome {
    pub fn discount_amount(&self) -> f64 {
        match self {
            CouponOutcome::Applied(amount) => *amount,
            _ => 0.0,
        }
    }
}

pub struct CouponService;

impl CouponService {
    /// Evaluate a promotion against the adjusted base amount.
    ///
    /// Window bounds are optional and inclusive. Percentage discounts are
    /// capped at `maximum_discount` when one is set; fixed discounts can
    /// never exceed the amount itself.
    pub fn evaluate(promotion: &Promotion, amount: f64, now: DateTime<Utc>) -> CouponOutcome {
        if let Some(start_date) = promotion.start_date {
            if now < start_date {
                return CouponOutcome::NotYetActive;
            }
        }
        if let Some(end_date) = promotion.end_date {
            if now > end_date {
                return CouponOutcome::Expired;
            }
        }

        if let Some(minimum_amount) = promotion.minimum_amount {
            if amount < minimum_amount {
                return CouponOutcome::BelowMinimum { minimum_amount };
            }
        }

        let discount = match promotion.discount_type {
            DiscountType::Percentage => {
                let mut computed = amount * (promotion.discount_value / 100.0);
                if let Some(maximum_discount) = promotion.maximum_discount {
                    if computed > maximum_discount {
                        computed = maximum_discount;
                    }
                }
                computed
            }
            DiscountType::Fixed => promotion.discount_value.min(amount),
        };

        CouponOutcome::Applied(discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn promotion() -> Promotion {
        Promotion {
            id: "promo1".to_string(),
            name: "Summer".to_string(),
            code: "SUMMER20".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 20.0,
            maximum_discount: None,
            minimum_amount: None,
            start_date: None,
            end_date: None,
            is_active: true,
            times_used: 0,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_percentage_discount_capped_at_maximum() {
        let mut promo = promotion();
        promo.maximum_discount = Some(5000.0);

        let outcome = CouponService::evaluate(&promo, 30000.0, at(2025, 6, 1));
        // min(30000 * 0.20, 5000)
        assert_eq!(outcome, CouponOutcome::Applied(5000.0));
    }

    #[test]
    fn test_percentage_discount_uncapped() {
        let promo = promotion();
        let outcome = CouponService::evaluate(&promo, 10000.0, at(2025, 6, 1));
        assert_eq!(outcome, CouponOutcome::Applied(2000.0));
    }

    #[test]
    fn test_fixed_discount_cannot_exceed_amount() {
        let mut promo = promotion();
        promo.discount_type = DiscountType::Fixed;
        promo.discount_value = 3000.0;

        assert_eq!(
            CouponService::evaluate(&promo, 10000.0, at(2025, 6, 1)),
            CouponOutcome::Applied(3000.0)
        );
        assert_eq!(
            CouponService::evaluate(&promo, 2000.0, at(2025, 6, 1)),
            CouponOutcome::Applied(2000.0)
        );
    }

    #[test]
    fn test_validity_window() {
        let mut promo = promotion();
        promo.start_date = Some(at(2025, 6, 1));
        promo.end_date = Some(at(2025, 6, 30));

        assert_eq!(
            CouponService::evaluate(&promo, 10000.0, at(2025, 5, 20)),
            CouponOutcome::NotYetActive
        );
        assert_eq!(
            CouponService::evaluate(&promo, 10000.0, at(2025, 7, 2)),
            CouponOutcome::Expired
        );
        assert_eq!(
            CouponService::evaluate(&promo, 10000.0, at(2025, 6, 15)),
            CouponOutcome::Applied(2000.0)
        );
        // Expired or pending coupons contribute nothing to the discount
        assert_eq!(
            CouponService::evaluate(&promo, 10000.0, at(2025, 7, 2)).discount_amount(),
            0.0
        );
    }

    #[test]
    fn test_minimum_amount_gate() {
        let mut promo = promotion();
        promo.minimum_amount = Some(20000.0);

        assert_eq!(
            CouponService::evaluate(&promo, 15000.0, at(2025, 6, 1)),
            CouponOutcome::BelowMinimum {
                minimum_amount: 20000.0
            }
        );
        assert_eq!(
            CouponService::evaluate(&promo, 25000.0, at(2025, 6, 1)),
            CouponOutcome::Applied(5000.0)
        );
    }
}
