use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::Client;
use std::sync::Arc;

use crate::models::quote::{AppliedRuleSummary, PriceBreakdown, PricingRequest};
use crate::models::vehicle::VehicleSummary;
use crate::services::coupon_service::CouponService;
use crate::services::pricing_lookup;
use crate::services::pricing_service::{PriceSource, PricingConfig, PricingService};
use crate::services::time_rule_service::TimeRuleService;

/*
    POST /api/bookings/calculate-pricing

    Quote pipeline: resolve base price -> time-based adjustment -> discounts
    -> tax. Only the vehicle lookup is allowed to fail the request; rule and
    coupon lookups degrade to "not applicable".
*/
pub async fn calculate_pricing(
    data: web::Data<Arc<Client>>,
    config: web::Data<PricingConfig>,
    input: web::Json<PricingRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let request = input.into_inner();

    let mut missing = Vec::new();
    if request
        .service_type_id
        .as_deref()
        .map_or(true, |s| s.trim().is_empty())
    {
        missing.push("service_type_id");
    }
    if request
        .vehicle_id
        .as_deref()
        .map_or(true, |s| s.trim().is_empty())
    {
        missing.push("vehicle_id");
    }
    if request.duration_hours.is_none() {
        missing.push("duration_hours");
    }
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Missing required fields: {} are required", missing.join(", "))
        }));
    }

    let service_type_id = request.service_type_id.unwrap_or_default();
    let vehicle_id = request.vehicle_id.unwrap_or_default();
    let duration_hours = request.duration_hours.unwrap_or_default();
    if duration_hours <= 0.0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "duration_hours must be greater than 0"
        }));
    }

    let service_days = request.service_days.unwrap_or(1);
    let discount_percentage = request.discount_percentage.unwrap_or(0.0);
    let tax_percentage = request
        .tax_percentage
        .unwrap_or(config.default_tax_percentage);
    let coupon_code = request.coupon_code.unwrap_or_default();

    let vehicle = match pricing_lookup::find_vehicle(&client, &vehicle_id).await {
        Ok(Some(vehicle)) => vehicle,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(serde_json::json!({ "error": "Vehicle not found" }));
        }
        Err(err) => {
            eprintln!("Vehicle lookup failed: {:?}", err);
            return HttpResponse::NotFound()
                .json(serde_json::json!({ "error": "Vehicle not found" }));
        }
    };

    let vehicle_category = vehicle.category_id.clone();
    let category = pricing_lookup::category_name(&client, vehicle_category.as_deref()).await;

    // Tier 1: exact duration match. A query error is logged and falls
    // through to the next tier.
    let exact_item = pricing_lookup::find_price_item(
        &client,
        &service_type_id,
        &vehicle_id,
        duration_hours,
        vehicle_category.as_deref(),
    )
    .await
    .unwrap_or_else(|err| {
        eprintln!("Pricing query error: {:?}", err);
        None
    });

    let (base_amount, price_source) = if let Some(item) = exact_item {
        (item.price, PriceSource::DatabaseExactMatch)
    } else {
        // Tier 2: hourly rate row (duration_hours == 1)
        let hourly_item = pricing_lookup::find_price_item(
            &client,
            &service_type_id,
            &vehicle_id,
            1.0,
            vehicle_category.as_deref(),
        )
        .await
        .unwrap_or_else(|err| {
            eprintln!("Hourly rate query error: {:?}", err);
            None
        });

        match hourly_item {
            Some(hourly) => (
                PricingService::base_from_hourly_rate(
                    hourly.price,
                    duration_hours,
                    service_days,
                    request.hours_per_day,
                ),
                PriceSource::DatabaseHourlyRate,
            ),
            None => (config.fallback_price, PriceSource::Fallback),
        }
    };

    let mut time_based_adjustment = 0.0;
    let mut applied_time_based_rule: Option<AppliedRuleSummary> = None;
    if let Some(pickup) = TimeRuleService::pickup_instant(
        request.pickup_date.as_deref(),
        request.pickup_time.as_deref(),
        request.date_time.as_deref(),
    ) {
        match pricing_lookup::active_rules(&client).await {
            Ok(rules) => {
                if let Some(rule) = TimeRuleService::select_rule(
                    &rules,
                    pickup,
                    vehicle_category.as_deref(),
                    &service_type_id,
                ) {
                    time_based_adjustment = TimeRuleService::adjustment(base_amount, rule);
                    applied_time_based_rule = Some(AppliedRuleSummary::from(rule));
                }
            }
            Err(err) => {
                // Rules are an enrichment; a dead rules collection must not
                // block quoting.
                eprintln!("Failed to fetch time-based rules: {:?}", err);
            }
        }
    }

    let adjusted_base_amount = base_amount + time_based_adjustment;

    let regular_discount_amount =
        PricingService::regular_discount(adjusted_base_amount, discount_percentage);

    let mut coupon_discount_amount = 0.0;
    let code = coupon_code.trim();
    if !code.is_empty() {
        match pricing_lookup::find_active_promotion(&client, code).await {
            Ok(Some(promotion)) => {
                coupon_discount_amount =
                    CouponService::evaluate(&promotion, adjusted_base_amount, Utc::now())
                        .discount_amount();
            }
            // An unknown code is a silent no-op here; the validate-coupon
            // endpoint owns user-facing feedback.
            Ok(None) => {}
            Err(err) => {
                eprintln!("Coupon lookup failed: {:?}", err);
            }
        }
    }

    let discount_amount = regular_discount_amount + coupon_discount_amount;
    let amount_after_discount =
        PricingService::amount_after_discount(adjusted_base_amount, discount_amount);
    let (tax_amount, total_amount) =
        PricingService::apply_tax(amount_after_discount, tax_percentage);

    HttpResponse::Ok().json(PriceBreakdown {
        base_amount,
        time_based_adjustment,
        adjusted_base_amount,
        applied_time_based_rule,
        discount_amount,
        regular_discount_amount,
        coupon_discount_amount,
        coupon_discount_percentage: PricingService::coupon_discount_percentage(
            adjusted_base_amount,
            coupon_discount_amount,
        ),
        tax_amount,
        total_amount,
        currency: "JPY".to_string(),
        price_source: price_source.as_str().to_string(),
        category,
        vehicle: VehicleSummary::from(&vehicle),
    })
}
