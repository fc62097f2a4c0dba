use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::services::coupon_service::{CouponOutcome, CouponService};
use crate::services::pricing_lookup;

#[derive(Debug, Deserialize)]
pub struct ValidateCouponRequest {
    pub code: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ValidateCouponResponse {
    pub valid: bool,
    pub discount_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/*
    POST /api/pricing/validate-coupon

    The calculator treats bad coupons as silent no-ops; this endpoint is the
    user-facing half that tells the booking form why a code was rejected.
*/
pub async fn validate_coupon(
    data: web::Data<Arc<Client>>,
    input: web::Json<ValidateCouponRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let request = input.into_inner();

    let code = request.code.unwrap_or_default();
    let code = code.trim();
    if code.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Missing required field: code" }));
    }
    let Some(amount) = request.amount else {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Missing required field: amount" }));
    };

    let promotion = match pricing_lookup::find_active_promotion(&client, code).await {
        Ok(Some(promotion)) => promotion,
        Ok(None) => {
            return HttpResponse::Ok().json(ValidateCouponResponse {
                valid: false,
                discount_amount: 0.0,
                reason: Some("Coupon not found or inactive".to_string()),
                name: None,
            });
        }
        Err(err) => {
            eprintln!("Coupon lookup failed: {:?}", err);
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to validate coupon" }));
        }
    };

    let response = match CouponService::evaluate(&promotion, amount, Utc::now()) {
        CouponOutcome::Applied(discount_amount) => ValidateCouponResponse {
            valid: true,
            discount_amount,
            reason: None,
            name: Some(promotion.name),
        },
        CouponOutcome::NotYetActive => ValidateCouponResponse {
            valid: false,
            discount_amount: 0.0,
            reason: Some("Coupon is not active yet".to_string()),
            name: Some(promotion.name),
        },
        CouponOutcome::Expired => ValidateCouponResponse {
            valid: false,
            discount_amount: 0.0,
            reason: Some("Coupon has expired".to_string()),
            name: Some(promotion.name),
        },
        CouponOutcome::BelowMinimum { minimum_amount } => ValidateCouponResponse {
            valid: false,
            discount_amount: 0.0,
            reason: Some(format!(
                "Order amount is below the minimum of {}",
                minimum_amount
            )),
            name: Some(promotion.name),
        },
    };

    HttpResponse::Ok().json(response)
}
