use actix_web::{web, HttpResponse, Responder};
use mongodb::Client;
use std::sync::Arc;

use crate::services::pricing_lookup;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    active_only: Option<bool>,
}

/*
    GET /api/pricing/time-based-rules?active_only=true
*/
pub async fn get_time_based_rules(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let active_only = params.active_only.unwrap_or(false);

    match pricing_lookup::list_rules(&client, active_only).await {
        Ok(rules) => HttpResponse::Ok().json(rules),
        Err(err) => {
            eprintln!("Failed to retrieve time-based rules: {:?}", err);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to retrieve time-based rules" }))
        }
    }
}
