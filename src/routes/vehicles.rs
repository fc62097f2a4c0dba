use actix_web::{web, HttpResponse, Responder};
use mongodb::Client;
use std::sync::Arc;

use crate::services::pricing_lookup;

/*
    GET /api/vehicles
*/
pub async fn get_vehicles(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();

    match pricing_lookup::list_active_vehicles(&client).await {
        Ok(vehicles) => HttpResponse::Ok().json(vehicles),
        Err(err) => {
            eprintln!("Failed to retrieve vehicles: {:?}", err);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to retrieve vehicles" }))
        }
    }
}

/*
    GET /api/vehicles/{id}
*/
pub async fn get_by_id(path: web::Path<String>, data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let vehicle_id = path.into_inner();

    match pricing_lookup::find_vehicle(&client, &vehicle_id).await {
        Ok(Some(vehicle)) => HttpResponse::Ok().json(vehicle),
        Ok(None) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Vehicle not found" }))
        }
        Err(err) => {
            eprintln!("Failed to retrieve vehicle {}: {:?}", vehicle_id, err);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to retrieve vehicle" }))
        }
    }
}
