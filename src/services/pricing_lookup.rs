use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Collection};

use crate::models::pricing::{PricingCategory, PricingItem, Promotion, TimeBasedRule};
use crate::models::vehicle::Vehicle;

pub const FLEET_DB: &str = "Fleet";
pub const PRICING_DB: &str = "Pricing";

fn vehicles(client: &Client) -> Collection<Vehicle> {
    client.database(FLEET_DB).collection("Vehicles")
}

fn items(client: &Client) -> Collection<PricingItem> {
    client.database(PRICING_DB).collection("Items")
}

fn categories(client: &Client) -> Collection<PricingCategory> {
    client.database(PRICING_DB).collection("Categories")
}

fn rules(client: &Client) -> Collection<TimeBasedRule> {
    client.database(PRICING_DB).collection("TimeBasedRules")
}

fn promotions(client: &Client) -> Collection<Promotion> {
    client.database(PRICING_DB).collection("Promotions")
}

pub async fn find_vehicle(
    client: &Client,
    vehicle_id: &str,
) -> Result<Option<Vehicle>, mongodb::error::Error> {
    vehicles(client).find_one(doc! { "_id": vehicle_id }).await
}

pub async fn list_active_vehicles(
    client: &Client,
) -> Result<Vec<Vehicle>, mongodb::error::Error> {
    let cursor = vehicles(client)
        .find(doc! { "is_active": true })
        .sort(doc! { "brand": 1, "model": 1 })
        .await?;
    cursor.try_collect().await
}

/// Category display name for the breakdown; unknown or unreadable categories
/// fall back to "Standard" rather than failing the quote.
pub async fn category_name(client: &Client, category_id: Option<&str>) -> String {
    let Some(category_id) = category_id else {
        return "Standard".to_string();
    };

    match categories(client)
        .find_one(doc! { "_id": category_id })
        .await
    {
        Ok(Some(category)) => category.name,
        Ok(None) => "Standard".to_string(),
        Err(err) => {
            eprintln!("Failed to fetch pricing category {}: {:?}", category_id, err);
            "Standard".to_string()
        }
    }
}

/// Active price row for an exact (service type, vehicle, duration) match,
/// narrowed to the vehicle's category when it has one. `duration_hours` of 1
/// is the hourly-rate tier.
pub async fn find_price_item(
    client: &Client,
    service_type_id: &str,
    vehicle_id: &str,
    duration_hours: f64,
    category_id: Option<&str>,
) -> Result<Option<PricingItem>, mongodb::error::Error> {
    let mut filter = doc! {
        "service_type_id": service_type_id,
        "vehicle_id": vehicle_id,
        "duration_hours": duration_hours,
        "is_active": true,
    };
    if let Some(category_id) = category_id {
        filter.insert("category_id", category_id);
    }

    items(client).find_one(filter).await
}

/// Time-based rules, highest priority first with the rule id as a stable
/// tie-break.
pub async fn list_rules(
    client: &Client,
    active_only: bool,
) -> Result<Vec<TimeBasedRule>, mongodb::error::Error> {
    let filter = if active_only {
        doc! { "is_active": true }
    } else {
        doc! {}
    };
    let cursor = rules(client)
        .find(filter)
        .sort(doc! { "priority": -1, "_id": 1 })
        .await?;
    cursor.try_collect().await
}

pub async fn active_rules(client: &Client) -> Result<Vec<TimeBasedRule>, mongodb::error::Error> {
    list_rules(client, true).await
}

pub async fn find_active_promotion(
    client: &Client,
    code: &str,
) -> Result<Option<Promotion>, mongodb::error::Error> {
    promotions(client)
        .find_one(doc! { "code": code, "is_active": true })
        .await
}
