use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub passenger_capacity: Option<i32>,
    pub luggage_capacity: Option<i32>,
    pub category_id: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Trimmed vehicle block embedded in a price breakdown response.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VehicleSummary {
    pub brand: String,
    pub model: String,
    pub image_url: String,
    pub passenger_capacity: i32,
    pub luggage_capacity: i32,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            brand: vehicle.brand.clone().unwrap_or_default(),
            model: vehicle.model.clone().unwrap_or_default(),
            image_url: vehicle.image_url.clone().unwrap_or_default(),
            passenger_capacity: vehicle.passenger_capacity.unwrap_or(0),
            luggage_capacity: vehicle.luggage_capacity.unwrap_or(0),
        }
    }
}
