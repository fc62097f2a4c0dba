use actix_web::{web, App};
use mongodb::Client;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

use charter_pricing_api::middleware;
use charter_pricing_api::routes;
use charter_pricing_api::services::pricing_service::PricingConfig;

pub struct TestApp {
    pub client: Arc<Client>,
}

impl TestApp {
    pub async fn new() -> Self {
        // The driver connects lazily, so handlers that answer before their
        // first query never touch the network. Tests that exercise real
        // lookups need MONGODB_URI pointing at a live server.
        let mongo_uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = Client::with_uri_str(&mongo_uri)
            .await
            .expect("failed to parse MongoDB URI");

        Self {
            client: Arc::new(client),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.client.clone()))
            .app_data(web::Data::new(PricingConfig::default()))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/bookings")
                            .wrap(middleware::auth::AuthMiddleware)
                            .route(
                                "/calculate-pricing",
                                web::post().to(routes::pricing::calculate_pricing),
                            ),
                    )
                    .service(
                        web::scope("/pricing")
                            .route(
                                "/time-based-rules",
                                web::get().to(routes::rules::get_time_based_rules),
                            )
                            .route(
                                "/validate-coupon",
                                web::post().to(routes::coupons::validate_coupon),
                            ),
                    )
                    .service(
                        web::scope("/vehicles")
                            .route("", web::get().to(routes::vehicles::get_vehicles))
                            .route("/{id}", web::get().to(routes::vehicles::get_by_id)),
                    ),
            )
    }
}

#[allow(dead_code)]
pub async fn wait_for_server_ready(port: u16) {
    for _ in 0..30 {
        if let Ok(_) = reqwest::get(&format!("http://localhost:{}/health", port)).await {
            return;
        }
        sleep(Duration::from_millis(100)).await;
    }
    panic!("Server failed to start within timeout");
}
