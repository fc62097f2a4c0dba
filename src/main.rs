use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use charter_pricing_api::db;
use charter_pricing_api::middleware;
use charter_pricing_api::routes;
use charter_pricing_api::services::pricing_service::PricingConfig;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    println!("Got MongoDB URI, attempting connection...");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    let pricing_config = PricingConfig::from_env();
    println!("Pricing config: {:?}", pricing_config);

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(pricing_config.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        // Quote calculation requires a session outside local dev
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
    })
    .bind((host, port))?
    .run()
    .await
}
