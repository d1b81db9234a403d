use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner_api::config::AppConfig;
use trip_planner_api::routes;
use trip_planner_api::services::{
    gemini_service::GeminiService, itinerary_service::ItineraryService,
    itinerary_synthesizer::ItinerarySynthesizer,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    let config = AppConfig::from_env();
    let gemini = GeminiService::new(&config.gemini)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    if gemini.is_configured() {
        println!("Gemini client ready (model {})", gemini.model());
    } else {
        println!("GEMINI_API_KEY not set. All itineraries will use the fallback synthesizer.");
    }

    let itinerary_service = web::Data::new(ItineraryService::new(
        gemini,
        ItinerarySynthesizer::default(),
        config.gemini.timeout,
    ));

    let host = config.host.clone();
    let port = config.port;
    let config = web::Data::new(config);
    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(itinerary_service.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
