use actix_web::web;

pub mod health;
pub mod itinerary;
pub mod location;
pub mod options;

/// Route table shared by the server binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .app_data(itinerary::json_config())
                .route("/ping", web::get().to(health::ping))
                .route("/options", web::get().to(options::get_options))
                .route(
                    "/cities/{city}/coordinates",
                    web::get().to(location::get_coordinates),
                )
                .route(
                    "/generate-itinerary",
                    web::post().to(itinerary::generate),
                )
                .route("/test-gemini", web::get().to(itinerary::test_gemini)),
        );
}
