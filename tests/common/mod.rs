use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use serde_json::json;
use std::time::Duration;

use trip_planner_api::config::{AppConfig, GeminiConfig};
use trip_planner_api::routes;
use trip_planner_api::services::{
    gemini_service::GeminiService, itinerary_service::ItineraryService,
    itinerary_synthesizer::ItinerarySynthesizer,
};

pub const TEST_API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/models/gemini-pro:generateContent";

pub struct TestApp {
    pub config: web::Data<AppConfig>,
    pub service: web::Data<ItineraryService>,
}

impl TestApp {
    /// App with no model key: every itinerary comes from the synthesizer.
    pub fn new() -> Self {
        Self::with_gemini(GeminiConfig::default())
    }

    /// App whose model client points at `base_url` (usually a mockito server).
    pub fn with_model(base_url: &str) -> Self {
        Self::with_model_timeout(base_url, Duration::from_secs(5))
    }

    pub fn with_model_timeout(base_url: &str, timeout: Duration) -> Self {
        Self::with_gemini(GeminiConfig {
            api_key: Some(TEST_API_KEY.to_string()),
            base_url: base_url.to_string(),
            timeout,
            ..GeminiConfig::default()
        })
    }

    fn with_gemini(gemini: GeminiConfig) -> Self {
        let config = AppConfig {
            gemini,
            ..AppConfig::default()
        };
        let client = GeminiService::new(&config.gemini).expect("Failed to build Gemini client");
        let service = ItineraryService::new(client, ItinerarySynthesizer::default(), config.gemini.timeout);

        Self {
            config: web::Data::new(config),
            service: web::Data::new(service),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(self.config.clone())
            .app_data(self.service.clone())
            .configure(routes::configure)
    }
}

pub fn itinerary_request(city: &str, days: i64, budget: &str, styles: &[&str]) -> serde_json::Value {
    json!({
        "city": city,
        "days": days,
        "budgetCategory": budget,
        "currency": "USD",
        "travelStyles": styles,
    })
}

/// A plan the way a model would phrase it, with values the synthesizer never produces.
pub fn model_plan() -> serde_json::Value {
    let activity = |name: &str, kind: &str| {
        json!({
            "name": name,
            "description": "Picked by the model",
            "duration": "90 minutes",
            "cost": 12.5,
            "type": kind
        })
    };
    let dining = |name: &str| {
        json!({
            "name": name,
            "cuisine": "Portuguese",
            "priceRange": "€10-20",
            "estimatedCost": 15,
            "description": "Model pick"
        })
    };

    json!({
        "city": "Lisbon",
        "days": 1,
        "budget": 200,
        "currency": "EUR",
        "dailyItinerary": [{
            "day": 1,
            "theme": "Hills and Trams",
            "summary": "Ride tram 28 through Alfama.",
            "activities": {
                "morning": [activity("Castelo de São Jorge", "attraction")],
                "afternoon": [activity("LX Factory", "hidden-gem")],
                "evening": [activity("Fado in Alfama", "entertainment")]
            },
            "dining": {
                "breakfast": dining("Pastéis de Belém"),
                "lunch": dining("Time Out Market"),
                "dinner": dining("Cervejaria Ramiro")
            },
            "navigation": "Buy a Viva Viagem card.",
            "optionalActivities": [activity("Sunset at Miradouro", "relaxation")],
            "estimatedCost": 180
        }]
    })
}

/// Wrap model text in the generateContent response envelope.
pub fn model_response(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
