use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::services::itinerary_service::ItineraryService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    config: web::Data<AppConfig>,
    service: web::Data<ItineraryService>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // The synthesizer keeps generation working, so a missing model only degrades service
    let gemini_result = check_gemini(&service);
    health
        .services
        .insert("gemini".to_string(), gemini_result.clone());

    if gemini_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_gemini(service: &ItineraryService) -> ServiceStatus {
    let gemini = service.gemini();
    if gemini.is_configured() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Gemini API key configured (model {})", gemini.model())),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("GEMINI_API_KEY not configured, itineraries will be synthesized".to_string()),
        }
    }
}

#[derive(Serialize)]
struct Ping {
    message: String,
}

/*
    /api/ping
*/
pub async fn ping(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(Ping {
        message: config.ping_message.clone(),
    })
}
