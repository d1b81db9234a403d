use actix_web::{error::InternalError, web, HttpResponse, Responder};
use log::{error, warn};
use serde::Serialize;

use crate::models::request::{TravelPlanRequest, TravelPlanResponse, MISSING_FIELDS_ERROR};
use crate::services::itinerary_service::ItineraryService;

/*
    /api/generate-itinerary
*/
pub async fn generate(
    service: web::Data<ItineraryService>,
    input: web::Json<TravelPlanRequest>,
) -> impl Responder {
    let params = match input.into_inner().validate() {
        Ok(params) => params,
        Err(err) => {
            warn!("Rejected itinerary request: {}", err);
            return HttpResponse::BadRequest().json(TravelPlanResponse::failure(err));
        }
    };

    HttpResponse::Ok().json(service.generate(&params).await)
}

/// Malformed bodies get the same 400 shape as missing fields.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Invalid itinerary request body: {}", err);
        let response = HttpResponse::BadRequest().json(TravelPlanResponse::failure(MISSING_FIELDS_ERROR));
        InternalError::from_response(err, response).into()
    })
}

#[derive(Serialize)]
struct ModelCheck {
    success: bool,
    message: String,
    response: String,
}

/*
    /api/test-gemini
*/
pub async fn test_gemini(service: web::Data<ItineraryService>) -> impl Responder {
    let check = match service
        .gemini()
        .generate_text("Say 'Hello, Gemini is working!' in one sentence.")
        .await
    {
        Ok(text) => ModelCheck {
            success: true,
            message: "Gemini API is working!".to_string(),
            response: text,
        },
        Err(err) => {
            error!("Gemini test failed: {}", err);
            ModelCheck {
                success: true,
                message: "Using mock response (Gemini API failed)".to_string(),
                response: "Hello, this is a mock response because Gemini API is not working.".to_string(),
            }
        }
    };

    HttpResponse::Ok().json(check)
}
