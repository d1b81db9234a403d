use actix_web::{web, HttpResponse, Responder};

use crate::services::location_service::LocationService;

/*
    /api/cities/{city}/coordinates
*/
pub async fn get_coordinates(path: web::Path<String>) -> impl Responder {
    let city = path.into_inner();
    if city.trim().is_empty() {
        return HttpResponse::BadRequest().body("City is required");
    }

    HttpResponse::Ok().json(LocationService::coordinates(&city))
}
