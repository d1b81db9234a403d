pub mod content_catalog;
pub mod gemini_service;
pub mod itinerary_service;
pub mod itinerary_synthesizer;
pub mod location_service;
pub mod pricing_service;
