pub mod preferences;
pub mod request;
pub mod travel_plan;
