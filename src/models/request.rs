use serde::{Deserialize, Serialize};

use super::travel_plan::TravelPlan;

pub const MISSING_FIELDS_ERROR: &str = "Missing required fields: city, days, budgetCategory, currency, travelStyles (must be non-empty array)";

/// Longest trip the API will plan in one request.
pub const MAX_TRIP_DAYS: i64 = 365;

pub const FALLBACK_NOTE: &str = "Generated using enhanced mock data (AI service unavailable)";

/// Body of `POST /api/generate-itinerary` as the form sends it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlanRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub days: Option<i64>,
    #[serde(default)]
    pub budget_category: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub travel_styles: Option<Vec<String>>,
}

/// A request that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryParams {
    pub city: String,
    pub days: u32,
    pub budget_category: String,
    pub currency: String,
    pub travel_styles: Vec<String>,
}

impl TravelPlanRequest {
    pub fn validate(self) -> Result<ItineraryParams, String> {
        let city = non_blank(self.city);
        let budget_category = non_blank(self.budget_category);
        let currency = non_blank(self.currency);
        let days = self
            .days
            .filter(|d| (1..=MAX_TRIP_DAYS).contains(d))
            .and_then(|d| u32::try_from(d).ok());
        let travel_styles = self.travel_styles.filter(|s| !s.is_empty());

        match (city, days, budget_category, currency, travel_styles) {
            (Some(city), Some(days), Some(budget_category), Some(currency), Some(travel_styles)) => {
                Ok(ItineraryParams {
                    city,
                    days,
                    budget_category,
                    currency,
                    travel_styles,
                })
            }
            _ => Err(MISSING_FIELDS_ERROR.to_string()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPlanResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TravelPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TravelPlanResponse {
    pub fn generated(plan: TravelPlan) -> Self {
        Self {
            success: true,
            data: Some(plan),
            error: None,
            note: None,
        }
    }

    pub fn fallback(plan: TravelPlan) -> Self {
        Self {
            success: true,
            data: Some(plan),
            error: None,
            note: Some(FALLBACK_NOTE.to_string()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            note: None,
        }
    }
}
