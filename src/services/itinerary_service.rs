use log::{error, info, warn};
use regex::Regex;
use std::time::Duration;

use crate::models::{
    preferences::TravelStyle,
    request::{ItineraryParams, TravelPlanResponse},
    travel_plan::TravelPlan,
};
use crate::services::gemini_service::{GeminiError, GeminiService};
use crate::services::itinerary_synthesizer::ItinerarySynthesizer;

fn style_focus(style: TravelStyle) -> &'static str {
    match style {
        TravelStyle::Adventure => "Focus on outdoor activities, hiking, extreme sports, nature exploration, and adrenaline-pumping experiences",
        TravelStyle::Culture => "Emphasize museums, historical sites, local traditions, art galleries, monuments, and cultural immersion",
        TravelStyle::Foodie => "Prioritize local cuisine, food tours, cooking classes, markets, street food, and culinary experiences",
        TravelStyle::Shopping => "Include local markets, boutiques, shopping districts, artisan crafts, and unique shopping experiences",
        TravelStyle::Relaxation => "Focus on spas, beaches, parks, leisurely activities, wellness experiences, and peaceful retreats",
        TravelStyle::Mixed => "Provide a balanced combination of all travel experiences including culture, food, adventure, shopping, and relaxation",
    }
}

/// Prompt asking the model for a TravelPlan-shaped JSON object covering every requested style.
pub fn build_prompt(params: &ItineraryParams) -> String {
    let ItineraryParams {
        city,
        days,
        budget_category,
        currency,
        travel_styles,
    } = params;

    let upper: Vec<String> = travel_styles.iter().map(|s| s.to_uppercase()).collect();
    let focus = travel_styles
        .iter()
        .map(|s| {
            let style = TravelStyle::from_key(s).unwrap_or(TravelStyle::Mixed);
            format!("{}: {}", s.to_uppercase(), style_focus(style))
        })
        .collect::<Vec<_>>()
        .join("\n");
    let joined = travel_styles.join(", ");

    format!(
        r#"Create a detailed {days}-day travel itinerary for {city} with a {budget_category} budget in {currency}.

TRAVEL STYLES: {styles}
Style Focus:
{focus}

Please tailor all activities, dining, and experiences to incorporate elements from ALL selected travel styles: {joined}. Create a balanced itinerary that reflects these combined preferences throughout each day.

Please provide a JSON response with the following structure:
{{
  "city": "{city}",
  "days": {days},
  "budget": [calculated total budget],
  "currency": "{currency}",
  "dailyItinerary": [
    {{
      "day": 1,
      "theme": "Day theme",
      "summary": "Day summary",
      "activities": {{
        "morning": [
          {{
            "name": "Activity name",
            "description": "Activity description",
            "duration": "2 hours",
            "cost": 25,
            "type": "attraction"
          }}
        ],
        "afternoon": [...],
        "evening": [...]
      }},
      "dining": {{
        "breakfast": {{
          "name": "Restaurant name",
          "cuisine": "Cuisine type",
          "priceRange": "$10-15",
          "estimatedCost": 12,
          "description": "Restaurant description"
        }},
        "lunch": {{...}},
        "dinner": {{...}}
      }},
      "navigation": "Navigation tips",
      "optionalActivities": [...],
      "estimatedCost": 120
    }}
  ]
}}

Activity "type" must be one of: attraction, culture, hidden-gem, relaxation, dining, shopping, adventure, wellness, entertainment.

Make sure the activities are realistic for {city}, consider the {budget_category} budget level, and MOST IMPORTANTLY, tailor all experiences to incorporate elements from ALL selected travel styles: {joined}. The itinerary should reflect the combined preferences while maintaining variety and balance. Keep costs reasonable for the budget category."#,
        styles = upper.join(", "),
    )
}

/// Pull the outermost `{ ... }` span out of model text (it often arrives wrapped in markdown).
pub fn extract_plan(text: &str) -> Result<TravelPlan, GeminiError> {
    let pattern = Regex::new(r"(?s)\{.*\}").map_err(|e| GeminiError::ParseError(e.to_string()))?;
    let json = pattern
        .find(text)
        .ok_or_else(|| GeminiError::ParseError("No JSON found in response".to_string()))?;
    let plan: TravelPlan = serde_json::from_str(json.as_str())?;
    plan.check_shape().map_err(GeminiError::ParseError)?;
    Ok(plan)
}

/// Model-first itinerary generation with the synthesizer as the last resort.
pub struct ItineraryService {
    gemini: GeminiService,
    synthesizer: ItinerarySynthesizer,
    timeout: Duration,
}

impl ItineraryService {
    pub fn new(gemini: GeminiService, synthesizer: ItinerarySynthesizer, timeout: Duration) -> Self {
        Self {
            gemini,
            synthesizer,
            timeout,
        }
    }

    pub fn gemini(&self) -> &GeminiService {
        &self.gemini
    }

    pub fn synthesizer(&self) -> &ItinerarySynthesizer {
        &self.synthesizer
    }

    async fn generate_with_model(&self, params: &ItineraryParams) -> Result<TravelPlan, GeminiError> {
        let prompt = build_prompt(params);
        let text = tokio::time::timeout(self.timeout, self.gemini.generate_text(&prompt))
            .await
            .map_err(|_| GeminiError::Timeout)??;
        extract_plan(&text)
    }

    /// Always produces a plan; synthesized plans carry a fallback note.
    pub async fn generate(&self, params: &ItineraryParams) -> TravelPlanResponse {
        info!(
            "Generating itinerary for {} ({} days, {}, {}, styles {:?})",
            params.city, params.days, params.budget_category, params.currency, params.travel_styles
        );

        match self.generate_with_model(params).await {
            Ok(plan) => {
                info!("Model itinerary accepted for {}", params.city);
                TravelPlanResponse::generated(plan)
            }
            Err(err) => {
                match &err {
                    GeminiError::EnvironmentError(msg) => warn!("Model unavailable: {}", msg),
                    other => error!("Model itinerary failed: {}", other),
                }
                info!("Using synthesized itinerary as fallback");
                let mut rng = rand::thread_rng();
                TravelPlanResponse::fallback(self.synthesizer.synthesize_params(params, &mut rng))
            }
        }
    }
}
