use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
    UltraLuxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 4] = [
        BudgetTier::Budget,
        BudgetTier::MidRange,
        BudgetTier::Luxury,
        BudgetTier::UltraLuxury,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "budget" => Some(BudgetTier::Budget),
            "mid-range" => Some(BudgetTier::MidRange),
            "luxury" => Some(BudgetTier::Luxury),
            "ultra-luxury" => Some(BudgetTier::UltraLuxury),
            _ => None,
        }
    }

    /// Unrecognized tiers degrade to mid-range instead of failing.
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    pub fn key(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid-range",
            BudgetTier::Luxury => "luxury",
            BudgetTier::UltraLuxury => "ultra-luxury",
        }
    }

    /// Nominal spend per day, in the plan's currency unit
    pub fn daily_amount(&self) -> u32 {
        match self {
            BudgetTier::Budget => 50,
            BudgetTier::MidRange => 120,
            BudgetTier::Luxury => 300,
            BudgetTier::UltraLuxury => 500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::MidRange => "Mid-range",
            BudgetTier::Luxury => "Luxury",
            BudgetTier::UltraLuxury => "Ultra Luxury",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Essential experiences, local food, budget accommodations",
            BudgetTier::MidRange => "Comfortable stays, mix of experiences, good restaurants",
            BudgetTier::Luxury => "Premium experiences, fine dining, luxury accommodations",
            BudgetTier::UltraLuxury => "Exclusive experiences, Michelin dining, 5-star everything",
        }
    }
}

impl Default for BudgetTier {
    fn default() -> Self {
        BudgetTier::MidRange
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Adventure,
    Culture,
    Foodie,
    Shopping,
    Relaxation,
    Mixed,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 6] = [
        TravelStyle::Adventure,
        TravelStyle::Culture,
        TravelStyle::Foodie,
        TravelStyle::Shopping,
        TravelStyle::Relaxation,
        TravelStyle::Mixed,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "adventure" => Some(TravelStyle::Adventure),
            "culture" => Some(TravelStyle::Culture),
            "foodie" => Some(TravelStyle::Foodie),
            "shopping" => Some(TravelStyle::Shopping),
            "relaxation" => Some(TravelStyle::Relaxation),
            "mixed" => Some(TravelStyle::Mixed),
            _ => None,
        }
    }

    /// The style that drives content selection: the first requested one.
    /// An empty list or an unknown first key both resolve to `Mixed`.
    pub fn primary<S: AsRef<str>>(styles: &[S]) -> Self {
        styles
            .first()
            .and_then(|s| Self::from_key(s.as_ref()))
            .unwrap_or(TravelStyle::Mixed)
    }

    pub fn key(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "adventure",
            TravelStyle::Culture => "culture",
            TravelStyle::Foodie => "foodie",
            TravelStyle::Shopping => "shopping",
            TravelStyle::Relaxation => "relaxation",
            TravelStyle::Mixed => "mixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "Adventure",
            TravelStyle::Culture => "Culture",
            TravelStyle::Foodie => "Foodie",
            TravelStyle::Shopping => "Shopping",
            TravelStyle::Relaxation => "Relaxation",
            TravelStyle::Mixed => "Mixed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "Outdoor activities, hiking, extreme sports, nature exploration",
            TravelStyle::Culture => "Museums, historical sites, local traditions, art galleries",
            TravelStyle::Foodie => "Local cuisine, food tours, cooking classes, markets",
            TravelStyle::Shopping => "Local markets, boutiques, shopping districts, souvenirs",
            TravelStyle::Relaxation => "Spas, beaches, parks, leisurely activities, wellness",
            TravelStyle::Mixed => "Balanced combination of all travel experiences",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "🏔️",
            TravelStyle::Culture => "🏛️",
            TravelStyle::Foodie => "🍽️",
            TravelStyle::Shopping => "🛍️",
            TravelStyle::Relaxation => "🧘",
            TravelStyle::Mixed => "🌟",
        }
    }
}
