use log::debug;
use rand::Rng;

use crate::models::{
    preferences::{BudgetTier, TravelStyle},
    request::ItineraryParams,
    travel_plan::{Activity, ActivityType, DayActivities, DayDining, DayPlan, DiningOption, TravelPlan},
};
use crate::services::content_catalog::ContentCatalog;
use crate::services::pricing_service::{Meal, PricingService};

const NAVIGATION_TIP: &str = "Use the efficient public transportation system. Most attractions are accessible by metro/bus. Consider purchasing a day pass for unlimited travel.";

const ADVENTURE_THEMES: &[&str] = &[
    "Outdoor Adventures",
    "Extreme Sports & Activities",
    "Nature Exploration",
    "Adventure Parks & Thrills",
    "Mountain & Water Adventures",
];
const CULTURE_THEMES: &[&str] = &[
    "Historic Discovery",
    "Cultural Immersion",
    "Art & Architecture",
    "Museums & Galleries",
    "Local Traditions",
];
const FOODIE_THEMES: &[&str] = &[
    "Culinary Journey",
    "Street Food & Markets",
    "Fine Dining Experience",
    "Cooking Classes & Tours",
    "Local Specialties",
];
const SHOPPING_THEMES: &[&str] = &[
    "Shopping Districts",
    "Local Markets & Boutiques",
    "Designer & Luxury Shopping",
    "Artisan Crafts",
    "Fashion & Style Tour",
];
const RELAXATION_THEMES: &[&str] = &[
    "Wellness & Spa Day",
    "Parks & Gardens",
    "Beach & Waterfront",
    "Peaceful Retreats",
    "Mindfulness & Nature",
];
const MIXED_THEMES: &[&str] = &[
    "Historic Discovery",
    "Cultural Immersion",
    "Local Life & Hidden Gems",
    "Art & Architecture",
    "Food & Market Adventures",
    "Nature & Relaxation",
    "Modern City Experience",
];

pub fn themes_for(style: TravelStyle) -> &'static [&'static str] {
    match style {
        TravelStyle::Adventure => ADVENTURE_THEMES,
        TravelStyle::Culture => CULTURE_THEMES,
        TravelStyle::Foodie => FOODIE_THEMES,
        TravelStyle::Shopping => SHOPPING_THEMES,
        TravelStyle::Relaxation => RELAXATION_THEMES,
        TravelStyle::Mixed => MIXED_THEMES,
    }
}

pub fn activity_type_for(style: TravelStyle) -> ActivityType {
    match style {
        TravelStyle::Shopping => ActivityType::Shopping,
        TravelStyle::Culture => ActivityType::Attraction,
        TravelStyle::Foodie => ActivityType::Dining,
        TravelStyle::Adventure => ActivityType::Adventure,
        TravelStyle::Relaxation => ActivityType::Wellness,
        TravelStyle::Mixed => ActivityType::Attraction,
    }
}

fn morning_description(style: TravelStyle, city: &str) -> String {
    match style {
        TravelStyle::Shopping => format!("Explore the vibrant shopping scene with local markets, boutiques, and unique finds in {}.", city),
        TravelStyle::Culture => format!("Start your day exploring this iconic {} landmark, perfect for morning visits when crowds are smaller.", city),
        TravelStyle::Foodie => format!("Discover authentic local flavors and culinary experiences in {}'s food scene.", city),
        TravelStyle::Adventure => format!("Embark on an exciting adventure activity that showcases {}'s natural beauty.", city),
        TravelStyle::Relaxation => format!("Enjoy a peaceful and rejuvenating experience in {}'s serene locations.", city),
        TravelStyle::Mixed => format!("Experience the diverse attractions and activities that {} has to offer.", city),
    }
}

/// Picks `items[day % len]`. Lists from the catalog are never empty.
fn cycle(items: &[String], day: u32) -> String {
    if items.is_empty() {
        return String::new();
    }
    items[day as usize % items.len()].clone()
}

/// Rule-based itinerary builder used when the model service cannot answer.
///
/// Everything except the per-day cost estimate is a pure function of the
/// inputs; the estimate draws from the caller's RNG so that tests can pin it.
pub struct ItinerarySynthesizer {
    catalog: ContentCatalog,
}

impl Default for ItinerarySynthesizer {
    fn default() -> Self {
        Self::new(ContentCatalog::new())
    }
}

impl ItinerarySynthesizer {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn synthesize_params<R: Rng + ?Sized>(&self, params: &ItineraryParams, rng: &mut R) -> TravelPlan {
        self.synthesize(
            &params.city,
            params.days,
            &params.budget_category,
            &params.currency,
            &params.travel_styles,
            rng,
        )
    }

    /// Build a complete plan. `days` below 1 is clamped to 1 so the result is never empty.
    pub fn synthesize<S, R>(
        &self,
        city: &str,
        days: u32,
        budget_category: &str,
        currency: &str,
        travel_styles: &[S],
        rng: &mut R,
    ) -> TravelPlan
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let days = days.max(1);
        let tier = BudgetTier::from_key_or_default(budget_category);
        let style = TravelStyle::primary(travel_styles);

        debug!(
            "Synthesizing {} day plan for {} ({}, primary style {})",
            days,
            city,
            tier.key(),
            style.key()
        );

        let content = self.catalog.lookup(city, style);
        let restaurants = self.catalog.restaurants(city);
        let neighborhoods = self.catalog.neighborhoods(city);
        let themes = themes_for(style);

        let daily_itinerary = (1..=days)
            .map(|day| {
                let theme = themes[(day as usize - 1) % themes.len()];
                let restaurant = cycle(&restaurants, day);

                DayPlan {
                    day,
                    theme: format!("{} in {}", theme, city),
                    summary: format!(
                        "Experience the {} of {} with carefully curated activities that showcase the city's unique character and charm.",
                        theme.to_lowercase(),
                        city
                    ),
                    activities: DayActivities {
                        morning: vec![Activity {
                            name: cycle(&content.attractions, day),
                            description: morning_description(style, city),
                            duration: "2-3 hours".to_string(),
                            cost: PricingService::morning_activity_cost(tier),
                            activity_type: activity_type_for(style),
                        }],
                        afternoon: vec![Activity {
                            name: format!("{} Walking Tour", cycle(&neighborhoods, day)),
                            description: "Discover the authentic local culture and hidden gems of this vibrant neighborhood.".to_string(),
                            duration: "3 hours".to_string(),
                            cost: PricingService::afternoon_tour_cost(tier),
                            activity_type: ActivityType::Culture,
                        }],
                        evening: vec![Activity {
                            name: restaurant.clone(),
                            description: "Enjoy an authentic dining experience at this highly-rated local restaurant.".to_string(),
                            duration: "2 hours".to_string(),
                            cost: PricingService::evening_dining_cost(tier),
                            activity_type: ActivityType::Dining,
                        }],
                    },
                    dining: DayDining {
                        breakfast: dining_option(
                            Meal::Breakfast,
                            tier,
                            "Local Café".to_string(),
                            "Local breakfast specialties",
                            "Start your day with authentic local breakfast favorites.",
                        ),
                        lunch: dining_option(
                            Meal::Lunch,
                            tier,
                            "Neighborhood Bistro".to_string(),
                            "Regional specialties",
                            "Enjoy traditional local cuisine in a charming setting.",
                        ),
                        dinner: dining_option(
                            Meal::Dinner,
                            tier,
                            restaurant,
                            "Fine dining",
                            "Experience exceptional dining at this acclaimed restaurant.",
                        ),
                    },
                    navigation: NAVIGATION_TIP.to_string(),
                    optional_activities: vec![Activity {
                        name: "Evening Entertainment".to_string(),
                        description: "Optional evening activity based on your interests.".to_string(),
                        duration: "2-3 hours".to_string(),
                        cost: PricingService::optional_activity_cost(tier),
                        activity_type: ActivityType::Entertainment,
                    }],
                    estimated_cost: PricingService::estimate_daily_cost(tier, &mut *rng),
                }
            })
            .collect();

        TravelPlan {
            city: city.to_string(),
            days,
            budget: PricingService::plan_budget(tier, days),
            currency: currency.to_string(),
            daily_itinerary,
        }
    }
}

fn dining_option(meal: Meal, tier: BudgetTier, name: String, cuisine: &str, description: &str) -> DiningOption {
    let price = PricingService::meal_price(meal, tier);
    DiningOption {
        name,
        cuisine: cuisine.to_string(),
        price_range: price.price_range.to_string(),
        estimated_cost: price.estimated_cost,
        description: description.to_string(),
    }
}
