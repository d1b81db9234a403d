use rand::Rng;

use crate::models::preferences::BudgetTier;

/// Meal slots in the order they are served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

/// One cell of the per-meal, per-tier dining table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealPrice {
    pub price_range: &'static str,
    pub estimated_cost: f64,
}

// Rows: breakfast, lunch, dinner. Columns: budget, mid-range, luxury, ultra-luxury.
// Ultra-luxury dines at luxury prices.
const DINING_TABLE: [[MealPrice; 4]; 3] = [
    [
        MealPrice { price_range: "$8-12", estimated_cost: 10.0 },
        MealPrice { price_range: "$15-25", estimated_cost: 20.0 },
        MealPrice { price_range: "$30-50", estimated_cost: 40.0 },
        MealPrice { price_range: "$30-50", estimated_cost: 40.0 },
    ],
    [
        MealPrice { price_range: "$12-18", estimated_cost: 15.0 },
        MealPrice { price_range: "$20-35", estimated_cost: 30.0 },
        MealPrice { price_range: "$50-80", estimated_cost: 65.0 },
        MealPrice { price_range: "$50-80", estimated_cost: 65.0 },
    ],
    [
        MealPrice { price_range: "$20-30", estimated_cost: 25.0 },
        MealPrice { price_range: "$40-70", estimated_cost: 55.0 },
        MealPrice { price_range: "$100-200", estimated_cost: 150.0 },
        MealPrice { price_range: "$100-200", estimated_cost: 150.0 },
    ],
];

/// Three-level step table: budget, mid-range, then luxury and above.
type StepCosts = [f64; 3];

const MORNING_ACTIVITY: StepCosts = [15.0, 25.0, 50.0];
const AFTERNOON_TOUR: StepCosts = [0.0, 20.0, 80.0];
const EVENING_DINING: StepCosts = [25.0, 45.0, 120.0];
const OPTIONAL_ENTERTAINMENT: StepCosts = [20.0, 40.0, 100.0];

pub struct PricingService;

impl PricingService {
    fn step(tier: BudgetTier, costs: &StepCosts) -> f64 {
        match tier {
            BudgetTier::Budget => costs[0],
            BudgetTier::MidRange => costs[1],
            BudgetTier::Luxury | BudgetTier::UltraLuxury => costs[2],
        }
    }

    pub fn morning_activity_cost(tier: BudgetTier) -> f64 {
        Self::step(tier, &MORNING_ACTIVITY)
    }

    pub fn afternoon_tour_cost(tier: BudgetTier) -> f64 {
        Self::step(tier, &AFTERNOON_TOUR)
    }

    pub fn evening_dining_cost(tier: BudgetTier) -> f64 {
        Self::step(tier, &EVENING_DINING)
    }

    pub fn optional_activity_cost(tier: BudgetTier) -> f64 {
        Self::step(tier, &OPTIONAL_ENTERTAINMENT)
    }

    pub fn meal_price(meal: Meal, tier: BudgetTier) -> MealPrice {
        let row = match meal {
            Meal::Breakfast => 0,
            Meal::Lunch => 1,
            Meal::Dinner => 2,
        };
        let column = match tier {
            BudgetTier::Budget => 0,
            BudgetTier::MidRange => 1,
            BudgetTier::Luxury => 2,
            BudgetTier::UltraLuxury => 3,
        };
        DINING_TABLE[row][column]
    }

    /// Nominal plan budget: daily amount times trip length
    pub fn plan_budget(tier: BudgetTier, days: u32) -> f64 {
        f64::from(tier.daily_amount()) * f64::from(days)
    }

    /// Day estimate jittered uniformly within [0.9, 1.1) of the daily amount, then rounded.
    pub fn estimate_daily_cost<R: Rng + ?Sized>(tier: BudgetTier, rng: &mut R) -> f64 {
        let daily = f64::from(tier.daily_amount());
        let jitter: f64 = rng.gen();
        (daily * 0.9 + jitter * daily * 0.2).round()
    }
}
