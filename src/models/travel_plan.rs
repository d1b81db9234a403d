use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    pub city: String,
    pub days: u32,
    pub budget: f64,
    pub currency: String,
    pub daily_itinerary: Vec<DayPlan>,
}

impl TravelPlan {
    /// Sum of the per-day estimates. Differs from `budget`, which is nominal.
    pub fn total_estimated_cost(&self) -> f64 {
        self.daily_itinerary.iter().map(|d| d.estimated_cost).sum()
    }

    /// Structural checks serde cannot express: one entry per day, numbered
    /// from 1, with every time slot filled.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.daily_itinerary.is_empty() {
            return Err("Plan has no days".to_string());
        }
        if self.daily_itinerary.len() != self.days as usize {
            return Err(format!(
                "Plan declares {} days but lists {}",
                self.days,
                self.daily_itinerary.len()
            ));
        }
        for (index, day) in self.daily_itinerary.iter().enumerate() {
            if day.day as usize != index + 1 {
                return Err(format!("Day {} is numbered {}", index + 1, day.day));
            }
            let slots = &day.activities;
            if slots.morning.is_empty() || slots.afternoon.is_empty() || slots.evening.is_empty() {
                return Err(format!("Day {} has an empty time slot", day.day));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub theme: String,
    pub summary: String,
    pub activities: DayActivities,
    pub dining: DayDining,
    pub navigation: String,
    pub optional_activities: Vec<Activity>,
    pub estimated_cost: f64,
}

impl DayPlan {
    /// Morning, afternoon and evening activities in schedule order
    pub fn all_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities
            .morning
            .iter()
            .chain(self.activities.afternoon.iter())
            .chain(self.activities.evening.iter())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayActivities {
    pub morning: Vec<Activity>,
    pub afternoon: Vec<Activity>,
    pub evening: Vec<Activity>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayDining {
    pub breakfast: DiningOption,
    pub lunch: DiningOption,
    pub dinner: DiningOption,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub cost: f64,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    Attraction,
    Culture,
    HiddenGem,
    Relaxation,
    Dining,
    Shopping,
    Adventure,
    Wellness,
    Entertainment,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiningOption {
    pub name: String,
    pub cuisine: String,
    pub price_range: String,
    pub estimated_cost: f64,
    pub description: String,
}
