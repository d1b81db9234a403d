use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::models::preferences::{BudgetTier, TravelStyle};

#[derive(Serialize)]
struct StyleOption {
    key: &'static str,
    label: &'static str,
    description: &'static str,
    icon: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetOption {
    key: &'static str,
    label: &'static str,
    daily_amount: u32,
    description: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlannerOptions {
    travel_styles: Vec<StyleOption>,
    budget_categories: Vec<BudgetOption>,
}

/*
    /api/options
*/
pub async fn get_options() -> impl Responder {
    let options = PlannerOptions {
        travel_styles: TravelStyle::ALL
            .iter()
            .map(|style| StyleOption {
                key: style.key(),
                label: style.label(),
                description: style.description(),
                icon: style.icon(),
            })
            .collect(),
        budget_categories: BudgetTier::ALL
            .iter()
            .map(|tier| BudgetOption {
                key: tier.key(),
                label: tier.label(),
                daily_amount: tier.daily_amount(),
                description: tier.description(),
            })
            .collect(),
    };

    HttpResponse::Ok().json(options)
}
