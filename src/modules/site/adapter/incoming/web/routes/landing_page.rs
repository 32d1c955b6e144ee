use actix_web::{get, web, Responder};

use crate::modules::site::adapter::incoming::web::render::landing_page;
use crate::modules::site::application::domain::CategoryFilter;
use crate::shared::html::html_response;
use crate::AppState;

/// Raw pairs so repeated or unexpected parameters never reject the page.
type LandingQuery = web::Query<Vec<(String, String)>>;

fn category(query: &[(String, String)]) -> Option<&str> {
    query
        .iter()
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value.as_str())
}

#[get("/")]
pub async fn landing_page_handler(query: LandingQuery, data: web::Data<AppState>) -> impl Responder {
    let landing = data.landing.execute().await;
    let filter = CategoryFilter::parse(category(&query));

    html_response(landing_page(&landing, filter))
}
