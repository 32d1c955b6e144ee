use actix_web::{get, web, Responder};

use crate::modules::site::application::domain::LandingData;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Landing data as JSON
///
/// The profile and every visible record, in display order. Public; falls
/// back to empty data when the store is unavailable.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "site",
    responses((status = 200, description = "Landing data", body = LandingData))
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.landing.execute().await)
}
