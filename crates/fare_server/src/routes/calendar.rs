//! Fare-calendar endpoint
//!
//! Exposes month-calendar generation over HTTP. All input sanitisation
//! happens here: the pricing kernel only ever sees validated values.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use fare_core::types::{CabinClass, Date, Month, Route};
use fare_pricing::generate_month_calendar;

use super::AppState;

/// Query parameters of the calendar endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarParams {
    /// Origin location code.
    pub origin: String,
    /// Destination location code.
    pub destination: String,
    /// Requested month as `YYYY-MM`. Defaults to the current month.
    pub month: Option<String>,
    /// Cabin class. Defaults to economy.
    pub cabin: Option<String>,
}

/// Error body returned for malformed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

fn bad_request(error: &str, message: impl ToString) -> Response {
    let body = ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Build the calendar routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/calendar", get(calendar_handler))
}

/// GET /api/v1/calendar - Month fare calendar
///
/// Accepts `origin`, `destination`, optional `month` (`YYYY-MM`, defaulting
/// to the current month), and optional `cabin` (defaulting to economy).
/// Returns `{ "currency": ..., "days": [{ "date": ..., "price": ... }] }`.
async fn calendar_handler(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Response {
    let route = match Route::new(&params.origin, &params.destination) {
        Ok(route) => route,
        Err(e) => return bad_request("invalid_route", e),
    };

    let month = match &params.month {
        Some(raw) => match Month::parse(raw) {
            Ok(month) => month,
            Err(e) => return bad_request("invalid_month", e),
        },
        None => Month::containing(Date::today()),
    };

    let cabin = match &params.cabin {
        Some(raw) => match raw.parse::<CabinClass>() {
            Ok(cabin) => cabin,
            Err(e) => return bad_request("invalid_cabin", e),
        },
        None => CabinClass::Economy,
    };

    let calendar = generate_month_calendar(&route, month, cabin, Date::today(), &state.policy);

    tracing::debug!(
        route = %route,
        month = %month,
        cabin = %cabin,
        days = calendar.days.len(),
        "calendar generated"
    );

    (StatusCode::OK, Json(calendar)).into_response()
}
