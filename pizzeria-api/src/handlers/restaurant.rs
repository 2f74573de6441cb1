use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use pizzeria_store::repository;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::models::*;
use crate::serializer::{serialize_restaurant_details, serialize_restaurant_summary};

use super::{AppState, path_id};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = [RestaurantSummary]),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let restaurants = state.transaction(repository::list_restaurants).await?;

    Ok(Json(
        restaurants
            .into_iter()
            .map(serialize_restaurant_summary)
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant details", body = RestaurantDetails),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> Result<Json<RestaurantDetails>, ApiError> {
    let restaurant_id = path_id(restaurant_id, "Restaurant")?;
    let (restaurant, restaurant_pizzas) = state
        .transaction(move |conn| repository::find_restaurant(conn, restaurant_id))
        .await?;

    Ok(Json(serialize_restaurant_details(
        restaurant,
        restaurant_pizzas,
    )))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its menu deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let restaurant_id = path_id(restaurant_id, "Restaurant")?;
    state
        .transaction(move |conn| repository::delete_restaurant(conn, restaurant_id))
        .await?;

    info!(restaurant_id, "restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}
