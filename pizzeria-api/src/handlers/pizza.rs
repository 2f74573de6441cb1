use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::get,
};
use pizzeria_store::repository;
use tracing::instrument;

use crate::error::ApiError;
use crate::models::*;
use crate::serializer::{serialize_pizza_details, serialize_pizza_summary};

use super::{AppState, path_id};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pizzas", get(list_pizzas))
        .route("/pizzas/{id}", get(get_pizza))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [PizzaSummary]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let pizzas = state.transaction(repository::list_pizzas).await?;

    Ok(Json(pizzas.into_iter().map(serialize_pizza_summary).collect()))
}

#[utoipa::path(
    get,
    path = "/pizzas/{id}",
    responses(
        (status = 200, description = "Pizza details", body = PizzaDetails),
        (status = 404, description = "Pizza not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Pizza ID")
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn get_pizza(
    State(state): State<AppState>,
    Path(pizza_id): Path<i64>,
) -> Result<Json<PizzaDetails>, ApiError> {
    let pizza_id = path_id(pizza_id, "Pizza")?;
    let (pizza, restaurant_pizzas) = state
        .transaction(move |conn| repository::find_pizza(conn, pizza_id))
        .await?;

    Ok(Json(serialize_pizza_details(pizza, restaurant_pizzas)))
}
