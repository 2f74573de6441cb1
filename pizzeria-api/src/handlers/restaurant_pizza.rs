use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::post,
};
use pizzeria_store::{models::NewRestaurantPizza, repository};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::models::*;
use crate::serializer::serialize_restaurant_pizza_details;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Pizza added to the restaurant's menu", body = RestaurantPizzaDetails),
        (status = 400, description = "Missing field, invalid price or unknown restaurant/pizza", body = ApiErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state, payload))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaDetails>), ApiError> {
    let new_restaurant_pizza = payload
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
        .and_then(|Json(object)| {
            parse_new_restaurant_pizza(CreateRestaurantPizzaRequest::from_object(object))
        })
        .inspect_err(|e| warn!(error = %e, "rejected restaurant pizza"))?;

    let (restaurant_pizza, restaurant, pizza) = state
        .transaction(move |conn| repository::create_restaurant_pizza(conn, new_restaurant_pizza))
        .await
        .inspect_err(|e| warn!(error = %e, "rejected restaurant pizza"))?;

    info!(id = restaurant_pizza.id, "restaurant pizza created");
    Ok((
        StatusCode::CREATED,
        Json(serialize_restaurant_pizza_details(
            restaurant_pizza,
            restaurant,
            pizza,
        )),
    ))
}

fn parse_new_restaurant_pizza(
    payload: CreateRestaurantPizzaRequest,
) -> Result<NewRestaurantPizza, ApiError> {
    let (price, pizza_id, restaurant_id) =
        match (payload.price, payload.pizza_id, payload.restaurant_id) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) => (price, pizza_id, restaurant_id),
            (price, pizza_id, restaurant_id) => {
                let missing = [
                    ("price", price.is_none()),
                    ("pizza_id", pizza_id.is_none()),
                    ("restaurant_id", restaurant_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();
                return Err(ApiError::MissingFields(missing));
            }
        };

    let price = match price {
        Value::Null => None,
        price => Some(
            price
                .as_i64()
                .ok_or_else(|| ApiError::BadRequest("price must be an integer".to_string()))?,
        ),
    };
    let restaurant_id = parse_id("restaurant", restaurant_id)?;
    let pizza_id = parse_id("pizza", pizza_id)?;

    Ok(NewRestaurantPizza::new(price, restaurant_id, pizza_id)?)
}

fn parse_id(entity: &str, value: Value) -> Result<i32, ApiError> {
    let id = value
        .as_i64()
        .ok_or_else(|| ApiError::BadRequest(format!("{entity}_id must be an integer")))?;
    // ids beyond the column range cannot reference a stored row
    i32::try_from(id).map_err(|_| ApiError::Integrity(format!("{entity} {id} does not exist")))
}
