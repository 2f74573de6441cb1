use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Restaurant in list form: its own fields only.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Restaurant with the pizzas it serves.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct RestaurantDetails {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaSummary>,
}

/// Pizza in list form: its own fields only.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    /// Free-form ingredient description
    pub ingredients: String,
}

/// Pizza with the restaurants serving it.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct PizzaDetails {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaSummary>,
}

/// Restaurant-pizza link embedded in a parent; carries ids but no back-references.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct RestaurantPizzaSummary {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

/// Restaurant-pizza link with both parents expanded.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct RestaurantPizzaDetails {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantSummary,
    pub pizza: PizzaSummary,
}

/// Body of `POST /restaurant_pizzas`.
///
/// Fields are kept as raw JSON so that an absent key, an explicit `null` and a
/// value of the wrong type can each be reported on their own. Only a JSON
/// object is accepted, see [`CreateRestaurantPizzaRequest::from_object`].
#[derive(Debug, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price between 1 and 30 inclusive
    #[schema(value_type = i32)]
    pub price: Option<Value>,
    #[schema(value_type = i32)]
    pub pizza_id: Option<Value>,
    #[schema(value_type = i32)]
    pub restaurant_id: Option<Value>,
}

impl CreateRestaurantPizzaRequest {
    /// A key that is present maps to `Some`, even when its value is `null`.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        Self {
            price: object.remove("price"),
            pizza_id: object.remove("pizza_id"),
            restaurant_id: object.remove("restaurant_id"),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorsResponse {
    /// One message per rejected field or reference
    pub errors: Vec<String>,
}
