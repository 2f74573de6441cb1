pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;


// Re-export routers for easier importing
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use axum::{Router, response::Html, routing::get};
use pizzeria_store::{Database, SqliteConnection, StoreError};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Runs `f` in one store transaction on the blocking thread pool.
    async fn transaction<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || db.transaction(f))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
            .map_err(ApiError::from)
    }
}

/// Narrows a path id to the store's id column.
///
/// Any integer is a well-formed id; one that does not fit the column cannot
/// name a stored row and is reported as not found.
fn path_id(id: i64, entity: &'static str) -> Result<i32, ApiError> {
    i32::try_from(id).map_err(|_| ApiError::NotFound(entity))
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        pizza::get_pizza,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::models::RestaurantSummary,
            crate::models::RestaurantDetails,
            crate::models::PizzaSummary,
            crate::models::PizzaDetails,
            crate::models::RestaurantPizzaSummary,
            crate::models::RestaurantPizzaDetails,
            crate::models::CreateRestaurantPizzaRequest,
            crate::models::ApiErrorResponse,
            crate::models::ApiErrorsResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Restaurant menu endpoints")
    ),
    info(
        title = "Pizzeria API",
        description = "Restaurants, pizzas and the prices restaurants charge for them",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
