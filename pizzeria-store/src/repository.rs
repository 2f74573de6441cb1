//! Store operations. Each function works on a connection the caller has
//! already placed inside a transaction (see [`crate::Database::transaction`]).

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error::DatabaseError};
use diesel::SqliteConnection;
use tracing::info;

use crate::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};
use crate::StoreError;

pub fn list_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>, StoreError> {
    Ok(restaurants::table
        .order(restaurants::id)
        .select(Restaurant::as_select())
        .load(conn)?)
}

pub fn list_pizzas(conn: &mut SqliteConnection) -> Result<Vec<Pizza>, StoreError> {
    Ok(pizzas::table
        .order(pizzas::id)
        .select(Pizza::as_select())
        .load(conn)?)
}

fn get_restaurant(conn: &mut SqliteConnection, id: i32) -> Result<Restaurant, StoreError> {
    restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| StoreError::not_found("Restaurant", id))
}

fn get_pizza(conn: &mut SqliteConnection, id: i32) -> Result<Pizza, StoreError> {
    pizzas::table
        .find(id)
        .select(Pizza::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| StoreError::not_found("Pizza", id))
}

pub fn find_restaurant(
    conn: &mut SqliteConnection,
    id: i32,
) -> Result<(Restaurant, Vec<RestaurantPizza>), StoreError> {
    let restaurant = get_restaurant(conn, id)?;
    let restaurant_pizzas = RestaurantPizza::belonging_to(&restaurant)
        .order(restaurant_pizzas::id)
        .select(RestaurantPizza::as_select())
        .load(conn)?;
    Ok((restaurant, restaurant_pizzas))
}

pub fn find_pizza(
    conn: &mut SqliteConnection,
    id: i32,
) -> Result<(Pizza, Vec<RestaurantPizza>), StoreError> {
    let pizza = get_pizza(conn, id)?;
    let restaurant_pizzas = RestaurantPizza::belonging_to(&pizza)
        .order(restaurant_pizzas::id)
        .select(RestaurantPizza::as_select())
        .load(conn)?;
    Ok((pizza, restaurant_pizzas))
}

pub fn find_restaurant_pizza(
    conn: &mut SqliteConnection,
    id: i32,
) -> Result<(RestaurantPizza, Restaurant, Pizza), StoreError> {
    let (restaurant_pizza, restaurant, pizza) = restaurant_pizzas::table
        .inner_join(restaurants::table)
        .inner_join(pizzas::table)
        .filter(restaurant_pizzas::id.eq(id))
        .select((
            RestaurantPizza::as_select(),
            Restaurant::as_select(),
            Pizza::as_select(),
        ))
        .first(conn)
        .optional()?
        .ok_or_else(|| StoreError::not_found("RestaurantPizza", id))?;
    Ok((restaurant_pizza, restaurant, pizza))
}

pub fn create_restaurant(
    conn: &mut SqliteConnection,
    new_restaurant: NewRestaurant<'_>,
) -> Result<Restaurant, StoreError> {
    Ok(diesel::insert_into(restaurants::table)
        .values(&new_restaurant)
        .returning(Restaurant::as_returning())
        .get_result(conn)?)
}

pub fn create_pizza(
    conn: &mut SqliteConnection,
    new_pizza: NewPizza<'_>,
) -> Result<Pizza, StoreError> {
    Ok(diesel::insert_into(pizzas::table)
        .values(&new_pizza)
        .returning(Pizza::as_returning())
        .get_result(conn)?)
}

/// Links a pizza to a restaurant at an already validated price.
///
/// Both referenced rows must exist; otherwise nothing is written and an
/// integrity error naming the missing row is returned.
pub fn create_restaurant_pizza(
    conn: &mut SqliteConnection,
    new_restaurant_pizza: NewRestaurantPizza,
) -> Result<(RestaurantPizza, Restaurant, Pizza), StoreError> {
    let restaurant = get_restaurant(conn, new_restaurant_pizza.restaurant_id()).map_err(
        |e| match e {
            StoreError::NotFound { id, .. } => {
                StoreError::Integrity(format!("restaurant {id} does not exist"))
            }
            e => e,
        },
    )?;
    let pizza = get_pizza(conn, new_restaurant_pizza.pizza_id()).map_err(|e| match e {
        StoreError::NotFound { id, .. } => {
            StoreError::Integrity(format!("pizza {id} does not exist"))
        }
        e => e,
    })?;

    let restaurant_pizza = diesel::insert_into(restaurant_pizzas::table)
        .values(&new_restaurant_pizza)
        .returning(RestaurantPizza::as_returning())
        .get_result(conn)
        .map_err(|e| match e {
            DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                StoreError::Integrity(info.message().to_string())
            }
            e => StoreError::Database(e),
        })?;

    info!(
        id = restaurant_pizza.id,
        restaurant_id = restaurant.id,
        pizza_id = pizza.id,
        price = restaurant_pizza.price,
        "created restaurant pizza"
    );
    Ok((restaurant_pizza, restaurant, pizza))
}

/// Deletes a restaurant together with every restaurant-pizza row it owns.
pub fn delete_restaurant(conn: &mut SqliteConnection, id: i32) -> Result<(), StoreError> {
    let restaurant = get_restaurant(conn, id)?;
    let links = diesel::delete(RestaurantPizza::belonging_to(&restaurant)).execute(conn)?;
    diesel::delete(&restaurant).execute(conn)?;
    info!(id, links, "deleted restaurant");
    Ok(())
}

/// Deletes a pizza together with every restaurant-pizza row it owns.
pub fn delete_pizza(conn: &mut SqliteConnection, id: i32) -> Result<(), StoreError> {
    let pizza = get_pizza(conn, id)?;
    let links = diesel::delete(RestaurantPizza::belonging_to(&pizza)).execute(conn)?;
    diesel::delete(&pizza).execute(conn)?;
    info!(id, links, "deleted pizza");
    Ok(())
}

/// Removes every row from all three tables, children first.
pub fn clear(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    diesel::delete(restaurant_pizzas::table).execute(conn)?;
    diesel::delete(pizzas::table).execute(conn)?;
    diesel::delete(restaurants::table).execute(conn)?;
    Ok(())
}
