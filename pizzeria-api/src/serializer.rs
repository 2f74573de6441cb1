//! Conversion of stored records into response payloads.
//!
//! Restaurants and pizzas point at their links and links point back at both
//! parents. Every payload expands relations in one direction only: parents
//! embed links as bare ids, and links embed parents in list form.

use pizzeria_store::models;

use crate::models::{
    PizzaDetails, PizzaSummary, RestaurantDetails, RestaurantPizzaDetails,
    RestaurantPizzaSummary, RestaurantSummary,
};

pub fn serialize_restaurant_summary(restaurant: models::Restaurant) -> RestaurantSummary {
    RestaurantSummary {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
    }
}

pub fn serialize_restaurant_details(
    restaurant: models::Restaurant,
    restaurant_pizzas: Vec<models::RestaurantPizza>,
) -> RestaurantDetails {
    RestaurantDetails {
        id: restaurant.id,
        name: restaurant.name,
        address: restaurant.address,
        restaurant_pizzas: restaurant_pizzas
            .into_iter()
            .map(serialize_restaurant_pizza_summary)
            .collect(),
    }
}

pub fn serialize_pizza_summary(pizza: models::Pizza) -> PizzaSummary {
    PizzaSummary {
        id: pizza.id,
        name: pizza.name,
        ingredients: pizza.ingredients,
    }
}

pub fn serialize_pizza_details(
    pizza: models::Pizza,
    restaurant_pizzas: Vec<models::RestaurantPizza>,
) -> PizzaDetails {
    PizzaDetails {
        id: pizza.id,
        name: pizza.name,
        ingredients: pizza.ingredients,
        restaurant_pizzas: restaurant_pizzas
            .into_iter()
            .map(serialize_restaurant_pizza_summary)
            .collect(),
    }
}

pub fn serialize_restaurant_pizza_summary(
    restaurant_pizza: models::RestaurantPizza,
) -> RestaurantPizzaSummary {
    RestaurantPizzaSummary {
        id: restaurant_pizza.id,
        price: restaurant_pizza.price,
        restaurant_id: restaurant_pizza.restaurant_id,
        pizza_id: restaurant_pizza.pizza_id,
    }
}

pub fn serialize_restaurant_pizza_details(
    restaurant_pizza: models::RestaurantPizza,
    restaurant: models::Restaurant,
    pizza: models::Pizza,
) -> RestaurantPizzaDetails {
    RestaurantPizzaDetails {
        id: restaurant_pizza.id,
        price: restaurant_pizza.price,
        restaurant_id: restaurant_pizza.restaurant_id,
        pizza_id: restaurant_pizza.pizza_id,
        restaurant: serialize_restaurant_summary(restaurant),
        pizza: serialize_pizza_summary(pizza),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn restaurant() -> models::Restaurant {
        models::Restaurant {
            id: 1,
            name: "Sanjay's Pizza".to_string(),
            address: "address2".to_string(),
        }
    }

    fn pizza() -> models::Pizza {
        models::Pizza {
            id: 2,
            name: "Geri".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".to_string(),
        }
    }

    fn link() -> models::RestaurantPizza {
        models::RestaurantPizza {
            id: 3,
            price: 4,
            restaurant_id: 1,
            pizza_id: 2,
        }
    }

    #[test]
    fn test_restaurant_details_embeds_links_without_back_references() {
        let value =
            serde_json::to_value(serialize_restaurant_details(restaurant(), vec![link()]))
                .unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Sanjay's Pizza",
                "address": "address2",
                "restaurant_pizzas": [
                    {"id": 3, "price": 4, "restaurant_id": 1, "pizza_id": 2}
                ]
            })
        );
    }

    #[test]
    fn test_pizza_details_embeds_links_without_back_references() {
        let value = serde_json::to_value(serialize_pizza_details(pizza(), vec![link()])).unwrap();

        assert_eq!(value["restaurant_pizzas"][0]["pizza_id"], 2);
        assert!(value["restaurant_pizzas"][0].get("pizza").is_none());
        assert!(value["restaurant_pizzas"][0].get("restaurant").is_none());
    }

    #[test]
    fn test_restaurant_pizza_details_embeds_parents_without_links() {
        let value = serde_json::to_value(serialize_restaurant_pizza_details(
            link(),
            restaurant(),
            pizza(),
        ))
        .unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "price": 4,
                "restaurant_id": 1,
                "pizza_id": 2,
                "restaurant": {"id": 1, "name": "Sanjay's Pizza", "address": "address2"},
                "pizza": {
                    "id": 2,
                    "name": "Geri",
                    "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"
                }
            })
        );
    }

    #[test]
    fn test_summaries_omit_links() {
        let value = serde_json::to_value(serialize_pizza_summary(pizza())).unwrap();
        assert!(value.get("restaurant_pizzas").is_none());

        let value = serde_json::to_value(serialize_restaurant_summary(restaurant())).unwrap();
        assert!(value.get("restaurant_pizzas").is_none());
    }
}
