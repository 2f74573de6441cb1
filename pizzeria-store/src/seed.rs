use tracing::info;

use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::{repository, Database, StoreError};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

// (restaurant index, pizza index, price)
const MENU: [(usize, usize, i64); 4] = [(0, 0, 1), (1, 1, 4), (2, 2, 5), (0, 2, 12)];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replaces the whole store content with a small sample menu.
pub fn seed(db: &Database) -> Result<SeedSummary, StoreError> {
    db.transaction(|conn| {
        repository::clear(conn)?;

        let restaurants = RESTAURANTS
            .iter()
            .map(|&(name, address)| {
                repository::create_restaurant(conn, NewRestaurant { name, address })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let pizzas = PIZZAS
            .iter()
            .map(|&(name, ingredients)| {
                repository::create_pizza(conn, NewPizza { name, ingredients })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for &(restaurant, pizza, price) in MENU.iter() {
            let new_restaurant_pizza = NewRestaurantPizza::new(
                Some(price),
                restaurants[restaurant].id,
                pizzas[pizza].id,
            )?;
            repository::create_restaurant_pizza(conn, new_restaurant_pizza)?;
        }

        let summary = SeedSummary {
            restaurants: restaurants.len(),
            pizzas: pizzas.len(),
            restaurant_pizzas: MENU.len(),
        };
        info!(?summary, "seeded store");
        Ok(summary)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_database;

    #[test]
    fn test_seed_is_repeatable() {
        let test_db = test_database();

        seed(&test_db.db).unwrap();
        let summary = seed(&test_db.db).unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                restaurants: 3,
                pizzas: 3,
                restaurant_pizzas: 4,
            }
        );

        let conn = &mut test_db.db.establish_connection().unwrap();
        let restaurants = repository::list_restaurants(conn).unwrap();
        assert_eq!(restaurants.len(), 3);
        assert_eq!(restaurants[0].name, "Karen's Pizza Shack");
        assert_eq!(repository::list_pizzas(conn).unwrap().len(), 3);

        let (_, links) = repository::find_restaurant(conn, restaurants[0].id).unwrap();
        assert_eq!(links.len(), 2);
    }
}
