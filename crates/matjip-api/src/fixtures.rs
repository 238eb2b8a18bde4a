//! # Fixture Seed Data
//!
//! The demo catalog used by fixture gateways when no backend is reachable.

use matjip_core::money::Won;
use matjip_core::types::{Dish, DishData, DishTags, Ingredient, Topping};

fn topping(name: &str, price: i64) -> Topping {
    Topping {
        name: name.to_string(),
        price: Won::from_won(price),
    }
}

fn ingredient(name: &str, from: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        from: from.to_string(),
    }
}

/// The three-dish demo menu.
pub fn seed_dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: 1,
            dish_data: DishData {
                name: "김치찌개".to_string(),
                description: "맛있는 김치찌개입니다".to_string(),
                image: "/images/home.png".to_string(),
                ingredients: vec![ingredient("김치", "한국"), ingredient("돼지고기", "한국")],
                price: Won::from_won(8000),
                toppings: vec![topping("치즈", 1000), topping("라면사리", 1500)],
                tag: vec![DishTags {
                    hot: true,
                    new: false,
                    picked: true,
                }],
                kind: "찌개".to_string(),
            },
        },
        Dish {
            id: 2,
            dish_data: DishData {
                name: "불고기".to_string(),
                description: "달콤한 불고기".to_string(),
                image: "/images/home.png".to_string(),
                ingredients: vec![ingredient("소고기", "한국")],
                price: Won::from_won(15000),
                toppings: vec![topping("버섯", 2000)],
                tag: vec![DishTags {
                    hot: false,
                    new: true,
                    picked: false,
                }],
                kind: "고기".to_string(),
            },
        },
        Dish {
            id: 3,
            dish_data: DishData {
                name: "된장찌개".to_string(),
                description: "구수한 된장찌개".to_string(),
                image: "/images/home.png".to_string(),
                ingredients: vec![ingredient("된장", "한국"), ingredient("두부", "한국")],
                price: Won::from_won(7000),
                toppings: vec![topping("청양고추", 500)],
                tag: vec![DishTags::default()],
                kind: "찌개".to_string(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let dishes = seed_dishes();
        assert_eq!(dishes.len(), 3);
        assert_eq!(dishes[0].name(), "김치찌개");
        assert_eq!(dishes[1].price(), Won::from_won(15000));
        assert!(dishes.iter().all(|d| !d.dish_data.tag.is_empty()));
    }
}
