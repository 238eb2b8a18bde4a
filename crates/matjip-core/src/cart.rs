//! # Cart Module
//!
//! The shopping cart: an ordered list of lines, one per distinct
//! dish+topping selection, each with its own quantity.
//!
//! ## Line Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  identity = (dish.id, selected toppings AS AN ORDERED SEQUENCE)     │
//! │                                                                     │
//! │  add(김치찌개, [치즈])          ──► line A, qty 1                   │
//! │  add(김치찌개, [치즈])          ──► line A, qty 2   (merged)        │
//! │  add(김치찌개, [치즈, 라면사리]) ──► line B, qty 1   (new line)      │
//! │  add(김치찌개, [라면사리, 치즈]) ──► line C, qty 1   (order differs) │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two selections with the same toppings in a different order are distinct
//! lines on purpose: the selection sequence is part of the identity, exactly
//! as the checkout wire format transmits it.
//!
//! ## Ownership
//! A cart has exactly one logical owner (the order page session), so the
//! type is plain mutable state with no interior mutability. Persistence is
//! the owner's job; see `matjip-store`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Won;
use crate::types::{Dish, OrderItem, Topping};

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct dish+topping selection in the cart, with its quantity.
///
/// The `dish` is a full snapshot, so the cart keeps rendering and pricing
/// consistently even if the catalog entry changes after the add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub dish: Dish,
    /// Always >= 1; a drop to zero removes the line instead.
    pub quantity: i64,
    pub selected_toppings: Vec<Topping>,
}

impl CartLine {
    /// Checks whether this line is the merge target for the given selection.
    ///
    /// Ordered structural equality over the topping sequence, not set
    /// equality.
    fn matches(&self, dish_id: i64, toppings: &[Topping]) -> bool {
        self.dish.id == dish_id && self.selected_toppings == toppings
    }

    /// Price of a single unit: base dish price plus every selected topping.
    pub fn unit_price(&self) -> Won {
        let toppings: Won = self.selected_toppings.iter().map(|t| t.price).sum();
        self.dish.price() + toppings
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> Won {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by (dish id, ordered topping sequence)
/// - Every line has quantity >= 1
/// - Insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Rebuilds a cart from a previously persisted line sequence.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Returns the lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one unit of a dish with the given topping selection.
    ///
    /// ## Behavior
    /// - A line with the same dish id and the same ordered topping sequence
    ///   already exists: its quantity goes up by 1
    /// - Otherwise: a new line with quantity 1 is appended
    ///
    /// No upper bound on quantity is enforced here; the page layer may
    /// impose one.
    pub fn add(&mut self, dish: &Dish, toppings: &[Topping]) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(dish.id, toppings))
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            dish: dish.clone(),
            quantity: 1,
            selected_toppings: toppings.to_vec(),
        });
    }

    /// Sets the quantity of the line at `index`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly like [`Cart::remove`]
    /// - Otherwise: the line's quantity becomes `quantity`
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return self.remove(index);
        }

        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CoreError::LineOutOfRange { index, len })?;
        line.quantity = quantity;
        Ok(())
    }

    /// Removes the line at `index`, shifting later lines down by one.
    pub fn remove(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.lines.len() {
            return Err(CoreError::LineOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        self.lines.remove(index);
        Ok(())
    }

    /// Total price over all lines: `Σ (dish price + Σ topping prices) × qty`.
    ///
    /// Pure function of current state. Never negative for a catalog of
    /// non-negative prices.
    pub fn total_price(&self) -> Won {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total unit count across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Maps the cart to the checkout payload.
    ///
    /// One [`OrderItem`] per line — quantity is not expanded into repeated
    /// entries and does not appear on the wire (see [`OrderItem`]).
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|line| OrderItem {
                name: line.dish.name().to_string(),
                toppings: line.selected_toppings.clone(),
            })
            .collect()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DishData, DishTags, Ingredient};

    fn dish(id: i64, name: &str, price: i64, toppings: &[(&str, i64)]) -> Dish {
        Dish {
            id,
            dish_data: DishData {
                name: name.to_string(),
                description: format!("{} 설명", name),
                image: "/images/home.png".to_string(),
                ingredients: vec![Ingredient {
                    name: "재료".to_string(),
                    from: "한국".to_string(),
                }],
                price: Won::from_won(price),
                toppings: toppings
                    .iter()
                    .map(|(n, p)| Topping {
                        name: n.to_string(),
                        price: Won::from_won(*p),
                    })
                    .collect(),
                tag: vec![DishTags::default()],
                kind: "찌개".to_string(),
            },
        }
    }

    fn topping(name: &str, price: i64) -> Topping {
        Topping {
            name: name.to_string(),
            price: Won::from_won(price),
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        let kimchi = dish(1, "김치찌개", 8000, &[("치즈", 1000)]);

        cart.add(&kimchi, &[topping("치즈", 1000)]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_same_selection_merges() {
        let mut cart = Cart::new();
        let kimchi = dish(1, "김치찌개", 8000, &[("치즈", 1000)]);
        let selection = [topping("치즈", 1000)];

        cart.add(&kimchi, &selection);
        cart.add(&kimchi, &selection);
        cart.add(&kimchi, &selection);

        // Idempotent merge: one line, quantity equals the call count.
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_different_topping_order_is_a_distinct_line() {
        let mut cart = Cart::new();
        let kimchi = dish(1, "김치찌개", 8000, &[]);

        cart.add(&kimchi, &[topping("치즈", 1000), topping("라면사리", 1500)]);
        cart.add(&kimchi, &[topping("라면사리", 1500), topping("치즈", 1000)]);

        // Ordered sequence equality, not set equality.
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_different_dish_is_a_distinct_line() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[]);
        cart.add(&dish(2, "불고기", 15000, &[]), &[]);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_total_price_formula() {
        let mut cart = Cart::new();
        let kimchi = dish(1, "김치찌개", 8000, &[("치즈", 1000)]);
        let selection = [topping("치즈", 1000)];

        cart.add(&kimchi, &selection);
        cart.add(&kimchi, &selection);

        // (8000 + 1000) × 2
        assert_eq!(cart.total_price(), Won::from_won(18_000));
    }

    #[test]
    fn test_total_price_mixed_lines() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[topping("치즈", 1000)]);
        cart.add(&dish(2, "불고기", 15000, &[]), &[]);
        cart.update_quantity(1, 2).unwrap();

        // 9000 × 1 + 15000 × 2
        assert_eq!(cart.total_price(), Won::from_won(39_000));
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[]);

        cart.update_quantity(0, 5).unwrap();
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_removes_and_reindexes() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[]);
        cart.add(&dish(2, "불고기", 15000, &[]), &[]);
        cart.add(&dish(3, "된장찌개", 7000, &[]), &[]);

        cart.update_quantity(1, 0).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].dish.id, 1);
        // The line after the removed one shifted down.
        assert_eq!(cart.lines()[1].dish.id, 3);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[]);

        cart.update_quantity(0, -1).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[]);

        let err = cart.remove(3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::LineOutOfRange { index: 3, len: 1 }
        ));
    }

    #[test]
    fn test_order_items_drop_quantity() {
        let mut cart = Cart::new();
        let kimchi = dish(1, "김치찌개", 8000, &[]);
        let selection = [topping("치즈", 1000)];

        cart.add(&kimchi, &selection);
        cart.add(&kimchi, &selection);

        let items = cart.order_items();
        // One payload entry for the line, even at quantity 2.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "김치찌개");
        assert_eq!(items[0].toppings, selection);
    }

    #[test]
    fn test_persisted_form_round_trips() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[topping("치즈", 1000)]);
        cart.add(&dish(2, "불고기", 15000, &[]), &[]);
        cart.update_quantity(0, 4).unwrap();

        let json = serde_json::to_string(cart.lines()).unwrap();
        let lines: Vec<CartLine> = serde_json::from_str(&json).unwrap();
        let restored = Cart::from_lines(lines);

        assert_eq!(restored, cart);
    }

    #[test]
    fn test_persisted_wire_shape() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[topping("치즈", 1000)]);

        let json = serde_json::to_value(cart.lines()).unwrap();
        assert!(json[0].get("selectedToppings").is_some());
        assert_eq!(json[0]["quantity"], 1);
        assert_eq!(json[0]["dish"]["dishData"]["price"], 8000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&dish(1, "김치찌개", 8000, &[]), &[]);
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Won::zero());
    }
}
