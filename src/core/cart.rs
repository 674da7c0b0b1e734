use crate::domain::{CartItem, Product, ProductId};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered cart contents. Every transition returns a new value so the caller
/// can persist the finished sequence before committing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw entries, dropping zero amounts and repeated ids.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut seen = HashSet::new();
        let total = items.len();
        let items: Vec<CartItem> = items
            .into_iter()
            .filter(|item| item.amount > 0 && seen.insert(item.id()))
            .collect();

        if items.len() != total {
            tracing::warn!(
                dropped = total - items.len(),
                "Discarded cart entries with zero amount or duplicate id"
            );
        }

        Self { items }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let items: Vec<CartItem> = serde_json::from_str(raw)?;
        Ok(Self::from_items(items))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Total number of units across all entries.
    pub fn total_amount(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn with_appended(&self, product: Product) -> Self {
        debug_assert!(!self.contains(product.id));
        let mut items = self.items.clone();
        items.push(CartItem::new(product, 1));
        Self { items }
    }

    pub fn with_amount(&self, id: ProductId, amount: u32) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == id {
                    CartItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    pub fn without(&self, id: ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId) -> Product {
        Product {
            id,
            title: format!("Tênis {}", id),
            price: 179.9,
            image: format!("https://cdn.example.com/{}.jpg", id),
            ..Product::default()
        }
    }

    fn cart_of(entries: &[(ProductId, u32)]) -> Cart {
        Cart::from_items(
            entries
                .iter()
                .map(|(id, amount)| CartItem::new(product(*id), *amount))
                .collect(),
        )
    }

    fn ids_and_amounts(cart: &Cart) -> Vec<(ProductId, u32)> {
        cart.items().iter().map(|i| (i.id(), i.amount)).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let cart = cart_of(&[(3, 1)]).with_appended(product(1));
        assert_eq!(ids_and_amounts(&cart), vec![(3, 1), (1, 1)]);
    }

    #[test]
    fn test_with_amount_replaces_only_target() {
        let cart = cart_of(&[(1, 1), (2, 4), (3, 2)]).with_amount(2, 7);
        assert_eq!(ids_and_amounts(&cart), vec![(1, 1), (2, 7), (3, 2)]);
    }

    #[test]
    fn test_without_preserves_remaining_order() {
        let cart = cart_of(&[(1, 1), (2, 1), (3, 5)]).without(2);
        assert_eq!(ids_and_amounts(&cart), vec![(1, 1), (3, 5)]);
    }

    #[test]
    fn test_transitions_do_not_touch_original() {
        let original = cart_of(&[(1, 1)]);
        let _ = original.with_amount(1, 9);
        let _ = original.without(1);
        assert_eq!(ids_and_amounts(&original), vec![(1, 1)]);
    }

    #[test]
    fn test_from_items_drops_zero_amounts_and_duplicates() {
        let cart = cart_of(&[(1, 2), (2, 0), (1, 5), (3, 1)]);
        assert_eq!(ids_and_amounts(&cart), vec![(1, 2), (3, 1)]);
    }

    #[test]
    fn test_json_is_flat_product_with_amount() {
        let cart = cart_of(&[(1, 2)]);
        let json: serde_json::Value = serde_json::from_str(&cart.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["amount"], 2);
        assert_eq!(json[0]["title"], "Tênis 1");
        assert!(json[0].get("product").is_none());
    }

    #[test]
    fn test_json_round_trip_preserves_sequence() {
        let cart = cart_of(&[(5, 1), (2, 3), (9, 2)]);
        let restored = Cart::from_json(&cart.to_json().unwrap()).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Cart::from_json("not json").is_err());
        assert!(Cart::from_json(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(cart_of(&[(1, 2), (2, 3)]).total_amount(), 5);
        assert_eq!(Cart::new().total_amount(), 0);
    }
}
