use crate::domain::product::model::Product;

/// Products chosen for the order. Holds no duplicates: membership is decided
/// by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `product` and returns true, unless it is already present.
    pub fn add_item(&mut self, product: Product) -> bool {
        if self.contains(&product) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Removes the first entry matching `product`. Returns false when absent.
    pub fn remove_item(&mut self, product: &Product) -> bool {
        match self.items.iter().position(|p| p == product) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of items in the cart.
    ///
    /// This is a count, not a price: the order amount is [`Cart::total_cost`].
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Sum of the costs of priced items. Priceless items add nothing.
    pub fn total_cost(&self) -> u64 {
        self.items.iter().filter_map(Product::cost).sum()
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.items.contains(product)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{product, product_named};
    use proptest::prelude::*;

    #[test]
    fn should_add_product_not_yet_in_cart() {
        let mut cart = Cart::new();
        let a = product("A", Some(10));

        assert!(cart.add_item(a.clone()));
        assert!(cart.contains(&a));
        assert_eq!(cart.items(), &[a]);
    }

    #[test]
    fn should_reject_duplicate_and_leave_cart_unchanged() {
        let mut cart = Cart::new();
        let a = product("A", Some(10));
        cart.add_item(a.clone());
        let before = cart.clone();

        assert!(!cart.add_item(a));
        assert_eq!(cart, before);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn should_reject_distinct_instance_with_same_id() {
        let mut cart = Cart::new();
        cart.add_item(product_named("A", "Бэкенд-антистресс", Some(1000)));

        let same_id_other_instance = product_named("A", "Бэкенд-антистресс", Some(1000));

        assert!(!cart.add_item(same_id_other_instance));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn should_accept_structurally_identical_product_with_other_id() {
        let mut cart = Cart::new();
        cart.add_item(product_named("A", "Фреймворк куки судьбы", Some(2500)));

        assert!(cart.add_item(product_named("B", "Фреймворк куки судьбы", Some(2500))));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn should_remove_present_product_once() {
        let mut cart = Cart::new();
        let a = product("A", Some(10));
        let b = product("B", Some(20));
        cart.add_item(a.clone());
        cart.add_item(b.clone());

        assert!(cart.remove_item(&a));
        assert!(!cart.contains(&a));
        assert_eq!(cart.items(), &[b]);
        assert!(!cart.remove_item(&a));
    }

    #[test]
    fn should_return_false_when_removing_absent_product() {
        let mut cart = Cart::new();

        assert!(!cart.remove_item(&product("A", Some(10))));
        assert!(cart.is_empty());
    }

    #[test]
    fn should_report_item_count_as_total_not_summed_cost() {
        // Observed behavior: total() counts items. The amount lives in total_cost().
        let mut cart = Cart::new();
        cart.add_item(product("A", Some(10)));
        cart.add_item(product("B", Some(20)));

        assert_eq!(cart.total(), 2);
        assert_ne!(cart.total() as u64, 30);
        assert_eq!(cart.total_cost(), 30);
    }

    #[test]
    fn should_ignore_priceless_items_in_total_cost() {
        let mut cart = Cart::new();
        cart.add_item(product("A", Some(750)));
        cart.add_item(product("B", None));

        assert_eq!(cart.total(), 2);
        assert_eq!(cart.total_cost(), 750);
    }

    #[test]
    fn should_empty_cart_on_clear() {
        let mut cart = Cart::new();
        cart.add_item(product("A", Some(10)));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: whatever ids are added, the cart never holds two entries
        /// with the same id and add_item reports exactly the first insertion.
        #[test]
        fn never_holds_duplicates(ids in prop::collection::vec(0u8..8, 0..32)) {
            let mut cart = Cart::new();
            let mut seen = std::collections::HashSet::new();

            for id in ids {
                let added = cart.add_item(product(&id.to_string(), Some(u64::from(id))));
                prop_assert_eq!(added, seen.insert(id));
            }

            prop_assert_eq!(cart.len(), seen.len());
        }

        /// Property: removing every added product empties the cart and a second
        /// removal of each reports false.
        #[test]
        fn removes_everything_it_added(ids in prop::collection::hash_set(0u8..64, 0..16)) {
            let mut cart = Cart::new();
            for id in &ids {
                cart.add_item(product(&id.to_string(), None));
            }

            for id in &ids {
                let p = product(&id.to_string(), None);
                prop_assert!(cart.remove_item(&p));
                prop_assert!(!cart.remove_item(&p));
            }

            prop_assert!(cart.is_empty());
        }
    }
}
