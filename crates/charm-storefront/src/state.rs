//! App shell state.
//!
//! A single [`Store`] is created at startup and provided through Leptos
//! context. Page views read its signals and route every mutation through
//! its methods, so toasts and log events stay in one place.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::notify::Toaster;

/// The page currently shown. Navigation swaps this signal; there is no
/// URL router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Product,
    Contact,
    Cart,
    Checkout,
    Printing,
}

/// Shared app state: current page, selected variant, cart, toasts.
#[derive(Clone, Copy)]
pub struct Store {
    pub page: RwSignal<Page>,
    /// Variant shown by the product detail page. Keeps its last value
    /// across navigation, so returning to the detail page shows the
    /// product viewed before.
    pub selected: RwSignal<Variant>,
    pub cart: RwSignal<Cart>,
    pub toasts: Toaster,
}

impl Store {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Home),
            selected: RwSignal::new(Variant::Fox),
            cart: RwSignal::new(Cart::new()),
            toasts: Toaster::new(),
        }
    }

    /// Go to a page, optionally switching the selected variant first.
    pub fn navigate(&self, page: Page, variant: Option<Variant>) {
        if let Some(variant) = variant {
            self.selected.set(variant);
        }
        self.page.set(page);
        tracing::debug!(?page, "navigate");
    }

    /// Add items to the cart and confirm with a toast.
    pub fn add_to_cart(&self, variant: Variant, quantity: i64) {
        if quantity <= 0 {
            return;
        }
        self.cart.update(|cart| cart.add_item(variant, quantity));
        self.toasts.success(Cart::added_message(variant, quantity));
        tracing::info!(variant = variant.slug(), quantity, "added to cart");
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    pub fn update_quantity(&self, variant: Variant, quantity: i64) {
        self.cart.update(|cart| cart.set_quantity(variant, quantity));
    }

    /// Remove a line and confirm with a toast. The toast shows even when
    /// no line existed.
    pub fn remove_from_cart(&self, variant: Variant) {
        self.cart.update(|cart| {
            cart.remove(&variant);
        });
        self.toasts.success(Cart::removed_message());
        tracing::info!(variant = variant.slug(), "removed from cart");
    }

    /// Total item count, for the header badge.
    pub fn item_count(&self) -> i64 {
        self.cart.with(|cart| cart.item_count())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the store and provide it through context. Called once by the
/// root component.
pub fn provide_store() -> Store {
    let store = Store::new();
    provide_context(store);
    store
}

/// Fetch the store from context. Panics if called outside the app tree.
pub fn use_store() -> Store {
    expect_context::<Store>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_remembers_selected_variant() {
        let store = Store::new();
        store.navigate(Page::Product, Some(Variant::Dog));
        store.navigate(Page::Cart, None);
        assert_eq!(store.page.get_untracked(), Page::Cart);
        assert_eq!(store.selected.get_untracked(), Variant::Dog);

        store.navigate(Page::Product, None);
        assert_eq!(store.selected.get_untracked(), Variant::Dog);
    }

    #[test]
    fn test_add_to_cart_updates_count_and_toasts() {
        let store = Store::new();
        store.add_to_cart(Variant::Fox, 2);
        assert_eq!(store.item_count(), 2);

        let toasts = store.toasts.entries();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].message.contains("přidán do košíku"));
    }

    #[test]
    fn test_add_nonpositive_quantity_is_silent() {
        let store = Store::new();
        store.add_to_cart(Variant::Fox, 0);
        assert_eq!(store.item_count(), 0);
        assert!(store.toasts.entries().is_empty());
    }

    #[test]
    fn test_remove_toasts_even_for_absent_line() {
        let store = Store::new();
        store.remove_from_cart(Variant::Dog);
        assert_eq!(store.item_count(), 0);

        let toasts = store.toasts.entries();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, Cart::removed_message());
    }

    #[test]
    fn test_stepper_to_zero_removes_line() {
        let store = Store::new();
        store.add_to_cart(Variant::Fox, 1);
        store.update_quantity(Variant::Fox, 0);
        assert!(store.cart.with_untracked(|cart| cart.is_empty()));
    }
}
