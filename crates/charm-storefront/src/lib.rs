//! Client-rendered single-page storefront for Fox Charms.
//!
//! The app shell owns all mutable UI state (current page, selected
//! variant, cart) and passes it down through Leptos context; page views
//! read signals and call back into the shell to mutate.

pub mod app;
pub mod components;
pub mod notify;
pub mod pages;
pub mod state;

pub use app::App;
