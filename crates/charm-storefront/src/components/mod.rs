//! Shared components used across pages.

mod footer;
mod header;
mod product_card;
mod toast;

pub use footer::Footer;
pub use header::Header;
pub use product_card::ProductCard;
pub use toast::ToastStack;
