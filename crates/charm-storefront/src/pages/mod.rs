//! Page views, one per [`crate::state::Page`] value.

mod cart;
mod checkout;
mod contact;
mod home;
mod printing;
mod product;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use printing::PrintingInfoPage;
pub use product::ProductDetailPage;
