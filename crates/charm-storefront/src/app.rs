//! Root component: page switching, document head, shared chrome.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::components::{Footer, Header, ToastStack};
use crate::pages::{CartPage, CheckoutPage, ContactPage, HomePage, PrintingInfoPage, ProductDetailPage};
use crate::state::{provide_store, Page};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = provide_store();

    view! {
        <Title text="3D Přívěsky | Fox Charms"/>
        <Meta name="description" content="Originální 3D tištěné přívěsky. Precizní design, česká výroba, jednotná cena 59 Kč."/>
        <Header/>
        <main>
            {move || match store.page.get() {
                Page::Home => view! { <HomePage/> }.into_any(),
                Page::Product => view! { <ProductDetailPage/> }.into_any(),
                Page::Contact => view! { <ContactPage/> }.into_any(),
                Page::Cart => view! { <CartPage/> }.into_any(),
                Page::Checkout => view! { <CheckoutPage/> }.into_any(),
                Page::Printing => view! { <PrintingInfoPage/> }.into_any(),
            }}
        </main>
        <Footer/>
        <ToastStack/>
    }
}
