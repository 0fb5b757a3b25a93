//! Product detail page: gallery, info, quantity stepper, tabs, related
//! product.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::components::ProductCard;
use crate::state::{use_store, Page};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Description,
    Reviews,
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let store = use_store();
    let selected_image = RwSignal::new(0usize);
    let quantity = RwSignal::new(1i64);
    let tab = RwSignal::new(Tab::Description);

    let variant = move || store.selected.get();
    let info = move || variant().info();

    let add_to_cart = move |_| {
        store.add_to_cart(variant(), quantity.get_untracked());
    };

    view! {
        <div class="page page-product">
            <nav class="breadcrumbs">
                <button on:click=move |_| store.navigate(Page::Home, None)>"Domů"</button>
                <span>"›"</span>
                <button on:click=move |_| store.navigate(Page::Product, None)>"Kolekce"</button>
                <span>"›"</span>
                <span class="current">{move || info().full_name}</span>
            </nav>

            <div class="product-detail">
                <div class="gallery">
                    <div class="gallery-main">
                        <img
                            src=move || {
                                let images = info().images;
                                images[selected_image.get().min(images.len() - 1)]
                            }
                            alt=move || info().full_name
                        />
                    </div>
                    <div class="gallery-thumbs">
                        {move || {
                            info()
                                .images
                                .iter()
                                .enumerate()
                                .map(|(i, src)| {
                                    view! {
                                        <button
                                            class="thumb"
                                            class:active=move || selected_image.get() == i
                                            on:click=move |_| selected_image.set(i)
                                        >
                                            <img src=*src alt=format!("Detail {}", i + 1)/>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>

                <div class="product-info">
                    <h1>{move || info().full_name}</h1>
                    <p class="price">{unit_price().display()}</p>
                    <p class="rating">
                        {move || {
                            format!("★★★★★ (4.9/5 · {} hodnocení)", info().reviews.len())
                        }}
                    </p>
                    <p class="description">{move || info().description}</p>

                    <div class="spec-box">
                        <div class="spec">
                            <span class="spec-label">"Rozměry"</span>
                            <span>"6 × 3,5 cm"</span>
                        </div>
                        <div class="spec">
                            <span class="spec-label">"Materiál"</span>
                            <span>"Vysoce odolný PLA filament"</span>
                        </div>
                        <div class="spec">
                            <span class="spec-label">"Barvy"</span>
                            <span>{move || info().colors}</span>
                        </div>
                        <div class="spec">
                            <span class="spec-label">"Dostupnost"</span>
                            <span class="in-stock">"Skladem"</span>
                        </div>
                    </div>

                    <label class="stepper-label">"Počet kusů"</label>
                    <div class="stepper">
                        <button on:click=move |_| {
                            quantity.update(|q| *q = (*q - 1).max(1))
                        }>"−"</button>
                        <span>{move || quantity.get()}</span>
                        <button on:click=move |_| quantity.update(|q| *q += 1)>"+"</button>
                    </div>

                    <button class="btn btn-dark btn-wide" on:click=add_to_cart>
                        "Přidat do košíku za 59 Kč"
                    </button>

                    <ul class="guarantees">
                        <li>"🚚 Doprava ZDARMA nad 1000 Kč"</li>
                        <li>"🏅 Garance 30 dní na vrácení"</li>
                        <li>"📍 Česká výroba"</li>
                    </ul>
                </div>
            </div>

            <div class="product-tabs">
                <div class="tab-list">
                    <button
                        class:active=move || tab.get() == Tab::Description
                        on:click=move |_| tab.set(Tab::Description)
                    >
                        "Popis"
                    </button>
                    <button
                        class:active=move || tab.get() == Tab::Reviews
                        on:click=move |_| tab.set(Tab::Reviews)
                    >
                        {move || format!("Hodnocení ({})", info().reviews.len())}
                    </button>
                </div>

                {move || match tab.get() {
                    Tab::Description => view! {
                        <div class="tab-content">
                            <h3>"O Produktu"</h3>
                            <p>
                                "Naše 3D tištěné přívěsky kombinují moderní technologii s kreativním designem. Každý kousek je vyroben s mimořádnou péčí o detail pomocí nejmodernějších 3D tiskáren."
                            </p>
                            <h3>"Materiál a Kvalita"</h3>
                            <p>
                                "Tiskneme z PLA, ekologického, pevného a lehkého materiálu, který garantuje dlouhou životnost přívěsku. PLA je biologicky odbouratelný bioplast vyrobený z přírodních zdrojů. Materiál je odolný proti poškrábání a běžnému opotřebení. Přívěsek je lehký a pružný, takže nevadí ani při aktivním pohybu."
                            </p>
                            <h3>"Péče o Produkt"</h3>
                            <p>
                                "Přívěsek je možné čistit vlhkým hadříkem. Nevhodné do myčky nádobí. Materiál je vodovzdorný, ale dlouhodobému ponoření se doporučuje vyhnout."
                            </p>
                            <h3>"Použití"</h3>
                            <p>
                                "Ideální jako doplněk na batoh, tašku, klíče nebo peněženku. Díky kovovému poutku je snadné připevnění kamkoliv. Perfektní jako dárek pro milovníky zvířat nebo jako originální doplněk pro každého."
                            </p>
                        </div>
                    }
                    .into_any(),
                    Tab::Reviews => view! {
                        <div class="tab-content">
                            <p class="rating-summary">
                                {move || {
                                    format!(
                                        "★★★★★ 4.9/5 · Na základě {} hodnocení",
                                        info().reviews.len(),
                                    )
                                }}
                            </p>
                            {move || {
                                info()
                                    .reviews
                                    .iter()
                                    .map(|review| {
                                        view! {
                                            <div class="review">
                                                <div class="review-head">
                                                    <span class="review-stars">
                                                        {stars(review.rating)}
                                                    </span>
                                                    <span class="review-author">{review.author}</span>
                                                    <span class="review-date">{review.date}</span>
                                                </div>
                                                <p>{review.text}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            <div class="related">
                <h2>"Mohlo by se vám líbit"</h2>
                {move || {
                    let other = variant().other();
                    view! { <ProductCard variant=other/> }
                }}
            </div>
        </div>
    }
}
