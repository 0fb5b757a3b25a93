//! Home page: hero, product grid, technology blurb, social proof,
//! newsletter.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::components::ProductCard;
use crate::state::{use_store, Page};

struct TechFeature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const TECH_FEATURES: [TechFeature; 3] = [
    TechFeature {
        icon: "📦",
        title: "Materiál PLA",
        description: "Ekologický a pevný bioplast",
    },
    TechFeature {
        icon: "🏅",
        title: "Odolný a Lehký",
        description: "Dlouhá životnost přívěsku",
    },
    TechFeature {
        icon: "🖨",
        title: "Český Design",
        description: "Vyrobeno s precizností v ČR",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();

    // Gallery cycles through both variants' photos.
    let gallery: Vec<&'static str> = vec![
        Variant::Fox.info().images[0],
        Variant::Dog.info().images[1],
        Variant::Fox.info().images[1],
        Variant::Dog.info().images[2],
        Variant::Fox.info().images[2],
        Variant::Dog.info().images[0],
    ];

    view! {
        <div class="page page-home">
            <section class="hero">
                <div class="hero-copy">
                    <h1>"Precizní design. Cena, co potěší."</h1>
                    <p>
                        "Objevte 3D tištěné přívěsky s propracovanými detaily. Jednotná cena 59 Kč."
                    </p>
                    <button
                        class="btn btn-light"
                        on:click=move |_| store.navigate(Page::Product, Some(Variant::Dog))
                    >
                        "Koupit za 59 Kč"
                    </button>
                </div>
                <div class="hero-image">
                    <img src=Variant::Dog.primary_image() alt="3D tištěný přívěsek pes"/>
                </div>
            </section>

            <section class="collection">
                <h2>"Naše stálá nabídka a novinky"</h2>
                <p class="section-lead">
                    "Každý přívěsek je vyroben s maximální péčí o detail pomocí pokročilé technologie 3D tisku."
                </p>
                <div class="product-grid">
                    {Variant::ALL
                        .into_iter()
                        .map(|variant| view! { <ProductCard variant=variant/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="technology">
                <h2>"Kvalita z PLA filamentu"</h2>
                <p class="section-lead">
                    "Tiskneme z PLA, ekologického, pevného a lehkého materiálu, který garantuje dlouhou životnost přívěsku. PLA je biologicky odbouratelný bioplast vyrobený z přírodních zdrojů."
                </p>
                <div class="feature-grid">
                    {TECH_FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature">
                                    <div class="feature-icon">{feature.icon}</div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="btn btn-outline"
                    on:click=move |_| store.navigate(Page::Printing, None)
                >
                    "Více o Výrobě"
                </button>
            </section>

            <section class="social-proof">
                <h2>"Doporučují Zákazníci"</h2>
                <p class="rating">"★★★★★ 4.9/5"</p>
                <blockquote>
                    "\"Za tuhle cenu naprostá bomba! Kvalita 3D tisku je skvělá, materiál je příjemný a odolný. Koupila jsem lišku i psa a oba vypadají úžasně na batohu.\""
                </blockquote>
                <p class="quote-author">"– Tereza N., Ověřený zákazník"</p>
                <p class="hashtags">"Sdílejte s námi! #3DPrivesky #LiskaDesign"</p>
                <div class="customer-gallery">
                    {gallery
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! { <img src=src alt=format!("Fotka zákazníka {}", i + 1)/> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="newsletter">
                <h2>"Sledujte Novinky a Akce"</h2>
                <p class="section-lead">
                    "Přihlaste se k odběru a buďte první, kdo se dozví o nových produktech a speciálních nabídkách."
                </p>
                <div class="newsletter-form">
                    <input type="email" placeholder="Váš email"/>
                    <button class="btn btn-dark">"Odebírat"</button>
                </div>
            </section>
        </div>
    }
}
