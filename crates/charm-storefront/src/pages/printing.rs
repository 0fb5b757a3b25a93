//! Static page explaining the 3D printing process and the printer.

use leptos::prelude::*;

use crate::state::{use_store, Page};

struct ProcessStep {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        title: "3D Model",
        description: "Vytvoříme digitální model přívěsku v softwaru (např. Fusion 360, Blender). Každý detail je pečlivě navržen.",
    },
    ProcessStep {
        number: "02",
        title: "Slicování",
        description: "Model je \"nakrájen\" na stovky tenkých vrstev pomocí slicovacího softwaru Bambu Studio, který generuje instrukce pro tiskárnu.",
    },
    ProcessStep {
        number: "03",
        title: "3D Tisk",
        description: "Tiskárna taví PLA filament a nanáší jej vrstvu po vrstvě podle přesných instrukcí. Tryska se pohybuje v X, Y a Z osách.",
    },
    ProcessStep {
        number: "04",
        title: "Chlazení a Dokončení",
        description: "Každá vrstva okamžitě chladne a tuhne. Po dokončení je přívěsek připraven k použití!",
    },
];

struct PrintFeature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const PRINT_FEATURES: [PrintFeature; 3] = [
    PrintFeature {
        icon: "🧱",
        title: "Vrstvení po vrstvách",
        description: "Přesnost až 0,1 mm na vrstvu pro dokonalé detaily",
    },
    PrintFeature {
        icon: "⚡",
        title: "Rychlá výroba",
        description: "Jeden přívěsek je hotový za 15-30 minut",
    },
    PrintFeature {
        icon: "🌿",
        title: "Ekologický PLA",
        description: "Biologicky odbouratelný bioplast z kukuřice",
    },
];

const PRINTER_SPECS: [(&str, &str); 6] = [
    ("Tiskárna", "Bambu Lab P1S"),
    ("Tiskový objem", "256 × 256 × 256 mm"),
    ("Přesnost vrstvy", "0,05 - 0,35 mm"),
    ("Rychlost tisku", "až 500 mm/s"),
    ("Materiál", "PLA, PETG, TPU, ABS"),
    ("Vícebarevný tisk", "Ano (s AMS)"),
];

#[component]
pub fn PrintingInfoPage() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="page page-printing">
            <section class="page-hero">
                <div class="hero-icon">"🖨"</div>
                <h1>"Jak 3D Tisk Funguje"</h1>
                <p>"Moderní technologie, která vyrábí naše přívěsky s neuvěřitelnou přesností"</p>
            </section>

            <section class="printing-intro">
                <h2>"Co je 3D Tisk?"</h2>
                <p class="section-lead">
                    "3D tisk (aditivní výroba) je proces vytváření trojrozměrného fyzického objektu z digitálního modelu. Na rozdíl od tradičních metod, kde se materiál odebírá (např. řezání), 3D tisk materiál přidává, vrstvu po vrstvě."
                </p>
                <div class="feature-grid">
                    {PRINT_FEATURES
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
            </section>

            <section class="process">
                <h2>"Proces Výroby"</h2>
                <p class="section-lead">"Od digitálního modelu k fyzickému přívěsku"</p>
                <div class="process-grid">
                    {PROCESS_STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="process-step">
                                    <div class="step-number">{step.number}</div>
                                    <div>
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="printer">
                <h2>"Tiskárna Bambu Lab P1S"</h2>
                <p class="section-lead">
                    "Používáme profesionální 3D tiskárnu Bambu Lab P1S, která je známá svou vysokou rychlostí, spolehlivostí a možností vícebarevného tisku díky systému AMS (Automatic Material System)."
                </p>
                <div class="specs">
                    <h3>"Technické Specifikace"</h3>
                    <div class="spec-grid">
                        {PRINTER_SPECS
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="spec">
                                        <span class="spec-label">{format!("{label}: ")}</span>
                                        <span>{*value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="pla">
                <h2>"Proč PLA Filament?"</h2>
                <p>
                    "PLA (kyselina polymléčná) je ekologický bioplast vyrobený z přírodních zdrojů jako je kukuřičný škrob nebo cukrová třtina. Je biologicky odbouratelný a při výrobě produkuje nižší emise než klasické plasty."
                </p>
                <p>
                    "PLA je pevný, lehký a bezpečný. Díky nízkému bodu tání je ideální pro přesný 3D tisk s minimálními deformacemi. Naše přívěsky z PLA vydrží běžné používání a zachovají si živé barvy."
                </p>
            </section>

            <section class="page-cta">
                <h2>"Přesvědčte se sami o kvalitě 3D tisku"</h2>
                <p>"Každý přívěsek je vyroben s maximální péčí o detail"</p>
                <button class="btn btn-dark" on:click=move |_| store.navigate(Page::Home, None)>
                    "Prozkoumat Kolekci"
                </button>
            </section>
        </div>
    }
}
