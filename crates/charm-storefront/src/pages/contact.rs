//! Contact page: form with required fields, direct contacts, FAQ.

use charm_commerce::prelude::*;
use leptos::prelude::*;

use crate::state::{use_store, Page};

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "Jak dlouho trvá dodání?",
        answer: "Standardní dodací lhůta je 1-3 pracovní dny.",
    },
    FaqEntry {
        question: "Mohu vrátit zboží?",
        answer: "Ano, máte garance 30 dní na vrácení.",
    },
    FaqEntry {
        question: "Vyrábíte i jiné motivy?",
        answer: "Ano! Napište nám svůj nápad a rádi připravíme cenovou nabídku.",
    },
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let store = use_store();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filled = !name.get_untracked().is_empty()
            && !email.get_untracked().is_empty()
            && !message.get_untracked().is_empty();
        if !filled {
            store.toasts.error(StoreError::ContactFormIncomplete.user_message());
            return;
        }
        store
            .toasts
            .success("Děkujeme! Váš dotaz byl odeslán. Odpovíme co nejdříve.");
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    view! {
        <div class="page page-contact">
            <section class="page-hero">
                <h1>"Kontaktujte Nás"</h1>
                <p>"Máte dotaz nebo speciální požadavek? Rádi vám pomůžeme!"</p>
            </section>

            <section class="contact-grid">
                <div class="contact-form">
                    <h2>"Napište nám"</h2>
                    <form on:submit=on_submit>
                        <label>
                            "Jméno"
                            <input
                                type="text"
                                placeholder="Vaše jméno"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "E-mail"
                            <input
                                type="email"
                                placeholder="vas@email.cz"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Zpráva"
                            <textarea
                                rows="6"
                                placeholder="Váš dotaz nebo zpráva..."
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn-dark">"Odeslat Dotaz"</button>
                    </form>
                </div>

                <div class="contact-info">
                    <h2>"Přímé Kontakty"</h2>
                    <p>
                        "E-mail: "
                        <a href="mailto:sf.simonflorian@gmail.com">"sf.simonflorian@gmail.com"</a>
                    </p>

                    <div class="faq">
                        <h3>"Často kladené dotazy"</h3>
                        {FAQ
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class="faq-entry">
                                        <p class="faq-question">{entry.question}</p>
                                        <p class="faq-answer">{entry.answer}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="made-in-cz">
                        <h3>"Česká výroba"</h3>
                        <p>
                            "Všechny naše přívěsky vyrábíme přímo v České republice s použitím nejmodernější 3D tiskové technologie a ekologických PLA materiálů."
                        </p>
                    </div>
                </div>
            </section>

            <section class="page-cta">
                <h2>"Máte zájem o naše produkty?"</h2>
                <p>"Prohlédněte si naši kolekci 3D tištěných přívěsků"</p>
                <button class="btn btn-dark" on:click=move |_| store.navigate(Page::Home, None)>
                    "Prozkoumat Kolekci"
                </button>
            </section>
        </div>
    }
}
