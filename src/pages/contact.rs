use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::lead;

#[derive(Clone, Copy, PartialEq)]
enum Status {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Default, PartialEq)]
struct ContactFields {
    nom: String,
    email: String,
    telephone: String,
    entreprise: String,
    message: String,
}

/// Contact form. One POST to the CRM connector per submit; failure keeps
/// the fields as typed so the visitor can retry, success clears them.
#[function_component(Contact)]
pub fn contact() -> Html {
    let fields = use_state(ContactFields::default);
    let status = use_state(|| Status::Idle);

    let oninput = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.message = area.value();
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Loading {
                return;
            }
            status.set(Status::Loading);

            let payload = lead::contact_lead(
                &fields.nom,
                &fields.email,
                &fields.telephone,
                &fields.entreprise,
                &fields.message,
            );
            let fields = fields.clone();
            let status = status.clone();
            spawn_local(async move {
                match lead::submit(&payload).await {
                    Ok(()) => {
                        status.set(Status::Success);
                        fields.set(ContactFields::default());
                    }
                    Err(err) => {
                        error!("contact lead submission failed: {err}");
                        status.set(Status::Error);
                    }
                }
            });
        })
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Contactez-nous"}</h1>
                <p>{"Parlons de votre gestion financière. Réponse sous 48h ouvrées."}</p>
            </section>

            <div class="contact-layout">
                <div class="contact-card">
                    <h2>{"Écrivez-nous"}</h2>

                    {
                        match *status {
                            Status::Success => html! {
                                <div class="contact-alert success">
                                    {"✅ Message envoyé ! Nous revenons vers vous très vite."}
                                </div>
                            },
                            Status::Error => html! {
                                <div class="contact-alert error">
                                    {"❌ L'envoi a échoué. Vérifiez votre connexion et réessayez."}
                                </div>
                            },
                            _ => html! {},
                        }
                    }

                    <form {onsubmit}>
                        <div class="contact-field">
                            <label>{"Nom complet"}</label>
                            <input
                                type="text"
                                required=true
                                placeholder="Jean Dupont"
                                value={fields.nom.clone()}
                                oninput={oninput(|f, v| f.nom = v)}
                            />
                        </div>
                        <div class="contact-row">
                            <div class="contact-field">
                                <label>{"Email"}</label>
                                <input
                                    type="email"
                                    required=true
                                    placeholder="jean@entreprise.fr"
                                    value={fields.email.clone()}
                                    oninput={oninput(|f, v| f.email = v)}
                                />
                            </div>
                            <div class="contact-field">
                                <label>{"Téléphone"}</label>
                                <input
                                    type="tel"
                                    placeholder="06 12 34 56 78"
                                    value={fields.telephone.clone()}
                                    oninput={oninput(|f, v| f.telephone = v)}
                                />
                            </div>
                        </div>
                        <div class="contact-field">
                            <label>{"Entreprise"}</label>
                            <input
                                type="text"
                                placeholder="Nom de votre entreprise"
                                value={fields.entreprise.clone()}
                                oninput={oninput(|f, v| f.entreprise = v)}
                            />
                        </div>
                        <div class="contact-field">
                            <label>{"Message"}</label>
                            <textarea
                                rows="5"
                                required=true
                                placeholder="Décrivez votre besoin en quelques lignes..."
                                value={fields.message.clone()}
                                oninput={on_message}
                            />
                        </div>
                        <button
                            type="submit"
                            class="contact-submit"
                            disabled={*status == Status::Loading}
                        >
                            {
                                if *status == Status::Loading {
                                    "Envoi en cours..."
                                } else {
                                    "Envoyer le message"
                                }
                            }
                        </button>
                    </form>
                </div>

                <div class="contact-aside">
                    <h2>{"Ou directement"}</h2>
                    <div class="contact-info">
                        <p><strong>{"📧 Email"}</strong></p>
                        <p>{"contact@mslconseils.fr"}</p>
                    </div>
                    <div class="contact-info">
                        <p><strong>{"📍 Zone d'intervention"}</strong></p>
                        <p>{"France entière, interventions sur site et à distance"}</p>
                    </div>
                    <div class="contact-info">
                        <p><strong>{"🕐 Premier échange"}</strong></p>
                        <p>{"30 minutes offertes, sans engagement"}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #ffffff;
                    color: #1f2937;
                }

                .contact-hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
                }

                .contact-hero h1 {
                    font-size: 3rem;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }

                .contact-hero p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.75);
                }

                .contact-layout {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem 6rem;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                }

                @media (max-width: 900px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }

                .contact-card {
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }

                .contact-card h2,
                .contact-aside h2 {
                    font-size: 1.5rem;
                    color: #1a3c5e;
                    margin-bottom: 1.5rem;
                }

                .contact-alert {
                    padding: 1rem 1.25rem;
                    border-radius: 0.75rem;
                    margin-bottom: 1.5rem;
                    font-weight: 500;
                }

                .contact-alert.success {
                    background: #ecfdf5;
                    color: #047857;
                    border: 1px solid #a7f3d0;
                }

                .contact-alert.error {
                    background: #fef2f2;
                    color: #b91c1c;
                    border: 1px solid #fecaca;
                }

                .contact-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                @media (max-width: 640px) {
                    .contact-row {
                        grid-template-columns: 1fr;
                    }
                }

                .contact-field {
                    margin-bottom: 1.25rem;
                }

                .contact-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }

                .contact-field input,
                .contact-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    border: 2px solid #e5e7eb;
                    font-size: 1rem;
                    font-family: inherit;
                    background: #ffffff;
                    transition: border-color 0.2s;
                }

                .contact-field input:focus,
                .contact-field textarea:focus {
                    outline: none;
                    border-color: #1a3c5e;
                }

                .contact-submit {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #1a3c5e;
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s;
                }

                .contact-submit:hover:not(:disabled) {
                    background: #2d5a8a;
                }

                .contact-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .contact-info {
                    background: #f3f6fa;
                    border-radius: 1rem;
                    padding: 1.25rem 1.5rem;
                    margin-bottom: 1rem;
                }

                .contact-info p {
                    margin: 0.25rem 0;
                    color: #4b5563;
                }

                .contact-info strong {
                    color: #1a3c5e;
                }
                "#}
            </style>
        </div>
    }
}
