use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct GuideCard {
    route: Route,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    meta: &'static str,
}

#[function_component(Ressources)]
pub fn ressources() -> Html {
    let guides = [
        GuideCard {
            route: Route::GuideDafPme,
            icon: "🧭",
            title: "Avez-vous besoin d'un DAF ?",
            description: "24 questions sur 4 axes pour savoir si votre PME a atteint le stade où un directeur financier change la donne.",
            meta: "Diagnostic · 24 questions",
        },
        GuideCard {
            route: Route::GuideDiagnosticGestion,
            icon: "📊",
            title: "Diagnostic de gestion comptable",
            description: "Votre comptabilité est-elle un outil de pilotage ou une simple obligation ? 17 questions en 4 blocs pour le savoir.",
            meta: "Guide + quiz · 17 questions",
        },
        GuideCard {
            route: Route::GuideAutomatisationOdoo,
            icon: "⚙️",
            title: "Automatiser sa comptabilité avec Odoo",
            description: "6 sections, 31 questions : mesurez votre maturité d'automatisation et repérez les chantiers prioritaires.",
            meta: "Guide + quiz · 31 questions",
        },
        GuideCard {
            route: Route::GuideControleGestion,
            icon: "📈",
            title: "Mettre en place un contrôle de gestion",
            description: "Du tableur artisanal au pilotage structuré : situez votre profil parmi 5 niveaux de maturité.",
            meta: "Guide + quiz · 10 questions",
        },
        GuideCard {
            route: Route::GuidePlanAction2026,
            icon: "🗓️",
            title: "Plan d'action financier 2026",
            description: "Le guide complet pour structurer votre année : trésorerie, rentabilité, budget et reporting, avec checklist de mise en œuvre.",
            meta: "Guide téléchargeable · 9 chapitres",
        },
    ];

    html! {
        <div class="ressources-page">
            <section class="ressources-hero">
                <h1>{"Ressources"}</h1>
                <p>{"Guides pratiques et auto-diagnostics gratuits pour évaluer et structurer votre gestion financière."}</p>
            </section>

            <section class="ressources-grid">
                {
                    guides.into_iter().map(|guide| html! {
                        <Link<Route> to={guide.route} classes="ressources-card">
                            <span class="ressources-card-icon">{guide.icon}</span>
                            <h2>{guide.title}</h2>
                            <p>{guide.description}</p>
                            <span class="ressources-card-meta">{guide.meta}</span>
                        </Link<Route>>
                    }).collect::<Html>()
                }
            </section>

            <style>
                {r#"
                .ressources-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #ffffff;
                    color: #1f2937;
                }

                .ressources-hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
                }

                .ressources-hero h1 {
                    font-size: 3rem;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }

                .ressources-hero p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.75);
                    max-width: 600px;
                    margin: 0 auto;
                }

                .ressources-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem 6rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .ressources-card {
                    display: block;
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 1.25rem;
                    padding: 2rem;
                    text-decoration: none;
                    color: inherit;
                    transition: all 0.2s;
                }

                .ressources-card:hover {
                    border-color: #1a3c5e;
                    box-shadow: 0 15px 30px rgba(26, 60, 94, 0.12);
                    transform: translateY(-2px);
                }

                .ressources-card-icon {
                    font-size: 2.25rem;
                }

                .ressources-card h2 {
                    font-size: 1.25rem;
                    color: #111827;
                    margin: 1rem 0 0.5rem;
                }

                .ressources-card p {
                    color: #6b7280;
                    line-height: 1.6;
                    margin-bottom: 1.25rem;
                }

                .ressources-card-meta {
                    display: inline-block;
                    background: #eef2f7;
                    color: #1a3c5e;
                    font-size: 0.8rem;
                    font-weight: 600;
                    padding: 0.3rem 0.8rem;
                    border-radius: 9999px;
                }

                @media (max-width: 768px) {
                    .ressources-hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
