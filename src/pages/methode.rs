use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct MethodStep {
    letter: &'static str,
    name: &'static str,
    description: &'static str,
    deliverable: &'static str,
}

const STEPS: [MethodStep; 7] = [
    MethodStep {
        letter: "P",
        name: "Préparation",
        description: "Cadrage de la mission : vos enjeux, vos outils, vos échéances. Nous définissons ensemble le périmètre et les priorités avant d'ouvrir le moindre fichier.",
        deliverable: "Lettre de mission et planning d'intervention",
    },
    MethodStep {
        letter: "I",
        name: "Investigation",
        description: "Diagnostic complet de votre gestion : circuit des factures, fiabilité des chiffres, trésorerie, rentabilité. Nous mesurons l'existant sans complaisance.",
        deliverable: "Rapport de diagnostic chiffré",
    },
    MethodStep {
        letter: "L",
        name: "Livraison",
        description: "Mise en place des fondamentaux : prévisionnel de trésorerie, tableau de bord mensuel, procédures de clôture. Chaque outil est construit avec vos équipes.",
        deliverable: "Outils de pilotage opérationnels",
    },
    MethodStep {
        letter: "O",
        name: "Optimisation",
        description: "Automatisation des flux dans votre système de gestion : intégration bancaire, numérisation des factures, reporting sans ressaisie.",
        deliverable: "Chaîne comptable automatisée",
    },
    MethodStep {
        letter: "T",
        name: "Transposition",
        description: "Transfert de compétences : vos équipes apprennent à faire tourner le système sans nous. Documentation, formation, checklists mensuelles.",
        deliverable: "Équipe autonome et documentée",
    },
    MethodStep {
        letter: "E",
        name: "Évolution",
        description: "Accompagnement dans la durée : revue mensuelle des indicateurs, arbitrages d'investissement, préparation des échéances bancaires.",
        deliverable: "Comité de pilotage mensuel",
    },
    MethodStep {
        letter: "R",
        name: "Résultats",
        description: "Bilan de la mission : écart entre la situation de départ et la situation atteinte, mesuré sur les indicateurs définis en préparation.",
        deliverable: "Revue annuelle de performance",
    },
];

#[function_component(Methode)]
pub fn methode() -> Html {
    html! {
        <div class="methode-page">
            <section class="methode-hero">
                <h1>{"La méthode P.I.L.O.T.E.R."}</h1>
                <p>{"Sept étapes structurées pour transformer votre comptabilité en outil de pilotage. Chaque étape produit un livrable que vous gardez."}</p>
            </section>

            <section class="methode-steps">
                {
                    STEPS.iter().map(|step| html! {
                        <div class="methode-step">
                            <div class="methode-step-letter">{step.letter}</div>
                            <div class="methode-step-body">
                                <h2>{step.name}</h2>
                                <p>{step.description}</p>
                                <span class="methode-step-deliverable">
                                    {"📦 Livrable : "}{step.deliverable}
                                </span>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="methode-cta">
                <h2>{"Par où commencer ?"}</h2>
                <p>{"Le diagnostic en ligne vous situe en 5 minutes. Le rendez-vous de cadrage fait le reste."}</p>
                <div class="methode-cta-actions">
                    <Link<Route> to={Route::Ressources} classes="methode-button primary">
                        {"Faire le diagnostic"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="methode-button secondary">
                        {"Prendre rendez-vous"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .methode-page {
                    padding-top: 74px;
                    background: #ffffff;
                    color: #1f2937;
                }

                .methode-hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
                }

                .methode-hero h1 {
                    font-size: 3rem;
                    color: #ffffff;
                    margin-bottom: 1.5rem;
                }

                .methode-hero p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.75);
                    max-width: 640px;
                    margin: 0 auto;
                    line-height: 1.7;
                }

                .methode-steps {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }

                .methode-step {
                    display: flex;
                    gap: 1.75rem;
                    align-items: flex-start;
                }

                .methode-step-letter {
                    width: 3.5rem;
                    height: 3.5rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #1a3c5e;
                    color: #ffffff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    border-radius: 1rem;
                }

                .methode-step-body h2 {
                    font-size: 1.4rem;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .methode-step-body p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 0.75rem;
                }

                .methode-step-deliverable {
                    display: inline-block;
                    background: #fff4e5;
                    color: #b45309;
                    font-size: 0.875rem;
                    font-weight: 500;
                    padding: 0.35rem 0.85rem;
                    border-radius: 9999px;
                }

                .methode-cta {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                    background: #f3f6fa;
                }

                .methode-cta h2 {
                    font-size: 2rem;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }

                .methode-cta p {
                    color: #6b7280;
                    margin-bottom: 2rem;
                }

                .methode-cta-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .methode-button {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 12px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.2s;
                }

                .methode-button.primary {
                    background: #1a3c5e;
                    color: #ffffff;
                }

                .methode-button.primary:hover {
                    background: #2d5a8a;
                }

                .methode-button.secondary {
                    background: #ffffff;
                    color: #1a3c5e;
                    border: 1px solid #1a3c5e;
                }

                .methode-button.secondary:hover {
                    background: #eef2f7;
                }

                @media (max-width: 768px) {
                    .methode-hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
