use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Questions fréquentes"}</h1>
                <p>{"Tout ce que vous devez savoir avant de confier votre pilotage financier à MSL Conseils"}</p>
            </section>

            <section class="faq-section">
                <h2>{"Notre accompagnement"}</h2>

                <FaqItem question="Qu'est-ce qu'un DAF externalisé ?">
                    <p>
                        {"Un directeur administratif et financier externalisé vous apporte les compétences d'un DAF expérimenté, sans le coût d'un poste à temps plein. Nous intervenons quelques jours par mois pour structurer votre gestion, fiabiliser vos chiffres et éclairer vos décisions."}
                    </p>
                    <p>
                        {"C'est la solution adaptée aux PME de 10 à 250 salariés qui ont dépassé le stade où l'expert-comptable suffit, mais pas encore celui qui justifie un recrutement."}
                    </p>
                </FaqItem>

                <FaqItem question="En quoi êtes-vous différents d'un expert-comptable ?">
                    <p>
                        {"L'expert-comptable regarde le passé : il enregistre, déclare et atteste. Nous regardons l'avenir : trésorerie prévisionnelle, rentabilité par activité, tableaux de bord, plan de financement. Les deux rôles sont complémentaires et nous travaillons main dans la main avec votre cabinet."}
                    </p>
                </FaqItem>

                <FaqItem question="Comment se déroule la méthode P.I.L.O.T.E.R. ?">
                    <p>
                        {"Sept étapes structurent chaque mission : Préparation, Investigation, Livraison, Optimisation, Transposition, Évolution, Résultats. Un diagnostic initial cadre la mission, puis chaque étape produit des livrables concrets que vous gardez, quoi qu'il arrive."}
                    </p>
                    <p>
                        {"La page "}<Link<Route> to={Route::Methode}>{"Méthode"}</Link<Route>>{" détaille chaque étape."}
                    </p>
                </FaqItem>

                <h2>{"Les diagnostics en ligne"}</h2>

                <FaqItem question="Les diagnostics sont-ils vraiment gratuits ?">
                    <p>
                        {"Oui. Chaque guide de la page Ressources se termine par un auto-diagnostic gratuit de quelques minutes. Vous obtenez immédiatement votre score de maturité, une lecture par axe et des recommandations actionnables, sans engagement."}
                    </p>
                </FaqItem>

                <FaqItem question="Que faites-vous de mes réponses ?">
                    <p>
                        {"Vos réponses servent uniquement à calculer votre score et personnaliser les recommandations affichées. Elles ne quittent pas votre navigateur. Seul le formulaire de contact transmet vos coordonnées, et uniquement quand vous l'envoyez."}
                    </p>
                </FaqItem>

                <FaqItem question="Mon score est faible, est-ce grave ?">
                    <p>
                        {"Non, c'est même le meilleur point de départ. Un score faible signifie simplement que votre gestion repose encore sur des outils de base. Les recommandations de votre diagnostic vous indiquent par quel chantier commencer, et chaque guide détaille la marche à suivre chapitre par chapitre."}
                    </p>
                </FaqItem>

                <h2>{"Aspects pratiques"}</h2>

                <FaqItem question="Quels outils utilisez-vous ?">
                    <p>
                        {"Nous sommes spécialistes de l'automatisation comptable et financière sous Odoo, mais nous travaillons avec vos outils existants quand ils conviennent. L'objectif est un système connecté : banque, facturation, comptabilité et reporting alimentés sans double saisie."}
                    </p>
                </FaqItem>

                <FaqItem question="Comment démarrer ?">
                    <p>
                        {"Le plus simple : faites l'un de nos diagnostics en ligne, puis prenez rendez-vous via la page contact. Le premier échange de 30 minutes est offert et sans engagement."}
                    </p>
                </FaqItem>
            </section>

            <section class="faq-cta">
                <h2>{"Une question qui ne figure pas ici ?"}</h2>
                <p>{"Écrivez-nous, nous répondons sous 48h ouvrées."}</p>
                <Link<Route> to={Route::Contact} classes="faq-cta-button">
                    {"Nous contacter"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #ffffff;
                    color: #1f2937;
                }

                .faq-hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
                }

                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                    color: #ffffff;
                }

                .faq-hero p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.75);
                    max-width: 600px;
                    margin: 0 auto;
                }

                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .faq-section h2 {
                    font-size: 1.5rem;
                    color: #1a3c5e;
                    margin: 3rem 0 1.5rem;
                }

                .faq-item {
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-item.open {
                    border-color: #1a3c5e;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                }

                .question-text {
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #111827;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #1a3c5e;
                    flex-shrink: 0;
                }

                .faq-answer {
                    display: none;
                    padding: 0 1.5rem 1.5rem;
                    color: #4b5563;
                    line-height: 1.7;
                }

                .faq-item.open .faq-answer {
                    display: block;
                }

                .faq-answer a {
                    color: #1a3c5e;
                    font-weight: 500;
                }

                .faq-cta {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                }

                .faq-cta h2 {
                    font-size: 1.75rem;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }

                .faq-cta p {
                    color: #6b7280;
                    margin-bottom: 2rem;
                }

                .faq-cta-button {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 12px;
                    background: #1a3c5e;
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.2s;
                }

                .faq-cta-button:hover {
                    background: #2d5a8a;
                }

                @media (max-width: 768px) {
                    .faq-hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
