use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chapter_nav::{Chapter, ChapterNav};
use crate::components::quiz_view::QuizView;
use crate::components::user_form::UserForm;
use crate::quiz::model::{AnswerSheet, FunnelStep, Question, Requirements, Section, UserInfo};
use crate::quiz::score::tally;
use crate::scroll_to_top;
use crate::Route;

const ACCENT: &str = "#1a3c5e";

pub const MAX_SCORE: f32 = 50.0;

pub static SECTIONS: [Section; 1] = [Section {
    id: "maturite",
    title: "Votre maturité en contrôle de gestion",
    icon: "📈",
    description: "10 questions",
    questions: &[
        Question::yes_partial_no(
            "q1",
            "Établissez-vous un budget prévisionnel annuel ?",
            "Le budget annuel est la colonne vertébrale du pilotage.",
            "Un budget partiel est un bon début, formalisez-le sur l'année complète.",
            "Sans budget, vos décisions reposent sur l'intuition plutôt que sur des repères chiffrés.",
            7,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q2",
            "Suivez-vous régulièrement l'écart entre le budget et le réalisé ?",
            "Le suivi des écarts vous permet de corriger le cap en cours d'année.",
            "Un suivi ponctuel aide, mais une revue mensuelle serait plus efficace.",
            "Comparer budget et réalisé chaque mois transformerait votre budget en outil vivant.",
            7,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q3",
            "Disposez-vous d'un tableau de bord avec des indicateurs clés ?",
            "Un tableau de bord synthétique est l'outil central du contrôle de gestion.",
            "Quelques indicateurs existent, regroupez-les dans un tableau de bord unique.",
            "3 à 5 indicateurs clés suffisent pour démarrer un vrai tableau de bord.",
            6,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q4",
            "Connaissez-vous votre rentabilité par produit, service ou client ?",
            "Vous savez où se crée (et se détruit) la valeur dans votre activité.",
            "Une vision partielle existe, affinez-la avec une comptabilité analytique.",
            "La rentabilité par axe est souvent la découverte la plus utile d'un contrôle de gestion.",
            6,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q5",
            "Suivez-vous votre trésorerie de façon prévisionnelle ?",
            "La prévision de trésorerie vous évite les mauvaises surprises.",
            "Un suivi du solde est un début, ajoutez une projection à 3 mois.",
            "Une prévision à 30/60/90 jours est le premier réflexe d'un pilotage sain.",
            6,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q6",
            "Vos données de gestion sont-elles collectées automatiquement ?",
            "L'automatisation fiabilise vos chiffres et libère du temps d'analyse.",
            "Une partie des données remonte automatiquement, étendez le périmètre.",
            "La ressaisie manuelle est la première source d'erreurs et de retard.",
            9,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q7",
            "Une personne est-elle clairement responsable du suivi de gestion ?",
            "Un responsable identifié garantit la régularité du suivi.",
            "Le rôle existe mais reste diffus, formalisez-le.",
            "Sans responsable désigné, le suivi de gestion passe toujours après l'urgence.",
            5,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q8",
            "Vos équipes sont-elles impliquées dans le suivi des résultats ?",
            "L'implication des équipes ancre le pilotage dans le quotidien.",
            "Certains managers suivent leurs chiffres, généralisez la pratique.",
            "Partager les indicateurs avec les équipes démultiplie leur effet.",
            5,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q9",
            "Utilisez-vous un outil dédié au pilotage (ERP, logiciel de gestion) ?",
            "Un outil intégré centralise vos données et sécurise vos analyses.",
            "Le tableur dépanne, mais un outil dédié fiabiliserait l'ensemble.",
            "Un ERP comme Odoo ou un outil de trésorerie comme Agicap serait un vrai levier.",
            9,
        )
        .weighted(5.0),
        Question::yes_partial_no(
            "q10",
            "Vos décisions stratégiques s'appuient-elles sur des scénarios chiffrés ?",
            "Vous pilotez avec méthode et vision, au-delà du simple constat.",
            "Quelques simulations existent, systématisez-les pour les décisions clés.",
            "Chiffrer plusieurs scénarios avant de décider est la marque d'un pilotage mature.",
            10,
        )
        .weighted(5.0),
    ],
}];

/// Maturity profile with its recommendation and next-step lists.
pub struct Profile {
    pub max: f32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub accent: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

pub static PROFILES: [Profile; 5] = [
    Profile {
        max: 10.0,
        name: "Débutant",
        emoji: "🔴",
        accent: "#dc2626",
        description: "Vous n'avez pas encore mis en place de contrôle de gestion. Cela signifie que vos décisions reposent essentiellement sur l'intuition.",
        recommendations: &[
            "Commencez par établir un budget annuel simple",
            "Identifiez 3 à 5 indicateurs clés pour votre activité",
            "Mettez en place un suivi mensuel basique",
            "Utilisez Excel ou Google Sheets pour débuter",
        ],
        next_steps: &[
            "Un premier pas consisterait à établir un budget annuel et à suivre quelques indicateurs clés",
            "Vous pourriez bénéficier d'un accompagnement ponctuel pour structurer votre gestion",
        ],
    },
    Profile {
        max: 20.0,
        name: "Basique",
        emoji: "🟠",
        accent: "#ea580c",
        description: "Vous avez commencé à suivre quelques éléments, mais cela reste informel ou ponctuel. Il est temps de poser des bases solides.",
        recommendations: &[
            "Formalisez votre budget prévisionnel annuel",
            "Créez un tableau de bord avec des KPI précis",
            "Instaurez une routine de suivi mensuel",
            "Impliquez vos équipes dans le suivi des résultats",
        ],
        next_steps: &[
            "Il est temps de poser des bases solides : indicateurs, budget, tableau de bord mensuel",
            "Un outil simple ou un accompagnement personnalisé peut grandement vous aider à passer à l'étape suivante",
        ],
    },
    Profile {
        max: 30.0,
        name: "Intermédiaire",
        emoji: "🟡",
        accent: "#ca8a04",
        description: "Vous avez des éléments en place, mais ils pourraient être mieux structurés ou automatisés.",
        recommendations: &[
            "Intégrez les données opérationnelles à votre pilotage",
            "Automatisez la collecte et le traitement des données",
            "Fiabilisez vos indicateurs avec des outils adaptés",
            "Envisagez un ERP comme Odoo pour centraliser vos données",
        ],
        next_steps: &[
            "L'enjeu maintenant est d'intégrer les données opérationnelles (ventes, RH, production…) à votre pilotage",
            "Des outils comme Odoo ou Agicap peuvent vous aider à fiabiliser vos indicateurs",
        ],
    },
    Profile {
        max: 40.0,
        name: "Structuré",
        emoji: "🟢",
        accent: "#16a34a",
        description: "Votre entreprise est bien avancée dans sa démarche de gestion. Vous avez les outils, la méthode, et une bonne implication des équipes.",
        recommendations: &[
            "Structurez le reporting stratégique pour la direction",
            "Intégrez des scénarios prévisionnels à votre analyse",
            "Développez des tableaux de bord par département",
            "Formez vos managers à l'analyse des KPI",
        ],
        next_steps: &[
            "Pour aller plus loin, vous pouvez structurer le reporting stratégique",
            "Intégrez des scénarios prévisionnels pour affiner votre prise de décision",
        ],
    },
    Profile {
        max: 50.0,
        name: "Avancé",
        emoji: "🔵",
        accent: "#2563eb",
        description: "Félicitations ! Vous pilotez votre entreprise avec méthode et vision. Vous exploitez pleinement les données, vous êtes proactif dans vos décisions et vos outils sont intégrés.",
        recommendations: &[
            "Explorez les analyses avancées et la Business Intelligence",
            "Intégrez l'IA pour des prédictions plus fines",
            "Optimisez en continu vos processus de pilotage",
            "Partagez vos bonnes pratiques avec votre écosystème",
        ],
        next_steps: &[
            "L'étape suivante est l'optimisation continue avec des analyses avancées",
            "Explorez l'IA et les outils de Business Intelligence pour aller encore plus loin",
        ],
    },
];

pub fn profile_for(score: f32) -> &'static Profile {
    let [.., top] = &PROFILES;
    PROFILES.iter().find(|p| score <= p.max).unwrap_or(top)
}

fn chapters() -> Vec<Chapter> {
    vec![
        Chapter { id: 1, title: "Qu'est-ce que le contrôle de gestion ?" },
        Chapter { id: 2, title: "Pourquoi est-il important ?" },
        Chapter { id: 3, title: "Différence entre contrôle de gestion et comptabilité" },
        Chapter { id: 4, title: "Les différentes formes de contrôle" },
        Chapter { id: 5, title: "Le rôle du contrôleur de gestion" },
        Chapter { id: 6, title: "Les outils clés du contrôle de gestion" },
        Chapter { id: 7, title: "Les étapes pour mettre en place un contrôle de gestion" },
        Chapter { id: 8, title: "Contrôleur de gestion vs Expert-comptable" },
        Chapter { id: 9, title: "Quels outils informatiques ?" },
        Chapter { id: 10, title: "Avantages et limites" },
        Chapter { id: 11, title: "Travailler avec un cabinet comptable" },
    ]
}

#[function_component(GuideControleGestion)]
pub fn guide_controle_gestion() -> Html {
    let step = use_state(|| FunnelStep::Content);
    let user = use_state(|| None::<UserInfo>);
    let sheet = use_state(AnswerSheet::new);

    let goto = |target: FunnelStep| {
        let step = step.clone();
        Callback::from(move |_: ()| {
            step.set(target);
            scroll_to_top();
        })
    };

    let on_start = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            step.set(FunnelStep::Form);
            scroll_to_top();
        })
    };

    let on_form_submit = {
        let step = step.clone();
        let user = user.clone();
        Callback::from(move |info: UserInfo| {
            user.set(Some(info));
            step.set(FunnelStep::Quiz);
            scroll_to_top();
        })
    };

    let on_quiz_complete = {
        let step = step.clone();
        let sheet = sheet.clone();
        Callback::from(move |answers: AnswerSheet| {
            sheet.set(answers);
            step.set(FunnelStep::Results);
            scroll_to_top();
        })
    };

    let on_restart = {
        let step = step.clone();
        let sheet = sheet.clone();
        Callback::from(move |_: MouseEvent| {
            sheet.set(AnswerSheet::new());
            step.set(FunnelStep::Quiz);
            scroll_to_top();
        })
    };

    match *step {
        FunnelStep::Content => html! {
            <>
                <ChapterNav chapters={chapters()} />
                <Content on_start={on_start} />
            </>
        },
        FunnelStep::Form => html! {
            <UserForm
                title="Découvrez votre profil de gestion"
                subtitle="Quelques informations avant le questionnaire, pour personnaliser vos résultats"
                accent={ACCENT}
                requirements={Requirements { email: true, company: true }}
                on_submit={on_form_submit}
                on_back={goto(FunnelStep::Content)}
            />
        },
        FunnelStep::Quiz => html! {
            <QuizView
                sections={&SECTIONS[..]}
                accent={ACCENT}
                on_complete={on_quiz_complete}
                on_back={goto(FunnelStep::Form)}
            />
        },
        FunnelStep::Results => match &*user {
            Some(info) => html! {
                <Results user={info.clone()} sheet={(*sheet).clone()} on_restart={on_restart} />
            },
            None => html! {
                <div class="guide-loading"><p>{"Chargement des résultats..."}</p></div>
            },
        },
    }
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    on_start: Callback<MouseEvent>,
}

#[function_component(Content)]
fn content(props: &ContentProps) -> Html {
    let chapter_bodies = [
        (1u8, "Qu'est-ce que le contrôle de gestion ?", "Le contrôle de gestion est l'ensemble des dispositifs qui permettent de piloter la performance : fixer des objectifs chiffrés, mesurer le réalisé et analyser les écarts pour décider."),
        (2, "Pourquoi est-il important ?", "Sans contrôle de gestion, le dirigeant découvre sa rentabilité une fois par an, au bilan. Avec, il la suit chaque mois et peut corriger avant que l'écart ne devienne un problème."),
        (3, "Différence entre contrôle de gestion et comptabilité", "La comptabilité enregistre le passé pour des tiers (administration, banque). Le contrôle de gestion exploite ces mêmes chiffres pour éclairer les décisions internes à venir."),
        (4, "Les différentes formes de contrôle", "Contrôle budgétaire, comptabilité analytique, tableaux de bord, analyse des coûts : chaque forme répond à une question différente et se combine avec les autres."),
        (5, "Le rôle du contrôleur de gestion", "Il conçoit les outils de mesure, produit les analyses et challenge les opérationnels. Dans une PME, ce rôle est souvent porté à temps partagé."),
        (6, "Les outils clés du contrôle de gestion", "Budget prévisionnel, tableau de bord mensuel, comptabilité analytique et prévision de trésorerie forment le socle minimal d'un pilotage sérieux."),
        (7, "Les étapes pour mettre en place un contrôle de gestion", "Diagnostic de l'existant, choix des indicateurs, construction du budget, mise en place de la routine mensuelle : la démarche se déroule en quelques mois, pas en années."),
        (8, "Contrôleur de gestion vs Expert-comptable", "L'expert-comptable garantit la conformité des comptes. Le contrôleur de gestion les fait parler. Les deux rôles sont complémentaires, pas concurrents."),
        (9, "Quels outils informatiques ?", "Du tableur à l'ERP (Odoo), en passant par les outils de trésorerie (Agicap) et de BI, le bon outil dépend de votre taille et de votre maturité."),
        (10, "Avantages et limites", "Le contrôle de gestion éclaire les décisions mais ne les prend pas. Il demande de la rigueur dans la saisie et un minimum de temps consacré à l'analyse."),
        (11, "Travailler avec un cabinet comptable", "Un cabinet qui connaît vos outils et reçoit des données structurées produit des comptes plus vite et peut jouer un vrai rôle de conseil."),
    ];

    html! {
        <div class="guide-cdg">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-cdg-hero">
                <span class="guide-cdg-badge">{"📈 Guide complet + questionnaire"}</span>
                <h1>{"Mettre en place un contrôle de gestion dans votre PME"}</h1>
                <p>{"Onze chapitres pour comprendre le contrôle de gestion, puis un questionnaire de 10 questions pour situer votre profil parmi 5 niveaux de maturité."}</p>
                <button class="guide-cdg-cta" onclick={props.on_start.clone()}>
                    {"🧪 Découvrir mon profil (3 min)"}
                </button>
            </section>

            {
                chapter_bodies.iter().map(|(id, title, body)| html! {
                    <section id={format!("chapter-{id}")} class="guide-cdg-chapter">
                        <h2>{format!("{id}. {title}")}</h2>
                        <p>{*body}</p>
                    </section>
                }).collect::<Html>()
            }

            <section class="guide-cdg-footer-cta">
                <h2>{"Quel est votre profil de gestion ?"}</h2>
                <p>{"10 questions, 5 profils, des recommandations adaptées à votre niveau."}</p>
                <button class="guide-cdg-cta" onclick={props.on_start.clone()}>
                    {"Commencer le questionnaire"}
                </button>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ResultsProps {
    user: UserInfo,
    sheet: AnswerSheet,
    on_restart: Callback<MouseEvent>,
}

#[function_component(Results)]
fn results(props: &ResultsProps) -> Html {
    let breakdown = tally(&props.sheet, &SECTIONS);
    let score = breakdown.total;
    let profile = profile_for(score);
    let percentage = (score / MAX_SCORE * 100.0).round();

    html! {
        <div class="guide-cdg">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-cdg-hero results">
                <span class="guide-cdg-badge">{"Résultats du questionnaire"}</span>
                <h1>{format!("Voici votre profil, {} !", props.user.first_name)}</h1>
                <p>{"Basé sur vos réponses, nous avons analysé votre niveau de maturité en contrôle de gestion."}</p>
                <div class="guide-cdg-score-circle">
                    <span class="guide-cdg-score-value">{format_score(score)}</span>
                    <span class="guide-cdg-score-max">{"sur 50 points"}</span>
                </div>
            </section>

            <div class="guide-cdg-results">
                <div class="guide-cdg-profile" style={format!("border-color: {};", profile.accent)}>
                    <div class="guide-cdg-profile-head">
                        <span class="guide-cdg-profile-emoji">{profile.emoji}</span>
                        <div>
                            <p class="guide-cdg-profile-label">{"Votre profil"}</p>
                            <h2 style={format!("color: {};", profile.accent)}>{profile.name}</h2>
                        </div>
                        <span class="guide-cdg-profile-score">
                            {format!("{} / 50 points", format_score(score))}
                        </span>
                    </div>
                    <p>{profile.description}</p>
                </div>

                <div class="guide-cdg-card">
                    <h3>{"Où vous situez-vous ?"}</h3>
                    <div class="guide-cdg-scale">
                        <div class="guide-cdg-scale-bar" />
                        <div
                            class="guide-cdg-scale-marker"
                            style={format!("left: {percentage}%;")}
                        />
                    </div>
                    <div class="guide-cdg-scale-labels">
                        <span>{"Débutant"}<br />{"0-10"}</span>
                        <span>{"Basique"}<br />{"11-20"}</span>
                        <span>{"Intermédiaire"}<br />{"21-30"}</span>
                        <span>{"Structuré"}<br />{"31-40"}</span>
                        <span>{"Avancé"}<br />{"41-50"}</span>
                    </div>
                </div>

                <div class="guide-cdg-card">
                    <h3>{"📋 Nos recommandations pour vous"}</h3>
                    <div class="guide-cdg-recommendations">
                        {
                            profile.recommendations.iter().enumerate().map(|(i, rec)| html! {
                                <div class="guide-cdg-recommendation">
                                    <span class="guide-cdg-recommendation-rank">{i + 1}</span>
                                    <span>{*rec}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="guide-cdg-next-steps">
                    <h3>{"➡️ Prochaines étapes"}</h3>
                    {
                        profile.next_steps.iter().map(|s| html! {
                            <div class="guide-cdg-next-step">
                                <span>{"✓"}</span>
                                <p>{*s}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="guide-cdg-card">
                    <h3>{"Récapitulatif de votre profil"}</h3>
                    <div class="guide-cdg-summary">
                        <div>
                            <p class="guide-cdg-summary-label">{"Entreprise"}</p>
                            <p class="guide-cdg-summary-value">{&props.user.company}</p>
                        </div>
                        <div>
                            <p class="guide-cdg-summary-label">{"Votre rôle"}</p>
                            <p class="guide-cdg-summary-value">{&props.user.role}</p>
                        </div>
                        <div>
                            <p class="guide-cdg-summary-label">{"Taille"}</p>
                            <p class="guide-cdg-summary-value">{&props.user.employees}</p>
                        </div>
                        <div>
                            <p class="guide-cdg-summary-label">{"Score obtenu"}</p>
                            <p class="guide-cdg-summary-value">
                                {format!("{} points sur 50", format_score(score))}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="guide-cdg-final-cta">
                    <h2>{"Besoin d'un accompagnement personnalisé ?"}</h2>
                    <p>{"Nos experts peuvent vous aider à structurer votre contrôle de gestion et à mettre en place les outils adaptés à votre entreprise."}</p>
                    <div class="guide-cdg-final-actions">
                        <Link<Route> to={Route::Contact} classes="guide-cdg-cta">
                            {"Prendre rendez-vous"}
                        </Link<Route>>
                        <button class="guide-cdg-cta ghost" onclick={props.on_restart.clone()}>
                            {"🔄 Refaire le questionnaire"}
                        </button>
                    </div>
                </div>

                <div class="guide-cdg-back">
                    <Link<Route> to={Route::Ressources}>
                        {"← Retour aux ressources"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

fn format_score(score: f32) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i32)
    } else {
        format!("{score:.1}")
    }
}

const GUIDE_STYLE: &str = r#"
.guide-cdg {
    padding-top: 74px;
    min-height: 100vh;
    background: #f9fafb;
    color: #1f2937;
}
.guide-cdg-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
}
.guide-cdg-hero h1 {
    font-size: 2.5rem;
    color: #ffffff;
    max-width: 760px;
    margin: 0 auto 1.25rem;
}
.guide-cdg-hero p {
    font-size: 1.15rem;
    color: rgba(255, 255, 255, 0.75);
    max-width: 620px;
    margin: 0 auto 2rem;
    line-height: 1.7;
}
.guide-cdg-hero.results {
    padding-bottom: 6rem;
}
.guide-cdg-badge {
    display: inline-block;
    background: rgba(255, 255, 255, 0.15);
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 600;
    padding: 0.375rem 1rem;
    border-radius: 9999px;
    margin-bottom: 1.25rem;
}
.guide-cdg-cta {
    display: inline-block;
    padding: 1rem 2rem;
    border: none;
    border-radius: 12px;
    background: #fe981a;
    color: #ffffff;
    font-size: 1rem;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: all 0.2s;
}
.guide-cdg-cta:hover {
    background: #e8870f;
    box-shadow: 0 10px 20px rgba(254, 152, 26, 0.3);
}
.guide-cdg-cta.ghost {
    background: rgba(255, 255, 255, 0.15);
    border: 1px solid rgba(255, 255, 255, 0.3);
}
.guide-cdg-cta.ghost:hover {
    background: rgba(255, 255, 255, 0.25);
    box-shadow: none;
}
.guide-cdg-chapter {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 2rem;
    border-bottom: 1px solid #e5e7eb;
    background: #ffffff;
}
.guide-cdg-chapter h2 {
    font-size: 1.5rem;
    color: #1a3c5e;
    margin-bottom: 1rem;
}
.guide-cdg-chapter p {
    color: #4b5563;
    line-height: 1.8;
}
.guide-cdg-footer-cta {
    text-align: center;
    padding: 4rem 2rem 6rem;
}
.guide-cdg-footer-cta h2 {
    font-size: 2rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-cdg-footer-cta p {
    color: #6b7280;
    margin-bottom: 2rem;
}
.guide-cdg-score-circle {
    display: inline-flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    width: 11rem;
    height: 11rem;
    border-radius: 9999px;
    border: 10px solid rgba(254, 152, 26, 0.85);
    margin-top: 2.5rem;
}
.guide-cdg-score-value {
    font-size: 3rem;
    font-weight: 700;
    color: #ffffff;
}
.guide-cdg-score-max {
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.6);
}
.guide-cdg-results {
    max-width: 760px;
    margin: -3rem auto 0;
    padding: 0 1.5rem 6rem;
}
.guide-cdg-profile {
    background: #ffffff;
    border: 2px solid;
    border-radius: 1.5rem;
    padding: 2rem;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
    margin-bottom: 2rem;
}
.guide-cdg-profile-head {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
    flex-wrap: wrap;
}
.guide-cdg-profile-emoji {
    font-size: 2.5rem;
}
.guide-cdg-profile-label {
    font-size: 0.8rem;
    color: #6b7280;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}
.guide-cdg-profile-head h2 {
    font-size: 2rem;
    margin: 0;
}
.guide-cdg-profile-score {
    margin-left: auto;
    font-size: 0.875rem;
    font-weight: 600;
    background: #f3f4f6;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
}
.guide-cdg-profile > p {
    color: #374151;
    font-size: 1.05rem;
    line-height: 1.7;
}
.guide-cdg-card {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
    margin-bottom: 2rem;
}
.guide-cdg-card h3 {
    font-size: 1.2rem;
    font-weight: 700;
    color: #111827;
    margin-bottom: 1.5rem;
}
.guide-cdg-scale {
    position: relative;
}
.guide-cdg-scale-bar {
    height: 1rem;
    border-radius: 9999px;
    background: linear-gradient(to right, #f87171, #fb923c, #facc15, #4ade80, #60a5fa);
    margin-bottom: 1rem;
}
.guide-cdg-scale-marker {
    position: absolute;
    top: -0.25rem;
    width: 1.5rem;
    height: 1.5rem;
    background: #ffffff;
    border: 4px solid #1a3c5e;
    border-radius: 9999px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transform: translateX(-50%);
}
.guide-cdg-scale-labels {
    display: flex;
    justify-content: space-between;
    font-size: 0.75rem;
    color: #6b7280;
    margin-top: 1.5rem;
    text-align: center;
}
.guide-cdg-recommendations {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
@media (max-width: 640px) {
    .guide-cdg-recommendations {
        grid-template-columns: 1fr;
    }
}
.guide-cdg-recommendation {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 1rem;
    background: #f9fafb;
    border-radius: 0.75rem;
    color: #374151;
}
.guide-cdg-recommendation-rank {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 1.5rem;
    height: 1.5rem;
    flex-shrink: 0;
    background: #fe981a;
    color: #ffffff;
    border-radius: 9999px;
    font-size: 0.8rem;
    font-weight: 700;
}
.guide-cdg-next-steps {
    background: linear-gradient(135deg, #111827 0%, #1f2937 100%);
    border-radius: 1rem;
    padding: 2rem;
    margin-bottom: 2rem;
}
.guide-cdg-next-steps h3 {
    font-size: 1.2rem;
    font-weight: 700;
    color: #ffffff;
    margin-bottom: 1.5rem;
}
.guide-cdg-next-step {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 1rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.75rem;
    margin-bottom: 1rem;
}
.guide-cdg-next-step span {
    color: #fe981a;
    font-weight: 700;
}
.guide-cdg-next-step p {
    color: rgba(255, 255, 255, 0.9);
    margin: 0;
}
.guide-cdg-summary {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}
@media (max-width: 640px) {
    .guide-cdg-summary {
        grid-template-columns: 1fr;
    }
}
.guide-cdg-summary-label {
    font-size: 0.875rem;
    color: #6b7280;
    margin-bottom: 0.25rem;
}
.guide-cdg-summary-value {
    font-size: 1.1rem;
    font-weight: 600;
    color: #111827;
}
.guide-cdg-final-cta {
    background: #1a3c5e;
    border-radius: 1.5rem;
    padding: 3rem 2rem;
    text-align: center;
    margin-bottom: 2rem;
}
.guide-cdg-final-cta h2 {
    font-size: 1.6rem;
    color: #ffffff;
    margin-bottom: 1rem;
}
.guide-cdg-final-cta p {
    color: rgba(255, 255, 255, 0.8);
    max-width: 520px;
    margin: 0 auto 2rem;
}
.guide-cdg-final-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
.guide-cdg-back {
    text-align: center;
}
.guide-cdg-back a {
    color: #1a3c5e;
    font-weight: 500;
    text-decoration: none;
}
.guide-cdg-back a:hover {
    color: #2d5a8a;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{max_score, AnswerValue};
    use crate::quiz::sequencer::{Advance, QuestionSequencer};

    fn run_all(value: AnswerValue) -> AnswerSheet {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        loop {
            match seq.answer(value) {
                Advance::Next => continue,
                Advance::Complete(sheet) => return sheet,
            }
        }
    }

    #[test]
    fn ten_weighted_questions_total_fifty() {
        assert_eq!(SECTIONS[0].questions.len(), 10);
        assert_eq!(max_score(&SECTIONS), MAX_SCORE);
    }

    #[test]
    fn profile_thresholds() {
        assert_eq!(profile_for(0.0).name, "Débutant");
        assert_eq!(profile_for(10.0).name, "Débutant");
        assert_eq!(profile_for(12.5).name, "Basique");
        assert_eq!(profile_for(20.0).name, "Basique");
        assert_eq!(profile_for(25.0).name, "Intermédiaire");
        assert_eq!(profile_for(35.0).name, "Structuré");
        assert_eq!(profile_for(41.0).name, "Avancé");
        assert_eq!(profile_for(50.0).name, "Avancé");
        // out-of-range scores settle on the top profile
        assert_eq!(profile_for(60.0).name, "Avancé");
    }

    #[test]
    fn partial_answers_score_half_weight() {
        let sheet = run_all(AnswerValue::Partial);
        assert_eq!(tally(&sheet, &SECTIONS).total, 25.0);
        assert_eq!(profile_for(25.0).name, "Intermédiaire");
    }

    #[test]
    fn extremes_hit_the_outer_profiles() {
        let top = tally(&run_all(AnswerValue::Yes), &SECTIONS).total;
        assert_eq!(top, MAX_SCORE);
        assert_eq!(profile_for(top).name, "Avancé");

        let bottom = tally(&run_all(AnswerValue::No), &SECTIONS).total;
        assert_eq!(bottom, 0.0);
        assert_eq!(profile_for(bottom).name, "Débutant");
    }

    #[test]
    fn score_formatting_drops_whole_number_fraction() {
        assert_eq!(format_score(25.0), "25");
        assert_eq!(format_score(27.5), "27.5");
    }
}
