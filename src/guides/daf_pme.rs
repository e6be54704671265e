use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chapter_nav::{Chapter, ChapterNav};
use crate::components::quiz_view::QuizView;
use crate::components::share_banner::ShareBanner;
use crate::components::user_form::UserForm;
use crate::quiz::model::{AnswerSheet, Question, Requirements, Section, UserInfo};
use crate::quiz::score::{tally, tier_for, MaturityTier, SectionBand};
use crate::quiz::storage::{fresh_id, DiagnosticResult, LocalStorageStore, ResultStore};
use crate::scroll_to_top;
use crate::Route;

const ACCENT: &str = "#1a3c5e";

pub const MAX_SCORE: f32 = 48.0;

/// The diagnostic opens with a dedicated intro screen before the form,
/// so the step machine is local to this funnel.
#[derive(Clone, Copy, PartialEq)]
enum Step {
    Content,
    Intro,
    Form,
    Quiz,
    Results,
}

pub static SECTIONS: [Section; 4] = [
    Section {
        id: "axe1",
        title: "Clarté & structure financière",
        icon: "🏛️",
        description: "Évalue les fondations de votre pilotage financier : budget, règles, indicateurs, lisibilité.",
        questions: &[
            Question::scaled(
                "q1",
                "Disposez-vous d'un budget annuel formalisé ?",
                2.0,
                ["Oui, suivi régulièrement", "Oui, mais peu utilisé", "Non"],
                "Vous disposez d'un véritable outil de pilotage.",
                "Le budget existe, mais il ne pilote pas réellement l'action.",
                "Vos décisions reposent principalement sur l'intuition.",
                1,
            ),
            Question::scaled(
                "q2",
                "Vos marges sont-elles connues par activité, produit ou client ?",
                2.0,
                ["Oui, clairement", "Approximativement", "Non"],
                "Vous savez précisément où vous gagnez (ou perdez) de l'argent.",
                "Certaines décisions restent prises avec un angle mort.",
                "La rentabilité réelle est partiellement invisible.",
                1,
            ),
            Question::scaled(
                "q3",
                "Les règles financières sont-elles claires et partagées ?",
                2.0,
                ["Oui", "Partiellement", "Non"],
                "L'organisation est transmissible et sécurisée.",
                "La structure existe mais reste fragile.",
                "Le fonctionnement repose sur des habitudes individuelles.",
                1,
            ),
            Question::scaled(
                "q4",
                "Les chiffres sont-ils disponibles à temps pour décider ?",
                2.0,
                ["Oui", "Avec délai", "Non"],
                "Les chiffres soutiennent réellement la stratégie.",
                "La visibilité existe, mais elle reste réactive.",
                "Les décisions arrivent souvent trop tard.",
                1,
            ),
            Question::scaled(
                "q5",
                "La finance est-elle dépendante d'une seule personne ?",
                2.0,
                ["Non", "En partie", "Oui"],
                "L'organisation est résiliente.",
                "Le risque est identifié mais pas totalement maîtrisé.",
                "Risque organisationnel élevé.",
                1,
            ),
            Question::scaled(
                "q6",
                "Les indicateurs clés sont-ils compris par la direction ?",
                2.0,
                ["Oui", "Partiellement", "Non"],
                "La finance parle un langage utile au dirigeant.",
                "L'analyse reste incomplète.",
                "Les chiffres ne jouent pas leur rôle décisionnel.",
                1,
            ),
        ],
    },
    Section {
        id: "axe2",
        title: "Coût invisible & charge mentale",
        icon: "🧠",
        description: "Évalue ce que votre organisation vous coûte sans forcément apparaître dans les comptes.",
        questions: &[
            Question::scaled(
                "q7",
                "Identifiez-vous clairement les tâches financières chronophages ?",
                2.0,
                ["Oui", "Intuitivement", "Non"],
                "Vous savez où agir en priorité.",
                "Vous ressentez la charge sans l'objectiver.",
                "Le temps perdu reste invisible.",
                2,
            ),
            Question::scaled(
                "q8",
                "Le suivi de trésorerie est-il anticipé ?",
                2.0,
                ["Oui", "Partiellement", "Non"],
                "Vous pilotez vos flux à moyen terme.",
                "Vous avez une vision courte.",
                "La trésorerie est subie.",
                2,
            ),
            Question::scaled(
                "q9",
                "Les clôtures génèrent-elles du stress ?",
                2.0,
                ["Rarement", "Parfois", "Souvent"],
                "Les processus sont maîtrisés.",
                "Des frictions subsistent.",
                "Système trop manuel ou mal structuré.",
                2,
            ),
            Question::scaled(
                "q10",
                "Les décisions sont-elles parfois retardées faute de chiffres ?",
                2.0,
                ["Non", "Parfois", "Oui"],
                "Les chiffres arrivent au bon moment.",
                "Le pilotage peut être amélioré.",
                "Le coût caché est stratégique.",
                2,
            ),
            Question::scaled(
                "q11",
                "Utilisez-vous encore beaucoup d'Excel « maison » ?",
                2.0,
                ["Non", "Un peu", "Oui"],
                "Les outils sont structurés.",
                "Transition en cours.",
                "Dépendance et risque élevés.",
                2,
            ),
            Question::scaled(
                "q12",
                "Le dirigeant porte-t-il seul la charge financière ?",
                2.0,
                ["Non", "En partie", "Oui"],
                "Le pilotage est collectif.",
                "Le partage progresse.",
                "Risque de surcharge et de décisions isolées.",
                2,
            ),
        ],
    },
    Section {
        id: "axe3",
        title: "Maturité du pilotage",
        icon: "🎯",
        description: "Mesure votre capacité à transformer les chiffres en décisions.",
        questions: &[
            Question::scaled(
                "q13",
                "Disposez-vous de tableaux de bord réguliers ?",
                2.0,
                ["Oui", "Occasionnels", "Non"],
                "Vision structurée.",
                "Vision irrégulière.",
                "Pilotage à vue.",
                3,
            ),
            Question::scaled(
                "q14",
                "Les chiffres servent-ils réellement à décider ?",
                2.0,
                ["Oui", "Parfois", "Rarement"],
                "La finance soutient la stratégie.",
                "Usage partiel.",
                "La finance est subie.",
                3,
            ),
            Question::scaled(
                "q15",
                "Les investissements sont-ils chiffrés avant décision ?",
                2.0,
                ["Oui", "Approximativement", "Non"],
                "Décisions rationnelles.",
                "Améliorable.",
                "Risque élevé.",
                3,
            ),
            Question::scaled(
                "q16",
                "Le dialogue avec les banques est-il fluide ?",
                2.0,
                ["Oui", "Variable", "Non"],
                "Position solide.",
                "Dépend du contexte.",
                "Crédibilité limitée.",
                3,
            ),
            Question::scaled(
                "q17",
                "La direction comprend-elle les enjeux financiers ?",
                2.0,
                ["Oui", "Partiellement", "Non"],
                "Alignement fort.",
                "Clarification nécessaire.",
                "Décalage stratégique.",
                3,
            ),
            Question::scaled(
                "q18",
                "Le pilotage est-il anticipatif ?",
                2.0,
                ["Oui", "Par moments", "Non"],
                "Vision long terme.",
                "Pilotage fragile.",
                "Gestion réactive.",
                3,
            ),
        ],
    },
    Section {
        id: "axe4",
        title: "Le bon moment",
        icon: "⏳",
        description: "Détermine si votre entreprise est prête pour un DAF.",
        questions: &[
            Question::scaled(
                "q19",
                "La complexité de l'entreprise augmente-t-elle ?",
                2.0,
                ["Oui", "Lentement", "Non"],
                "Croissance en complexité.",
                "Évolution progressive.",
                "Stabilité actuelle.",
                4,
            ),
            Question::scaled(
                "q20",
                "Le dirigeant manque-t-il de temps pour la finance ?",
                2.0,
                ["Oui", "Parfois", "Non"],
                "Besoin de délégation.",
                "Contraintes ponctuelles.",
                "Temps disponible.",
                4,
            ),
            Question::scaled(
                "q21",
                "Les enjeux financiers influencent-ils la stratégie ?",
                2.0,
                ["Fortement", "De plus en plus", "Peu"],
                "Finance stratégique.",
                "Importance croissante.",
                "Finance secondaire.",
                4,
            ),
            Question::scaled(
                "q22",
                "Les décisions financières engagent-elles l'avenir ?",
                2.0,
                ["Souvent", "Régulièrement", "Rarement"],
                "Décisions structurantes.",
                "Enjeux récurrents.",
                "Impact limité.",
                4,
            ),
            Question::scaled(
                "q23",
                "Ressentez-vous le besoin d'un regard externe structurant ?",
                2.0,
                ["Oui", "Parfois", "Non"],
                "Besoin identifié.",
                "Questionnement naissant.",
                "Autonomie suffisante.",
                4,
            ),
            Question::scaled(
                "q24",
                "Aujourd'hui, diriez-vous que le pilotage est suffisant ?",
                2.0,
                ["Oui", "En partie", "Non"],
                "Satisfaction actuelle.",
                "Marge de progression.",
                "Besoin d'amélioration.",
                4,
            ),
        ],
    },
];

pub static TIERS: [MaturityTier; 3] = [
    MaturityTier {
        min: 0.0,
        max: 16.0,
        label: "Pilotage à construire",
        emoji: "🔴",
        description: "Les fondations financières restent à poser",
        recommendation: "Avant même de penser DAF, structurez le socle : budget annuel, prévision de trésorerie et tableau de bord mensuel. Un accompagnement ponctuel peut accélérer cette mise en place.",
    },
    MaturityTier {
        min: 16.5,
        max: 32.0,
        label: "Pilotage en construction",
        emoji: "🟠",
        description: "Des éléments solides existent mais restent fragiles",
        recommendation: "Votre organisation financière progresse. Un DAF à temps partagé peut consolider l'existant et transformer vos chiffres en décisions, sans le coût d'un poste à temps plein.",
    },
    MaturityTier {
        min: 32.5,
        max: 48.0,
        label: "Pilotage structuré",
        emoji: "🟢",
        description: "Votre entreprise pilote avec méthode",
        recommendation: "Vos fondations sont solides. La question n'est plus « faut-il structurer ? » mais « qui porte la dimension stratégique de la finance ? ». C'est typiquement le moment où un DAF crée le plus de valeur.",
    },
];

/// Reading of the fourth axis, which measures timing rather than maturity.
fn timing_verdict(band: SectionBand) -> &'static str {
    match band {
        SectionBand::Low => {
            "Vos réponses suggèrent que le besoin d'un DAF n'est pas encore pressant. Concentrez-vous sur les fondations du pilotage."
        }
        SectionBand::Mid => {
            "Les signaux s'accumulent : complexité croissante, temps qui manque. Le sujet DAF mérite d'être instruit dans les 6 à 12 mois."
        }
        SectionBand::High => {
            "Les signaux convergent : votre entreprise est prête pour un DAF, au moins à temps partagé. Le bon moment, c'est maintenant."
        }
    }
}

fn chapters() -> Vec<Chapter> {
    vec![
        Chapter { id: 1, title: "Introduction : Pourquoi ce guide ?" },
        Chapter { id: 2, title: "Le DAF, bras droit stratégique" },
        Chapter { id: 3, title: "Pourquoi un seul profil ne peut pas tout faire" },
        Chapter { id: 4, title: "Pourquoi un DAF devient indispensable dans une PME" },
        Chapter { id: 5, title: "DAF à temps partiel + outils digitaux" },
        Chapter { id: 6, title: "5 signaux que vous avez besoin d'un DAF" },
        Chapter { id: 7, title: "Démarrer concrètement en 30 jours" },
        Chapter { id: 8, title: "Conclusion – Le pilotage, c'est une posture" },
    ]
}

#[function_component(GuideDafPme)]
pub fn guide_daf_pme() -> Html {
    let step = use_state(|| Step::Content);
    let user = use_state(|| None::<UserInfo>);
    let sheet = use_state(AnswerSheet::new);

    let goto = |target: Step| {
        let step = step.clone();
        Callback::from(move |_: ()| {
            step.set(target);
            scroll_to_top();
        })
    };

    let goto_click = |target: Step| {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            step.set(target);
            scroll_to_top();
        })
    };

    let on_form_submit = {
        let step = step.clone();
        let user = user.clone();
        Callback::from(move |info: UserInfo| {
            user.set(Some(info));
            step.set(Step::Quiz);
            scroll_to_top();
        })
    };

    let on_quiz_complete = {
        let step = step.clone();
        let user = user.clone();
        let sheet = sheet.clone();
        Callback::from(move |answers: AnswerSheet| {
            if let Some(info) = &*user {
                let breakdown = tally(&answers, &SECTIONS);
                let result =
                    DiagnosticResult::new(fresh_id(), &breakdown, &answers, info.clone());
                if let Err(err) = LocalStorageStore.save(&result) {
                    error!("failed to persist diagnostic result: {err}");
                }
            }
            sheet.set(answers);
            step.set(Step::Results);
            scroll_to_top();
        })
    };

    match *step {
        Step::Content => html! {
            <>
                <ShareBanner />
                <ChapterNav chapters={chapters()} />
                <Content on_start={goto_click(Step::Intro)} />
            </>
        },
        Step::Intro => html! {
            <Intro
                on_continue={goto_click(Step::Form)}
                on_back={goto_click(Step::Content)}
            />
        },
        Step::Form => html! {
            <UserForm
                title="Avant de commencer..."
                subtitle="Pour personnaliser votre diagnostic, merci de renseigner quelques informations."
                badge="🧭 Diagnostic de maturité financière"
                accent={ACCENT}
                requirements={Requirements { email: false, company: true }}
                on_submit={on_form_submit}
                on_back={goto(Step::Intro)}
            />
        },
        Step::Quiz => html! {
            <QuizView
                sections={&SECTIONS[..]}
                accent={ACCENT}
                on_complete={on_quiz_complete}
                on_back={goto(Step::Form)}
            />
        },
        Step::Results => match &*user {
            Some(info) => html! {
                <Results user={info.clone()} sheet={(*sheet).clone()} />
            },
            None => html! {
                <div class="guide-loading"><p>{"Chargement du diagnostic..."}</p></div>
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
        (1u8, "Introduction : Pourquoi ce guide ?", "La plupart des dirigeants de PME pilotent leur entreprise avec un expert-comptable et un tableur. Ce guide explique à partir de quand ce duo ne suffit plus."),
        (2, "Le DAF, bras droit stratégique", "Le directeur financier n'est pas un super-comptable. Il traduit les chiffres en décisions : investir ou pas, embaucher ou pas, négocier quoi avec la banque."),
        (3, "Pourquoi un seul profil ne peut pas tout faire", "Tenue des comptes, conformité fiscale, pilotage stratégique : trois métiers différents. Les confier à la même personne, c'est garantir qu'au moins un des trois sera mal fait."),
        (4, "Pourquoi un DAF devient indispensable dans une PME", "Passé un certain seuil de complexité (multi-activités, croissance, financement), le coût de l'absence de DAF dépasse celui de sa présence."),
        (5, "DAF à temps partiel + outils digitaux", "Un DAF à temps partagé, appuyé sur un système d'information moderne, apporte 80 % de la valeur d'un DAF à temps plein pour une fraction du coût."),
        (6, "5 signaux que vous avez besoin d'un DAF", "Décisions retardées faute de chiffres, trésorerie subie, clôtures stressantes, dépendance à une personne, dialogue bancaire difficile : au-delà de deux signaux, le sujet est ouvert."),
        (7, "Démarrer concrètement en 30 jours", "Semaine 1 : diagnostic. Semaines 2-3 : prévision de trésorerie et tableau de bord. Semaine 4 : routine mensuelle. Le pilotage s'installe vite quand il est bien cadré."),
        (8, "Conclusion – Le pilotage, c'est une posture", "Plus que des outils, le pilotage est une discipline : regarder les chiffres chaque mois, décider en conséquence, et assumer les arbitrages."),
    ];

    html! {
        <div class="guide-daf">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-daf-hero">
                <span class="guide-daf-badge">{"🧭 Guide + diagnostic confidentiel"}</span>
                <h1>{"Votre entreprise a-t-elle réellement besoin d'un Directeur Financier ?"}</h1>
                <p>{"Huit chapitres pour comprendre le rôle du DAF en PME, puis un diagnostic de maturité financière en 24 questions sur 4 axes."}</p>
                <button class="guide-daf-cta" onclick={props.on_start.clone()}>
                    {"Faire le diagnostic"}
                </button>
            </section>

            {
                chapter_bodies.iter().map(|(id, title, body)| html! {
                    <section id={format!("chapter-{id}")} class="guide-daf-chapter">
                        <h2>{format!("{id}. {title}")}</h2>
                        <p>{*body}</p>
                    </section>
                }).collect::<Html>()
            }

            <section class="guide-daf-footer-cta">
                <h2>{"Et vous, où en êtes-vous ?"}</h2>
                <p>{"24 questions, 4 axes, un verdict personnalisé sur le bon moment pour un DAF."}</p>
                <button class="guide-daf-cta" onclick={props.on_start.clone()}>
                    {"Commencer le diagnostic"}
                </button>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct IntroProps {
    on_continue: Callback<MouseEvent>,
    on_back: Callback<MouseEvent>,
}

#[function_component(Intro)]
fn intro(props: &IntroProps) -> Html {
    let reassurances = [
        ("⏱️", "5 à 7 min"),
        ("🧠", "Aucune « bonne » réponse"),
        ("🔒", "100% confidentiel"),
        ("🎯", "Résultat personnalisé"),
    ];

    html! {
        <div class="guide-daf">
            <style>{GUIDE_STYLE}</style>
            <section class="guide-daf-intro">
                <span class="guide-daf-intro-icon">{"📋"}</span>
                <h1>
                    {"Votre entreprise a-t-elle réellement besoin d'un "}
                    <span class="guide-daf-highlight">{"Directeur Financier"}</span>
                    {" ?"}
                </h1>
                <p class="guide-daf-intro-sub">
                    {"Un diagnostic de maturité financière pour dirigeants de PME."}
                    <br />
                    {"Clair, confidentiel, sans engagement."}
                </p>

                <div class="guide-daf-reassurance">
                    {
                        reassurances.iter().map(|(icon, text)| html! {
                            <div class="guide-daf-reassurance-item">
                                <span>{*icon}</span>
                                <p>{*text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <p class="guide-daf-intro-quote">
                    {"« Ce diagnostic ne vous dira pas quoi faire. Il vous aidera à comprendre ce que vos réponses révèlent. »"}
                </p>

                <div class="guide-daf-intro-actions">
                    <button class="guide-daf-cta" onclick={props.on_continue.clone()}>
                        {"Commencer le diagnostic"}
                    </button>
                    <button class="guide-daf-cta ghost" onclick={props.on_back.clone()}>
                        {"Retour au guide"}
                    </button>
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ResultsProps {
    user: UserInfo,
    sheet: AnswerSheet,
}

#[function_component(Results)]
fn results(props: &ResultsProps) -> Html {
    let breakdown = tally(&props.sheet, &SECTIONS);
    let score = breakdown.total;
    let Some(tier) = tier_for(score, &TIERS) else {
        return html! {};
    };
    let timing = breakdown
        .per_section
        .iter()
        .find(|s| s.section.id == "axe4")
        .map(|s| timing_verdict(s.band()));

    html! {
        <div class="guide-daf">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-daf-hero results">
                <span class="guide-daf-badge">{"Résultats du diagnostic"}</span>
                <h1>{format!("Votre diagnostic, {}", props.user.first_name)}</h1>
                <p>{"Voici ce que vos réponses révèlent de votre pilotage financier."}</p>
            </section>

            <div class="guide-daf-results">
                <div class="guide-daf-score-card">
                    <div class="guide-daf-score-circle">
                        <span class="guide-daf-score-value">{score as u32}</span>
                        <span class="guide-daf-score-max">{format!("/ {}", MAX_SCORE as u32)}</span>
                    </div>
                    <h2>{format!("{} {}", tier.emoji, tier.label)}</h2>
                    <p>{tier.description}</p>
                    <div class="guide-daf-recommendation">
                        <p class="guide-daf-recommendation-label">{"📌 Notre lecture :"}</p>
                        <p>{tier.recommendation}</p>
                    </div>
                </div>

                if let Some(verdict) = timing {
                    <div class="guide-daf-timing">
                        <h3>{"⏳ Le bon moment ?"}</h3>
                        <p>{verdict}</p>
                    </div>
                }

                <div class="guide-daf-axes">
                    <h3>{"Vos 4 axes en détail"}</h3>
                    {
                        breakdown.per_section.iter().map(|entry| html! {
                            <div class="guide-daf-axis">
                                <div class="guide-daf-axis-head">
                                    <span>{format!("{} {}", entry.section.icon, entry.section.title)}</span>
                                    <span class="guide-daf-axis-score">
                                        {format!("{}/{}", entry.points as u32, entry.max as u32)}
                                    </span>
                                </div>
                                <div class="guide-daf-axis-track">
                                    <div
                                        class="guide-daf-axis-fill"
                                        style={format!("width: {}%;", entry.percentage().round())}
                                    />
                                </div>
                                <p class="guide-daf-axis-desc">{entry.section.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="guide-daf-details">
                    <h3>{"Ce que chaque réponse signifie"}</h3>
                    {
                        SECTIONS.iter().map(|section| html! {
                            <div class="guide-daf-detail-block">
                                <h4>{format!("{} {}", section.icon, section.title)}</h4>
                                {
                                    section.questions.iter().map(|q| {
                                        let points = props.sheet.get(q.id).unwrap_or(0.0);
                                        html! {
                                            <div class="guide-daf-detail">
                                                <p class="guide-daf-detail-question">{q.text}</p>
                                                <p class="guide-daf-detail-answer">
                                                    <span>{q.response(points).value().icon()}</span>
                                                    {" "}
                                                    {q.label_for(q.response(points).value())}
                                                </p>
                                                <p class="guide-daf-detail-meaning">{q.feedback(points)}</p>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="guide-daf-final-cta">
                    <h3>{"Envie d'en parler ?"}</h3>
                    <p>{"30 minutes avec un DAF à temps partagé pour confronter ce diagnostic à votre réalité. Sans engagement."}</p>
                    <div class="guide-daf-final-actions">
                        <Link<Route> to={Route::Contact} classes="guide-daf-cta">
                            {"📞 Prendre rendez-vous"}
                        </Link<Route>>
                        <Link<Route> to={Route::Ressources} classes="guide-daf-cta ghost">
                            {"📚 Voir nos autres guides"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}

const GUIDE_STYLE: &str = r#"
.guide-daf {
    padding-top: 74px;
    min-height: 100vh;
    background: #f9fafb;
    color: #1f2937;
}
.guide-daf-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
}
.guide-daf-hero h1 {
    font-size: 2.5rem;
    color: #ffffff;
    max-width: 760px;
    margin: 0 auto 1.25rem;
}
.guide-daf-hero p {
    font-size: 1.15rem;
    color: rgba(255, 255, 255, 0.75);
    max-width: 620px;
    margin: 0 auto 2rem;
    line-height: 1.7;
}
.guide-daf-badge {
    display: inline-block;
    background: rgba(255, 255, 255, 0.15);
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 600;
    padding: 0.375rem 1rem;
    border-radius: 9999px;
    margin-bottom: 1.25rem;
}
.guide-daf-cta {
    display: inline-block;
    padding: 1rem 2rem;
    border: none;
    border-radius: 9999px;
    background: #fe981a;
    color: #ffffff;
    font-size: 0.95rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    text-decoration: none;
    cursor: pointer;
    transition: all 0.2s;
}
.guide-daf-cta:hover {
    background: #e8870f;
    box-shadow: 0 10px 20px rgba(254, 152, 26, 0.3);
}
.guide-daf-cta.ghost {
    background: transparent;
    border: 1px solid #d1d5db;
    color: #374151;
}
.guide-daf-hero .guide-daf-cta.ghost,
.guide-daf-final-cta .guide-daf-cta.ghost {
    border-color: rgba(255, 255, 255, 0.4);
    color: #ffffff;
}
.guide-daf-cta.ghost:hover {
    background: rgba(0, 0, 0, 0.04);
    box-shadow: none;
}
.guide-daf-chapter {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 2rem;
    border-bottom: 1px solid #e5e7eb;
    background: #ffffff;
}
.guide-daf-chapter h2 {
    font-size: 1.5rem;
    color: #1a3c5e;
    margin-bottom: 1rem;
}
.guide-daf-chapter p {
    color: #4b5563;
    line-height: 1.8;
}
.guide-daf-footer-cta {
    text-align: center;
    padding: 4rem 2rem 6rem;
}
.guide-daf-footer-cta h2 {
    font-size: 2rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-daf-footer-cta p {
    color: #6b7280;
    margin-bottom: 2rem;
}
.guide-daf-intro {
    max-width: 680px;
    margin: 0 auto;
    padding: 8rem 2rem 6rem;
    text-align: center;
}
.guide-daf-intro-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 5rem;
    height: 5rem;
    font-size: 2.5rem;
    background: rgba(26, 60, 94, 0.08);
    border-radius: 1.5rem;
    margin-bottom: 2rem;
}
.guide-daf-intro h1 {
    font-size: 2.4rem;
    color: #111827;
    margin-bottom: 1.5rem;
}
.guide-daf-highlight {
    color: #fe981a;
}
.guide-daf-intro-sub {
    font-size: 1.2rem;
    color: #4b5563;
    margin-bottom: 2.5rem;
    line-height: 1.7;
}
.guide-daf-reassurance {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    margin-bottom: 3rem;
}
@media (max-width: 640px) {
    .guide-daf-reassurance {
        grid-template-columns: repeat(2, 1fr);
    }
}
.guide-daf-reassurance-item {
    padding: 1rem;
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 0.75rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.04);
}
.guide-daf-reassurance-item span {
    font-size: 1.5rem;
    display: block;
    margin-bottom: 0.5rem;
}
.guide-daf-reassurance-item p {
    font-size: 0.875rem;
    color: #4b5563;
    margin: 0;
}
.guide-daf-intro-quote {
    color: #9ca3af;
    font-style: italic;
    font-size: 0.95rem;
    margin-bottom: 2.5rem;
}
.guide-daf-intro-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
.guide-daf-results {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 1.5rem 6rem;
}
.guide-daf-score-card {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1.5rem;
    padding: 2rem;
    text-align: center;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
    margin-bottom: 2rem;
}
.guide-daf-score-circle {
    display: inline-flex;
    align-items: baseline;
    justify-content: center;
    gap: 0.25rem;
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
    color: #ffffff;
    margin-bottom: 1.5rem;
    padding-top: 2.9rem;
}
.guide-daf-score-value {
    font-size: 2rem;
    font-weight: 700;
}
.guide-daf-score-max {
    font-size: 1rem;
    opacity: 0.7;
}
.guide-daf-score-card h2 {
    font-size: 1.5rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-daf-score-card > p {
    color: #6b7280;
    margin-bottom: 1rem;
}
.guide-daf-recommendation {
    background: #fff4e5;
    border: 1px solid #fde4c0;
    border-radius: 0.75rem;
    padding: 1rem;
    text-align: left;
}
.guide-daf-recommendation-label {
    font-size: 0.875rem;
    color: #6b7280;
    margin-bottom: 0.25rem;
}
.guide-daf-recommendation p:last-child {
    font-weight: 500;
    color: #111827;
    line-height: 1.6;
}
.guide-daf-timing {
    background: #1a3c5e;
    border-radius: 1rem;
    padding: 1.75rem 2rem;
    margin-bottom: 2rem;
}
.guide-daf-timing h3 {
    color: #fe981a;
    font-size: 1.1rem;
    margin-bottom: 0.75rem;
}
.guide-daf-timing p {
    color: rgba(255, 255, 255, 0.9);
    line-height: 1.7;
    margin: 0;
}
.guide-daf-axes {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    padding: 2rem;
    margin-bottom: 2rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}
.guide-daf-axes h3,
.guide-daf-details h3 {
    font-size: 1.2rem;
    font-weight: 700;
    color: #111827;
    margin-bottom: 1.5rem;
}
.guide-daf-axis {
    margin-bottom: 1.5rem;
}
.guide-daf-axis-head {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 0.5rem;
    font-weight: 500;
    color: #111827;
}
.guide-daf-axis-score {
    color: #1a3c5e;
    font-weight: 700;
}
.guide-daf-axis-track {
    height: 0.5rem;
    background: #f3f4f6;
    border-radius: 9999px;
    overflow: hidden;
    margin-bottom: 0.4rem;
}
.guide-daf-axis-fill {
    height: 100%;
    background: linear-gradient(to right, #1a3c5e, #fe981a);
    border-radius: 9999px;
    transition: width 0.5s;
}
.guide-daf-axis-desc {
    font-size: 0.85rem;
    color: #6b7280;
    margin: 0;
}
.guide-daf-details {
    margin-bottom: 2rem;
}
.guide-daf-detail-block {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}
.guide-daf-detail-block h4 {
    font-weight: 700;
    color: #111827;
    margin-bottom: 1rem;
}
.guide-daf-detail {
    padding: 0.9rem 0;
    border-bottom: 1px solid #f3f4f6;
}
.guide-daf-detail:last-child {
    border-bottom: none;
}
.guide-daf-detail-question {
    font-size: 0.9rem;
    color: #374151;
    margin-bottom: 0.25rem;
}
.guide-daf-detail-answer {
    font-size: 0.875rem;
    font-weight: 600;
    color: #1a3c5e;
    margin-bottom: 0.25rem;
}
.guide-daf-detail-meaning {
    font-size: 0.85rem;
    color: #6b7280;
    font-style: italic;
    margin: 0;
}
.guide-daf-final-cta {
    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
    border-radius: 1.5rem;
    padding: 3rem 2rem;
    text-align: center;
}
.guide-daf-final-cta h3 {
    font-size: 1.5rem;
    color: #ffffff;
    margin-bottom: 0.75rem;
}
.guide-daf-final-cta p {
    color: rgba(255, 255, 255, 0.8);
    max-width: 480px;
    margin: 0 auto 2rem;
}
.guide-daf-final-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{max_score, total_questions, AnswerValue};
    use crate::quiz::sequencer::{Advance, QuestionSequencer};
    use crate::quiz::storage::MemoryStore;

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
    fn four_axes_of_six_questions() {
        assert_eq!(SECTIONS.len(), 4);
        for section in &SECTIONS {
            assert_eq!(section.questions.len(), 6);
            assert_eq!(section.max_points(), 12.0);
        }
        assert_eq!(total_questions(&SECTIONS), 24);
        assert_eq!(max_score(&SECTIONS), MAX_SCORE);
    }

    #[test]
    fn every_question_carries_custom_labels() {
        for section in &SECTIONS {
            for q in section.questions {
                assert!(q.labels.is_some(), "{} has no labels", q.id);
                assert!(q.feedback_partial.is_some(), "{} has no mid feedback", q.id);
            }
        }
    }

    #[test]
    fn tiers_cover_every_reachable_score() {
        let mut score = 0.0;
        while score <= MAX_SCORE {
            let matching = TIERS.iter().filter(|t| t.contains(score)).count();
            assert_eq!(matching, 1, "score {score}");
            score += 1.0;
        }
    }

    #[test]
    fn graded_answers_score_two_one_zero() {
        let sheet = run_all(AnswerValue::Partial);
        let breakdown = tally(&sheet, &SECTIONS);
        assert_eq!(breakdown.total, 24.0);
        for entry in &breakdown.per_section {
            assert_eq!(entry.points, 6.0);
            assert_eq!(entry.band(), SectionBand::Mid);
        }
    }

    #[test]
    fn completed_diagnostic_round_trips_through_the_store() {
        let sheet = run_all(AnswerValue::Yes);
        let breakdown = tally(&sheet, &SECTIONS);
        let info = UserInfo {
            first_name: "Claire".into(),
            last_name: "Moreau".into(),
            email: "claire@exemple.fr".into(),
            company: "Moreau SAS".into(),
            role: "Dirigeant / Gérant".into(),
            employees: "11-50".into(),
        };
        let result = DiagnosticResult::new("diag_test_1".into(), &breakdown, &sheet, info);

        let store = MemoryStore(std::cell::RefCell::new(None));
        store.save(&result).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.total_score, MAX_SCORE);
        assert_eq!(loaded.axe_scores.get("axe4"), Some(&12.0));
        assert_eq!(loaded.user_info.company, "Moreau SAS");
    }

    #[test]
    fn timing_verdict_tracks_the_fourth_axis() {
        assert!(timing_verdict(SectionBand::High).contains("maintenant"));
        assert!(timing_verdict(SectionBand::Low).contains("pas encore"));
    }
}
