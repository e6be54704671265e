use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chapter_nav::{Chapter, ChapterNav};
use crate::components::confetti::Confetti;
use crate::components::quiz_view::QuizView;
use crate::components::user_form::UserForm;
use crate::quiz::model::{AnswerSheet, FunnelStep, Question, Requirements, Section, UserInfo};
use crate::quiz::score::{priority_order, tally, tier_for, MaturityTier, SectionBand};
use crate::scroll_to_top;
use crate::Route;

const ACCENT: &str = "#714b67";

pub const MAX_SCORE: f32 = 31.0;
const CONFETTI_THRESHOLD: f32 = 21.0;

pub static SECTIONS: [Section; 6] = [
    Section {
        id: "section1",
        title: "Automatisation avec Odoo",
        icon: "⚙️",
        description: "Chapitre 6",
        questions: &[
            Question::yes_no(
                "q1",
                "Utilisez-vous Odoo pour la facturation client et fournisseur ?",
                "Excellent ! Odoo est au cœur de vos flux comptables.",
                "Centraliser la facturation dans Odoo vous permettra d'automatiser beaucoup de tâches.",
                6,
            ),
            Question::yes_no(
                "q2",
                "Votre stock est-il géré dans Odoo ?",
                "Parfait ! La valorisation automatique du stock est un vrai gain de temps.",
                "Le module Inventaire d'Odoo vous permettra de gérer les stocks et leur valorisation comptable automatiquement.",
                6,
            ),
            Question::yes_no(
                "q3",
                "Vos ventes en boutique sont-elles connectées via le module POS ?",
                "Bravo ! Plus besoin de ressaisir les ventes en caisse.",
                "Le POS connecté génère automatiquement les écritures comptables et met à jour le stock.",
                6,
            ),
            Question::yes_no(
                "q4",
                "Vos comptes bancaires sont-ils synchronisés avec Odoo ?",
                "Excellent ! Le rapprochement automatique vous fait gagner un temps précieux.",
                "La synchronisation bancaire (CODA, API) permet le rapprochement et le lettrage automatiques.",
                6,
            ),
            Question::yes_no(
                "q5",
                "Les flux comptables sont-ils générés automatiquement ?",
                "Vous avez atteint un bon niveau d'automatisation.",
                "L'automatisation des écritures réduit les erreurs et vous libère du temps.",
                6,
            ),
            Question::yes_no(
                "q6",
                "Votre équipe connaît-elle le processus automatisé ?",
                "Former les utilisateurs est essentiel pour éviter les erreurs humaines.",
                "Prenez le temps de former votre équipe aux bonnes pratiques Odoo.",
                6,
            ),
        ],
    },
    Section {
        id: "section2",
        title: "Pilotage financier",
        icon: "📊",
        description: "Chapitre 7",
        questions: &[
            Question::yes_no(
                "q7",
                "Avez-vous une visibilité claire sur votre marge par activité ?",
                "C'est un indicateur clé que vous maîtrisez déjà.",
                "Connaître votre marge par activité est essentiel pour prendre les bonnes décisions.",
                7,
            ),
            Question::yes_no(
                "q8",
                "Savez-vous quand un problème de trésorerie pourrait survenir ?",
                "Anticiper la trésorerie est un signe de maturité financière.",
                "Une prévision de trésorerie à 30/60/90 jours vous éviterait des mauvaises surprises.",
                7,
            ),
            Question::yes_no(
                "q9",
                "Pouvez-vous connaître vos résultats en moins de 5 minutes ?",
                "Bravo ! Vous avez une vision rapide de votre activité.",
                "Un tableau de bord bien configuré dans Odoo vous donnera accès à vos KPI instantanément.",
                7,
            ),
            Question::yes_no(
                "q10",
                "Votre tableau de bord est-il lisible et partagé ?",
                "Partager les indicateurs favorise la prise de décision collective.",
                "Un tableau de bord simplifié avec 5-10 KPI max serait plus efficace.",
                7,
            ),
            Question::yes_no(
                "q11",
                "Vos indicateurs vous aident-ils à prendre des décisions concrètes ?",
                "Vos indicateurs sont pertinents et actionnables.",
                "Choisissez des indicateurs qui vous aident vraiment à décider, pas juste à observer.",
                7,
            ),
        ],
    },
    Section {
        id: "section3",
        title: "Comptabilité analytique",
        icon: "📈",
        description: "Chapitre 8",
        questions: &[
            Question::yes_no(
                "q12",
                "Suivez-vous la rentabilité par projet ou client ?",
                "Excellent ! C'est une pratique avancée de pilotage.",
                "L'analytique par projet/client vous permettrait de savoir ce qui est vraiment rentable.",
                8,
            ),
            Question::yes_no(
                "q13",
                "Avez-vous défini 1 à 3 axes analytiques maximum ?",
                "Vous avez gardé votre structure simple et efficace.",
                "Limiter les axes analytiques évite la complexité inutile.",
                8,
            ),
            Question::yes_no(
                "q14",
                "Votre équipe sait-elle affecter une opération à un axe ?",
                "L'implication de l'équipe garantit la fiabilité des données.",
                "Former l'équipe à l'affectation analytique améliorerait la qualité des données.",
                8,
            ),
            Question::yes_no(
                "q15",
                "Comparez-vous les résultats aux budgets prévus ?",
                "Le suivi budget vs réalisé est un excellent outil de pilotage.",
                "Comparer réalisé et budget vous permettrait d'anticiper et corriger.",
                8,
            ),
            Question::yes_no(
                "q16",
                "Utilisez-vous les rapports analytiques pour décider ?",
                "Vous exploitez pleinement votre analytique.",
                "Les rapports analytiques d'Odoo peuvent éclairer vos décisions stratégiques.",
                8,
            ),
        ],
    },
    Section {
        id: "section4",
        title: "Production comptable",
        icon: "📅",
        description: "Chapitre 9",
        questions: &[
            Question::yes_no(
                "q17",
                "Chaque tâche comptable clé a-t-elle un responsable ?",
                "La répartition claire des rôles évite les oublis.",
                "Définir qui fait quoi éviterait le « ni fait, ni à faire ».",
                9,
            ),
            Question::yes_no(
                "q18",
                "Avez-vous un planning hebdomadaire pour les tâches courantes ?",
                "Une routine régulière garantit la fiabilité des données.",
                "Un créneau fixe de 30 min à 1h par semaine éviterait les accumulations.",
                9,
            ),
            Question::yes_no(
                "q19",
                "Réalisez-vous une clôture mensuelle avec checklist ?",
                "La checklist sécurise votre production comptable.",
                "Une checklist de clôture mensuelle améliorerait la qualité de vos données.",
                9,
            ),
            Question::yes_no(
                "q20",
                "Les ventes, achats et banques sont-ils traités automatiquement ?",
                "L'automatisation vous libère pour des tâches à plus forte valeur.",
                "Automatiser ces flux de base serait un premier quick-win.",
                9,
            ),
            Question::yes_no(
                "q21",
                "Êtes-vous alerté rapidement en cas d'anomalie ?",
                "Les alertes automatiques vous permettent de réagir vite.",
                "Configurer des alertes dans Odoo vous permettrait de détecter les problèmes plus tôt.",
                9,
            ),
        ],
    },
    Section {
        id: "section5",
        title: "Collaboration avec le cabinet",
        icon: "🤝",
        description: "Chapitre 10",
        questions: &[
            Question::yes_no(
                "q22",
                "Votre cabinet connaît-il votre outil de gestion (Odoo) ?",
                "La collaboration est plus fluide quand le cabinet connaît vos outils.",
                "Présenter Odoo à votre cabinet améliorerait la qualité des échanges.",
                10,
            ),
            Question::yes_no(
                "q23",
                "Avez-vous une liste claire de ce que vous devez transmettre ?",
                "La clarté évite les oublis et les retards.",
                "Une liste standardisée des documents à transmettre simplifierait les échanges.",
                10,
            ),
            Question::yes_no(
                "q24",
                "Utilisez-vous un espace de partage structuré ?",
                "Un espace organisé facilite la collaboration.",
                "Un Drive partagé ou un accès Odoo structuré réduirait les frictions.",
                10,
            ),
            Question::yes_no(
                "q25",
                "Les documents sont-ils bien nommés et classés ?",
                "Le nommage cohérent fait gagner du temps à tous.",
                "Adopter une convention de nommage ([Date]_Fournisseur_Objet.pdf) serait utile.",
                10,
            ),
            Question::yes_no(
                "q26",
                "Avez-vous un point fixe mensuel ou trimestriel ?",
                "La communication régulière prévient les problèmes.",
                "Un point régulier, même court (5-15 min), améliorerait la relation.",
                10,
            ),
        ],
    },
    Section {
        id: "section6",
        title: "Évolution de l'architecture",
        icon: "🚀",
        description: "Chapitre 11",
        questions: &[
            Question::yes_no(
                "q27",
                "Votre plan comptable reflète-t-il bien l'évolution de votre activité ?",
                "Votre plan comptable est adapté à votre réalité actuelle.",
                "Une revue annuelle du plan comptable permettrait de l'adapter à votre évolution.",
                11,
            ),
            Question::yes_no(
                "q28",
                "Votre outil comptable est-il modulaire (ex : Odoo) ?",
                "La modularité vous permet de grandir sans rupture.",
                "Un outil modulaire comme Odoo permettrait d'ajouter des fonctionnalités sans changer de système.",
                11,
            ),
            Question::yes_no(
                "q29",
                "Avez-vous anticipé les changements fiscaux ou juridiques ?",
                "L'anticipation évite les mauvaises surprises.",
                "Prévoir une veille ou un accompagnement vous préparerait aux évolutions.",
                11,
            ),
            Question::yes_no(
                "q30",
                "Suivez-vous votre rentabilité par pôle / produit ?",
                "Vous avez une vision fine de ce qui génère de la valeur.",
                "Le suivi par pôle/produit vous aiderait à identifier vos leviers de croissance.",
                11,
            ),
            Question::yes_no(
                "q31",
                "Avez-vous un interlocuteur pour vous accompagner dans cette évolution ?",
                "Un accompagnement facilite les transitions.",
                "Un intégrateur ou conseiller pourrait vous aider à structurer votre croissance.",
                11,
            ),
        ],
    },
];

pub static TIERS: [MaturityTier; 3] = [
    MaturityTier {
        min: 0.0,
        max: 10.0,
        label: "Niveau Débutant",
        emoji: "🔴",
        description: "Structuration nécessaire",
        recommendation: "Vous avez besoin de poser les bases de l'automatisation et du pilotage. Commencez par les Chapitres 6 et 9.",
    },
    MaturityTier {
        min: 11.0,
        max: 20.0,
        label: "Niveau Intermédiaire",
        emoji: "🟡",
        description: "Bonne base à consolider",
        recommendation: "Vous êtes sur la bonne voie ! Renforcez votre analytique (Ch. 8) et la collaboration avec votre cabinet (Ch. 10).",
    },
    MaturityTier {
        min: 21.0,
        max: 31.0,
        label: "Niveau Avancé",
        emoji: "🟢",
        description: "Architecture comptable performante",
        recommendation: "Bravo ! Vous avez un excellent niveau. Continuez à optimiser et anticipez la croissance (Ch. 11).",
    },
];

/// Per-section readings and improvement-plan entries, aligned with
/// [`SECTIONS`] by index.
struct SectionPlan {
    low: &'static str,
    mid: &'static str,
    high: &'static str,
    action: &'static str,
    impact: &'static str,
}

static SECTION_PLANS: [SectionPlan; 6] = [
    SectionPlan {
        low: "Votre système est encore très manuel. C'est le moment de poser les fondations d'une automatisation progressive.",
        mid: "Vous avez déjà automatisé certaines fonctions. Il reste quelques leviers clés à activer pour gagner du temps.",
        high: "Bravo ! Vos flux sont bien automatisés. Vous êtes prêt à piloter plus finement vos performances.",
        action: "Activer le module POS et stock dans Odoo",
        impact: "Réduction des erreurs + gain de temps",
    },
    SectionPlan {
        low: "Les indicateurs sont à clarifier et intégrer à un tableau de bord partagé. Priorité : marge, trésorerie, rentabilité.",
        mid: "Vous avez commencé à structurer vos indicateurs. Renforcez leur usage dans les décisions quotidiennes.",
        high: "Excellent ! Vos indicateurs sont clairs et vous aident à prendre de bonnes décisions.",
        action: "Créer un tableau de bord avec 5 KPI mensuels",
        impact: "Décisions plus rapides et éclairées",
    },
    SectionPlan {
        low: "L'analytique n'est pas encore en place. C'est une opportunité d'avoir une vision plus fine de votre rentabilité.",
        mid: "L'analytique est bien amorcée. Renforcez l'usage dans les décisions quotidiennes et liez-la aux budgets.",
        high: "Vous exploitez bien l'analytique ! Continuez à l'utiliser comme outil de pilotage stratégique.",
        action: "Définir les axes analytiques par projet et client",
        impact: "Vision claire de la rentabilité",
    },
    SectionPlan {
        low: "La production comptable manque de structure. Mettez en place une routine et des responsabilités claires.",
        mid: "Bonne organisation des tâches. Pensez à renforcer les alertes automatiques et à formaliser la routine hebdo.",
        high: "Production comptable bien rodée ! Votre organisation est fluide et fiable.",
        action: "Mettre en place une checklist de clôture mensuelle",
        impact: "Données plus fiables, clôture plus rapide",
    },
    SectionPlan {
        low: "Le partage des données reste perfectible. Objectif : nommage standardisé, checklist de transmission, point mensuel.",
        mid: "La collaboration est en place mais peut être optimisée. Structurez davantage les échanges.",
        high: "Excellente collaboration avec votre cabinet ! Les échanges sont fluides et efficaces.",
        action: "Partager un dossier structuré avec votre cabinet",
        impact: "Échanges simplifiés, relation fluide",
    },
    SectionPlan {
        low: "Vous pouvez anticiper davantage les évolutions. Prévoyez une revue annuelle de votre plan comptable et des besoins outils.",
        mid: "Vous avez commencé à anticiper. Continuez à prévoir les évolutions et impliquez un accompagnant si besoin.",
        high: "Vous êtes prêt pour la croissance ! Votre architecture évolue avec votre activité.",
        action: "Planifier une revue annuelle de votre architecture comptable",
        impact: "Prévention des blocages, croissance maîtrisée",
    },
];

fn plan_for(section_id: &str) -> &'static SectionPlan {
    SECTIONS
        .iter()
        .position(|s| s.id == section_id)
        .map(|i| &SECTION_PLANS[i])
        .unwrap_or(&SECTION_PLANS[0])
}

fn diagnostic_for(section_id: &str, band: SectionBand) -> &'static str {
    let plan = plan_for(section_id);
    match band {
        SectionBand::Low => plan.low,
        SectionBand::Mid => plan.mid,
        SectionBand::High => plan.high,
    }
}

fn band_label(band: SectionBand) -> (&'static str, &'static str) {
    match band {
        SectionBand::Low => ("#ef4444", "🔴 À structurer"),
        SectionBand::Mid => ("#f59e0b", "🟡 En cours de structuration"),
        SectionBand::High => ("#10b981", "🟢 Bien structuré"),
    }
}

fn chapters() -> Vec<Chapter> {
    vec![
        Chapter { id: 6, title: "Automatiser les flux comptables avec Odoo" },
        Chapter { id: 7, title: "Définir les indicateurs clés de pilotage" },
        Chapter { id: 8, title: "Mettre en place une comptabilité analytique" },
        Chapter { id: 9, title: "Organiser la production comptable" },
        Chapter { id: 10, title: "Préparer l'interaction avec le cabinet" },
        Chapter { id: 11, title: "Faire évoluer l'architecture comptable" },
    ]
}

#[function_component(GuideAutomatisationOdoo)]
pub fn guide_automatisation_odoo() -> Html {
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

    // leaving the results step unmounts the quiz, so re-entering it
    // restarts from a clean sequencer
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
                title="Avant de commencer le diagnostic"
                subtitle="Quelques informations pour personnaliser vos résultats et recommandations"
                accent={ACCENT}
                requirements={Requirements { email: true, company: false }}
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
    let chapter_summaries = [
        (6u8, "Automatiser les flux comptables avec Odoo", "Facturation, stock, POS et synchronisation bancaire : comment chaque module alimente la comptabilité sans ressaisie."),
        (7, "Définir les indicateurs clés de pilotage", "Marge par activité, prévision de trésorerie à 30/60/90 jours et tableau de bord limité aux 5-10 KPI qui comptent."),
        (8, "Mettre en place une comptabilité analytique", "Un à trois axes maximum, affectation par l'équipe et comparaison systématique budget vs réalisé."),
        (9, "Organiser la production comptable", "Responsable par tâche, routine hebdomadaire, checklist de clôture mensuelle et alertes d'anomalies."),
        (10, "Préparer l'interaction avec le cabinet", "Liste de transmission, espace de partage structuré, convention de nommage et point régulier."),
        (11, "Faire évoluer l'architecture comptable", "Revue annuelle du plan comptable, outil modulaire et anticipation des évolutions fiscales."),
    ];

    html! {
        <div class="guide-odoo">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-odoo-hero">
                <span class="guide-odoo-badge">{"⚙️ Guide pratique + diagnostic gratuit"}</span>
                <h1>{"Automatisez votre comptabilité avec Odoo"}</h1>
                <p>{"Six chapitres pour passer d'une comptabilité manuelle à une architecture automatisée, puis un diagnostic de 31 questions pour mesurer votre maturité."}</p>
                <button class="guide-odoo-cta" onclick={props.on_start.clone()}>
                    {"🧪 Faire le diagnostic (5 min)"}
                </button>
            </section>

            {
                chapter_summaries.iter().map(|(id, title, summary)| html! {
                    <section id={format!("chapter-{id}")} class="guide-odoo-chapter">
                        <h2>{format!("{id}. {title}")}</h2>
                        <p>{*summary}</p>
                    </section>
                }).collect::<Html>()
            }

            <section class="guide-odoo-footer-cta">
                <h2>{"Quel est votre niveau d'automatisation ?"}</h2>
                <p>{"31 questions, 6 sections, un plan d'action priorisé selon vos points faibles."}</p>
                <button class="guide-odoo-cta" onclick={props.on_start.clone()}>
                    {"Commencer le diagnostic"}
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
    let Some(tier) = tier_for(score, &TIERS) else {
        return html! {};
    };
    let priorities = priority_order(&breakdown, 4);

    html! {
        <div class="guide-odoo">
            <style>{GUIDE_STYLE}</style>
            <Confetti
                active={score >= CONFETTI_THRESHOLD}
                colors={vec![ACCENT, "#fe981a", "#10b981", "#3b82f6"]}
            />

            <section class="guide-odoo-hero results">
                <span class="guide-odoo-badge">{"Résultats du diagnostic"}</span>
                <h1>{format!("Votre diagnostic personnalisé, {} 🎯", props.user.first_name)}</h1>
                if !props.user.company.is_empty() {
                    <p>{&props.user.company}</p>
                }
            </section>

            <div class="guide-odoo-results">
                <div class="guide-odoo-score-card">
                    <div class="guide-odoo-score-circle">
                        <span class="guide-odoo-score-value">{score as u32}</span>
                        <span class="guide-odoo-score-max">{format!("/{}", MAX_SCORE as u32)}</span>
                    </div>
                    <h2>{format!("{} {}", tier.emoji, tier.label)}</h2>
                    <p>{tier.description}</p>
                    <div class="guide-odoo-recommendation">
                        <p class="guide-odoo-recommendation-label">{"📌 Recommandation principale :"}</p>
                        <p>{tier.recommendation}</p>
                    </div>
                </div>

                <div class="guide-odoo-sections">
                    <div class="guide-odoo-sections-header">
                        <h3>{"📊 Score par section + diagnostic personnalisé"}</h3>
                    </div>
                    {
                        breakdown.per_section.iter().map(|entry| {
                            let band = entry.band();
                            let (color, label) = band_label(band);
                            html! {
                                <div class="guide-odoo-section-row">
                                    <div class="guide-odoo-section-head">
                                        <div>
                                            <span class="guide-odoo-section-icon">{entry.section.icon}</span>
                                            <span class="guide-odoo-section-name">{entry.section.title}</span>
                                            <span class="guide-odoo-section-ref">{format!("({})", entry.section.description)}</span>
                                        </div>
                                        <span class="guide-odoo-section-score" style={format!("color: {color};")}>
                                            {format!("{}/{}", entry.points as u32, entry.max as u32)}
                                        </span>
                                    </div>
                                    <div class="guide-odoo-section-track">
                                        <div
                                            class="guide-odoo-section-fill"
                                            style={format!("width: {}%; background: {color};", entry.percentage().round())}
                                        />
                                    </div>
                                    <p class="guide-odoo-section-diag">
                                        <strong>{label}</strong>
                                        {" — "}
                                        {diagnostic_for(entry.section.id, band)}
                                    </p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="guide-odoo-plan">
                    <h3>{"🛠️ Plan d'action personnalisé"}</h3>
                    <table>
                        <thead>
                            <tr>
                                <th>{"Priorité"}</th>
                                <th>{"Domaine"}</th>
                                <th>{"Action recommandée"}</th>
                                <th>{"Impact attendu"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                priorities.iter().enumerate().map(|(i, entry)| {
                                    let plan = plan_for(entry.section.id);
                                    html! {
                                        <tr>
                                            <td><span class="guide-odoo-plan-rank">{i + 1}</span></td>
                                            <td class="guide-odoo-plan-domain">
                                                {entry.section.title}
                                                <span>{format!(" ({})", entry.section.description)}</span>
                                            </td>
                                            <td>{plan.action}</td>
                                            <td>{plan.impact}</td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>

                <h3 class="guide-odoo-results-title">{"📋 Détail des réponses par section"}</h3>
                {
                    SECTIONS.iter().map(|section| html! {
                        <div class="guide-odoo-feedback-block">
                            <div class="guide-odoo-feedback-header">
                                <span>{section.icon}</span>
                                <h4>{section.title}</h4>
                            </div>
                            <div class="guide-odoo-feedback-list">
                                {
                                    section.questions.iter().map(|q| {
                                        let points = props.sheet.get(q.id).unwrap_or(0.0);
                                        let positive = points == q.max_points();
                                        html! {
                                            <div class={classes!("guide-odoo-feedback", if positive { "positive" } else { "negative" })}>
                                                <span>{if positive { "✅" } else { "⚠️" }}</span>
                                                <div>
                                                    <p class="guide-odoo-feedback-question">{format!("« {} »", q.text)}</p>
                                                    <p class="guide-odoo-feedback-text">{q.feedback(points)}</p>
                                                    if !positive {
                                                        <p class="guide-odoo-feedback-chapter">{format!("📘 Voir {}", section.description)}</p>
                                                    }
                                                </div>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    }).collect::<Html>()
                }

                <div class="guide-odoo-quote">
                    <p>{"« L'automatisation permet de transformer la comptabilité en outil de pilotage. »"}</p>
                    <p class="guide-odoo-quote-accent">{"Plus de productivité, moins d'erreurs, meilleur contrôle."}</p>
                </div>

                <div class="guide-odoo-final-cta">
                    <h3>{"🚀 Prêt à passer à l'action ?"}</h3>
                    <p>{"Téléchargez le guide complet ou prenez rendez-vous pour un audit personnalisé."}</p>
                    <div class="guide-odoo-final-actions">
                        <Link<Route> to={Route::Contact} classes="guide-odoo-cta">
                            {"📞 Prendre rendez-vous"}
                        </Link<Route>>
                        <Link<Route> to={Route::Ressources} classes="guide-odoo-cta ghost">
                            {"📚 Voir nos autres guides"}
                        </Link<Route>>
                    </div>
                    <button class="guide-odoo-restart" onclick={props.on_restart.clone()}>
                        {"🔄 Refaire le test"}
                    </button>
                </div>
            </div>
        </div>
    }
}

const GUIDE_STYLE: &str = r#"
.guide-odoo {
    padding-top: 74px;
    min-height: 100vh;
    background: #ffffff;
    color: #1f2937;
}
.guide-odoo-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
    background: linear-gradient(135deg, #714b67 0%, #8e6180 100%);
}
.guide-odoo-hero h1 {
    font-size: 2.5rem;
    color: #ffffff;
    max-width: 760px;
    margin: 0 auto 1.25rem;
}
.guide-odoo-hero p {
    font-size: 1.15rem;
    color: rgba(255, 255, 255, 0.75);
    max-width: 620px;
    margin: 0 auto 2rem;
    line-height: 1.7;
}
.guide-odoo-badge {
    display: inline-block;
    background: rgba(255, 255, 255, 0.2);
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 600;
    padding: 0.375rem 1rem;
    border-radius: 9999px;
    margin-bottom: 1.25rem;
}
.guide-odoo-cta {
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
.guide-odoo-cta:hover {
    background: #e8870f;
    box-shadow: 0 10px 20px rgba(254, 152, 26, 0.3);
}
.guide-odoo-cta.ghost {
    background: rgba(255, 255, 255, 0.2);
}
.guide-odoo-cta.ghost:hover {
    background: rgba(255, 255, 255, 0.3);
    box-shadow: none;
}
.guide-odoo-chapter {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 2rem;
    border-bottom: 1px solid #f3f4f6;
}
.guide-odoo-chapter h2 {
    font-size: 1.6rem;
    color: #714b67;
    margin-bottom: 1rem;
}
.guide-odoo-chapter p {
    color: #4b5563;
    line-height: 1.8;
}
.guide-odoo-footer-cta {
    text-align: center;
    padding: 4rem 2rem 6rem;
}
.guide-odoo-footer-cta h2 {
    font-size: 2rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-odoo-footer-cta p {
    color: #6b7280;
    margin-bottom: 2rem;
}
.guide-odoo-results {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 1.5rem 6rem;
}
.guide-odoo-score-card {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1.5rem;
    padding: 2rem;
    text-align: center;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
    margin-bottom: 2rem;
}
.guide-odoo-score-circle {
    display: inline-flex;
    align-items: baseline;
    justify-content: center;
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    background: linear-gradient(135deg, #714b67 0%, #8e6180 100%);
    color: #ffffff;
    margin-bottom: 1.5rem;
    padding-top: 2.9rem;
}
.guide-odoo-score-value {
    font-size: 1.9rem;
    font-weight: 700;
}
.guide-odoo-score-max {
    font-size: 1.1rem;
}
.guide-odoo-score-card h2 {
    font-size: 1.5rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-odoo-score-card > p {
    color: #6b7280;
    margin-bottom: 1rem;
}
.guide-odoo-recommendation {
    background: #fff4e5;
    border: 1px solid #fde4c0;
    border-radius: 0.75rem;
    padding: 1rem;
    text-align: left;
}
.guide-odoo-recommendation-label {
    font-size: 0.875rem;
    color: #6b7280;
    margin-bottom: 0.25rem;
}
.guide-odoo-recommendation p:last-child {
    font-weight: 500;
    color: #111827;
}
.guide-odoo-sections {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    overflow: hidden;
    margin-bottom: 2rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}
.guide-odoo-sections-header {
    background: #f6f1f5;
    padding: 1rem 1.5rem;
    border-bottom: 1px solid #f3f4f6;
}
.guide-odoo-sections-header h3 {
    font-weight: 700;
    color: #111827;
    margin: 0;
}
.guide-odoo-section-row {
    padding: 1rem 1.5rem;
    border-bottom: 1px solid #f3f4f6;
}
.guide-odoo-section-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 0.5rem;
}
.guide-odoo-section-icon {
    font-size: 1.25rem;
    margin-right: 0.5rem;
}
.guide-odoo-section-name {
    font-weight: 500;
    color: #111827;
}
.guide-odoo-section-ref {
    font-size: 0.75rem;
    color: #6b7280;
    margin-left: 0.4rem;
}
.guide-odoo-section-score {
    font-weight: 700;
}
.guide-odoo-section-track {
    height: 0.5rem;
    background: #f3f4f6;
    border-radius: 9999px;
    overflow: hidden;
    margin-bottom: 0.5rem;
}
.guide-odoo-section-fill {
    height: 100%;
    border-radius: 9999px;
    transition: width 0.5s;
}
.guide-odoo-section-diag {
    font-size: 0.875rem;
    color: #374151;
    background: #f9fafb;
    padding: 0.75rem;
    border-radius: 0.5rem;
    margin: 0;
}
.guide-odoo-plan {
    background: #eff6ff;
    border: 1px solid #dbeafe;
    border-radius: 1rem;
    padding: 1.5rem;
    margin-bottom: 2rem;
    overflow-x: auto;
}
.guide-odoo-plan h3 {
    font-weight: 700;
    color: #111827;
    margin-bottom: 1rem;
}
.guide-odoo-plan table {
    width: 100%;
    font-size: 0.875rem;
    border-collapse: collapse;
}
.guide-odoo-plan th {
    text-align: left;
    padding: 0.5rem;
    border-bottom: 1px solid #bfdbfe;
}
.guide-odoo-plan td {
    padding: 0.5rem;
    border-bottom: 1px solid #dbeafe;
    color: #374151;
    background: #ffffff;
}
.guide-odoo-plan-rank {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 1.5rem;
    height: 1.5rem;
    border-radius: 9999px;
    background: #714b67;
    color: #ffffff;
    font-size: 0.75rem;
    font-weight: 700;
}
.guide-odoo-plan-domain {
    font-weight: 500;
}
.guide-odoo-plan-domain span {
    font-size: 0.75rem;
    color: #6b7280;
}
.guide-odoo-results-title {
    font-size: 1.15rem;
    font-weight: 700;
    color: #111827;
    margin-bottom: 1rem;
}
.guide-odoo-feedback-block {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    overflow: hidden;
    margin-bottom: 1.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}
.guide-odoo-feedback-header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    background: #f9fafb;
    padding: 1rem 1.5rem;
    border-bottom: 1px solid #f3f4f6;
}
.guide-odoo-feedback-header span {
    font-size: 1.5rem;
}
.guide-odoo-feedback-header h4 {
    font-weight: 700;
    color: #111827;
    margin: 0;
}
.guide-odoo-feedback-list {
    padding: 1rem;
}
.guide-odoo-feedback {
    display: flex;
    gap: 0.75rem;
    padding: 1rem;
    border-radius: 0.75rem;
    margin-bottom: 0.75rem;
}
.guide-odoo-feedback.positive {
    background: #ecfdf5;
    border: 1px solid #d1fae5;
}
.guide-odoo-feedback.negative {
    background: #fff7ed;
    border: 1px solid #ffedd5;
}
.guide-odoo-feedback-question {
    font-size: 0.875rem;
    color: #6b7280;
    font-style: italic;
    margin-bottom: 0.25rem;
}
.guide-odoo-feedback-text {
    font-size: 0.9rem;
    font-weight: 500;
}
.guide-odoo-feedback.positive .guide-odoo-feedback-text {
    color: #065f46;
}
.guide-odoo-feedback.negative .guide-odoo-feedback-text {
    color: #9a3412;
}
.guide-odoo-feedback-chapter {
    font-size: 0.8rem;
    color: #6b7280;
    margin-top: 0.4rem;
}
.guide-odoo-quote {
    background: #111827;
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
    margin-bottom: 2rem;
}
.guide-odoo-quote p {
    font-size: 1.1rem;
    color: #ffffff;
    font-style: italic;
}
.guide-odoo-quote-accent {
    color: #fe981a !important;
    font-weight: 700;
    font-style: normal !important;
    margin-top: 0.5rem;
}
.guide-odoo-final-cta {
    background: linear-gradient(135deg, #714b67 0%, #8e6180 100%);
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
}
.guide-odoo-final-cta h3 {
    font-size: 1.3rem;
    color: #ffffff;
    margin-bottom: 0.75rem;
}
.guide-odoo-final-cta p {
    color: rgba(255, 255, 255, 0.7);
    margin-bottom: 1.5rem;
}
.guide-odoo-final-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
.guide-odoo-restart {
    margin-top: 1rem;
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.875rem;
    cursor: pointer;
}
.guide-odoo-restart:hover {
    color: #ffffff;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{max_score, total_questions, AnswerValue};
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
    fn table_shape() {
        assert_eq!(SECTIONS.len(), 6);
        assert_eq!(total_questions(&SECTIONS), 31);
        assert_eq!(max_score(&SECTIONS), MAX_SCORE);
        let mut ids: Vec<&str> = SECTIONS
            .iter()
            .flat_map(|s| s.questions.iter().map(|q| q.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 31);
    }

    #[test]
    fn tiers_cover_every_reachable_score() {
        for score in 0..=31 {
            let matching = TIERS.iter().filter(|t| t.contains(score as f32)).count();
            assert_eq!(matching, 1, "score {score}");
        }
    }

    #[test]
    fn extremes_hit_the_right_tiers() {
        let top = tally(&run_all(AnswerValue::Yes), &SECTIONS).total;
        assert_eq!(top, MAX_SCORE);
        assert_eq!(tier_for(top, &TIERS).unwrap().label, "Niveau Avancé");

        let bottom = tally(&run_all(AnswerValue::No), &SECTIONS).total;
        assert_eq!(bottom, 0.0);
        assert_eq!(tier_for(bottom, &TIERS).unwrap().label, "Niveau Débutant");
    }

    #[test]
    fn weakest_sections_lead_the_priority_plan() {
        let mut sheet = AnswerSheet::new();
        // everything yes except section3, which stays at zero
        for section in &SECTIONS {
            for q in section.questions {
                if section.id != "section3" {
                    sheet.record(q.id, 1.0);
                }
            }
        }
        let breakdown = tally(&sheet, &SECTIONS);
        let priorities = priority_order(&breakdown, 4);
        assert_eq!(priorities.len(), 4);
        assert_eq!(priorities[0].section.id, "section3");
    }

    #[test]
    fn every_section_has_a_plan_entry() {
        for section in &SECTIONS {
            let plan = plan_for(section.id);
            assert!(!plan.action.is_empty());
            assert!(!plan.impact.is_empty());
        }
        assert_eq!(
            diagnostic_for("section1", SectionBand::High),
            SECTION_PLANS[0].high
        );
    }
}
