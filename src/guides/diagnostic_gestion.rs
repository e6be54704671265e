use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chapter_nav::{Chapter, ChapterNav};
use crate::components::confetti::Confetti;
use crate::components::quiz_view::QuizView;
use crate::components::user_form::UserForm;
use crate::quiz::model::{AnswerSheet, FunnelStep, Question, Requirements, Section, UserInfo};
use crate::quiz::score::{tally, tier_for, MaturityTier};
use crate::scroll_to_top;
use crate::Route;

const ACCENT: &str = "#014730";

pub const MAX_SCORE: f32 = 17.0;
const CONFETTI_THRESHOLD: f32 = 15.0;

pub static SECTIONS: [Section; 4] = [
    Section {
        id: "bloc1",
        title: "Vision et pilotage",
        icon: "🎯",
        description: "Chapitre 1",
        questions: &[
            Question::yes_no(
                "q1",
                "Avez-vous un plan comptable clair et adapté à votre activité ?",
                "Votre plan comptable est déjà structuré : excellent point de départ pour automatiser et piloter.",
                "Sans plan comptable adapté, difficile d'avoir des indicateurs fiables. Le Chapitre 3 vous aide à construire une structure sur mesure.",
                3,
            ),
            Question::yes_no(
                "q2",
                "Votre comptabilité vous aide-t-elle à prendre des décisions, au-delà des obligations fiscales ?",
                "Vous exploitez déjà votre compta comme un outil stratégique : continuez ainsi !",
                "Vous utilisez votre compta uniquement pour déclarer : vous perdez du potentiel. Découvrez comment en faire un levier avec le Chapitre 1.",
                1,
            ),
            Question::yes_no(
                "q3",
                "Pouvez-vous sortir un tableau de bord financier en moins de 5 minutes ?",
                "Bravo ! Vous avez une vision rapide, base essentielle du pilotage.",
                "Vous n'avez pas d'indicateurs accessibles rapidement. Le Chapitre 5 vous montre comment les mettre en place.",
                5,
            ),
            Question::yes_no(
                "q4",
                "Avez-vous une vue simple et à jour de votre trésorerie ?",
                "Une bonne gestion de la trésorerie est un marqueur de maturité. Vous êtes sur la bonne voie.",
                "Sans visibilité sur votre trésorerie, vous risquez de mauvaises surprises. Commencez par la base avec le Chapitre 1.",
                1,
            ),
            Question::yes_no(
                "q5",
                "Vos outils sont-ils bien connectés entre eux ?",
                "Vous limitez les doubles saisies et gagnez du temps : c'est un excellent point.",
                "Des outils non connectés = perte de temps et erreurs. Découvrez dans le Chapitre 5 comment centraliser.",
                5,
            ),
        ],
    },
    Section {
        id: "bloc2",
        title: "Besoins & structuration",
        icon: "📊",
        description: "Chapitres 2 & 3",
        questions: &[
            Question::yes_no(
                "q6",
                "Avez-vous formalisé vos besoins comptables (activité, TVA, volume, etc.) ?",
                "Vous avez une vision claire de votre activité : base indispensable pour un système efficace.",
                "Commencez par la fiche de cadrage du Chapitre 2 pour identifier vos vrais besoins.",
                2,
            ),
            Question::yes_no(
                "q7",
                "Avez-vous personnalisé votre plan comptable selon vos canaux, produits ou clients ?",
                "Excellent ! Cela vous permettra une analyse plus fine et une automatisation accrue.",
                "Un plan standard limite votre capacité de pilotage. Inspirez-vous du Chapitre 3 pour l'adapter.",
                3,
            ),
            Question::yes_partial_no(
                "q8",
                "Suivez-vous la rentabilité par produit, activité ou canal ?",
                "C'est une pratique avancée : preuve d'un pilotage efficace.",
                "Vous avez commencé, mais un plan comptable personnalisé pourrait vous aider davantage.",
                "Vous manquez d'un indicateur clé. Apprenez à structurer cela avec la compta analytique simple du Chapitre 3.",
                3,
            ),
            Question::yes_no(
                "q9",
                "Vos charges sont-elles classées de façon stratégique (par outil, canal, type d'achat) ?",
                "Cela vous permet de suivre vos coûts efficacement. Très bon point.",
                "Classez vos charges selon leur nature stratégique. Voir les exemples du Chapitre 3.",
                3,
            ),
        ],
    },
    Section {
        id: "bloc3",
        title: "Organisation documentaire",
        icon: "📂",
        description: "Chapitre 4",
        questions: &[
            Question::yes_no(
                "q10",
                "Tous vos documents comptables sont-ils numérisés et centralisés ?",
                "Vous avez les bases pour automatiser la saisie et gagner du temps.",
                "Cela génère des oublis et des retards. Mettez en place la méthode du Chapitre 4.",
                4,
            ),
            Question::yes_no(
                "q11",
                "Disposez-vous d'une adresse email dédiée pour les factures fournisseurs ?",
                "Cela facilite la centralisation et le traitement automatique. Bon réflexe !",
                "C'est simple à mettre en place et très efficace. Consultez le Chapitre 4.",
                4,
            ),
            Question::yes_no(
                "q12",
                "Vos relevés bancaires sont-ils intégrés automatiquement ?",
                "L'automatisation bancaire est une vraie avancée vers le temps réel.",
                "Automatisez ce flux pour éviter les erreurs manuelles. Voir le Chapitre 4.",
                4,
            ),
            Question::yes_no(
                "q13",
                "Avez-vous une checklist mensuelle pour préparer la clôture comptable ?",
                "Vous maîtrisez le rythme de gestion, ce qui sécurise votre comptabilité.",
                "Adoptez une checklist simple. Vous pouvez utiliser notre modèle dans le Chapitre 4.",
                4,
            ),
        ],
    },
    Section {
        id: "bloc4",
        title: "Outils & automatisation",
        icon: "⚙️",
        description: "Chapitre 5",
        questions: &[
            Question::yes_no_unknown(
                "q14",
                "Vos outils sont-ils pensés d'abord pour VOUS, pas pour votre expert-comptable ?",
                "Parfait : vos outils doivent d'abord vous servir.",
                "Cela vous fait perdre en efficacité. Voyez pourquoi dans le Chapitre 5.",
                5,
            ),
            Question::yes_partial_no(
                "q15",
                "Avez-vous centralisé vos flux dans un seul outil ou ERP ?",
                "Très bon point. Cela réduit les erreurs et maximise l'automatisation.",
                "Vous êtes sur la bonne voie, mais vous pouvez encore simplifier.",
                "Vous multipliez probablement les tâches inutiles. Le Chapitre 5 vous guide.",
                5,
            ),
            Question::yes_no(
                "q16",
                "Avez-vous automatisé au moins 2 de ces tâches : facturation, rapprochement bancaire, reporting, classement ?",
                "Bravo ! Continuez à identifier d'autres tâches automatisables.",
                "Vous perdez un temps précieux. Commencez par automatiser la facturation ou les relevés.",
                5,
            ),
            Question::yes_no(
                "q17",
                "Avez-vous une vision en temps réel de votre activité (trésorerie, marge, CA…) ?",
                "C'est un vrai levier de pilotage. Vous êtes dans une logique avancée.",
                "Sans vision temps réel, vous risquez de mauvaises décisions. Odoo peut vous y aider (Chapitre 5).",
                5,
            ),
        ],
    },
];

pub static TIERS: [MaturityTier; 3] = [
    MaturityTier {
        min: 0.0,
        max: 7.0,
        label: "Structuration absente",
        emoji: "🔴",
        description: "Votre comptabilité est un frein.",
        recommendation: "Commencez par structurer les bases avec notre guide → Chapitres 1 à 3",
    },
    MaturityTier {
        min: 7.5,
        max: 14.0,
        label: "Structuration en cours",
        emoji: "🟠",
        description: "Bonne base, mais pas encore optimisée.",
        recommendation: "Vous avez besoin d'une meilleure organisation et d'automatisations → Chapitres 3 à 5",
    },
    MaturityTier {
        min: 14.5,
        max: 20.0,
        label: "Comptabilité optimisée",
        emoji: "🟢",
        description: "Comptabilité bien structurée !",
        recommendation: "Bravo ! Vous êtes prêt pour l'automatisation et le pilotage avancé avec Odoo",
    },
];

fn chapters() -> Vec<Chapter> {
    vec![
        Chapter { id: 1, title: "Pourquoi structurer sa comptabilité" },
        Chapter { id: 2, title: "Définir les besoins comptables" },
        Chapter { id: 3, title: "Construire un plan comptable (PCMN)" },
        Chapter { id: 4, title: "Organiser les documents et flux" },
        Chapter { id: 5, title: "Choisir les bons outils" },
    ]
}

#[function_component(GuideDiagnosticGestion)]
pub fn guide_diagnostic_gestion() -> Html {
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
                <Results user={info.clone()} sheet={(*sheet).clone()} />
            },
            // a results step without user info cannot be reached through
            // the funnel buttons, render a placeholder rather than panic
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
    html! {
        <div class="guide-dg">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-dg-hero">
                <span class="guide-dg-badge">{"📊 Guide pratique + diagnostic gratuit"}</span>
                <h1>{"Structurez votre comptabilité pour piloter votre entreprise"}</h1>
                <p>{"Cinq chapitres pour transformer votre comptabilité en outil de décision, puis un diagnostic de 17 questions pour mesurer où vous en êtes."}</p>
                <button class="guide-dg-cta" onclick={props.on_start.clone()}>
                    {"🧪 Faire le diagnostic (5 min)"}
                </button>
            </section>

            <section id="chapter-1" class="guide-dg-chapter">
                <h2>{"1. Pourquoi structurer sa comptabilité"}</h2>
                <p>{"La comptabilité d'une PME sert trop souvent à une seule chose : déclarer. Bien structurée, elle devient le capteur principal de votre pilotage : trésorerie à jour, marges par activité, alertes avant les échéances. Ce chapitre montre ce que vous perdez à rester en mode déclaratif."}</p>
            </section>

            <section id="chapter-2" class="guide-dg-chapter">
                <h2>{"2. Définir les besoins comptables"}</h2>
                <p>{"Avant de choisir un outil ou un plan de comptes, formalisez vos besoins : nature de l'activité, régime de TVA, volume de pièces, canaux de vente. La fiche de cadrage fournie ici évite de reproduire un plan standard inadapté."}</p>
            </section>

            <section id="chapter-3" class="guide-dg-chapter">
                <h2>{"3. Construire un plan comptable (PCMN)"}</h2>
                <p>{"Un plan comptable personnalisé par canal, produit ou client est la fondation de l'analyse de rentabilité. Nous détaillons comment dériver le PCMN vers une structure analytique simple, sans usine à gaz."}</p>
            </section>

            <section id="chapter-4" class="guide-dg-chapter">
                <h2>{"4. Organiser les documents et flux"}</h2>
                <p>{"Numérisation systématique, adresse email dédiée aux factures fournisseurs, intégration bancaire automatique et checklist de clôture mensuelle : quatre habitudes qui suppriment les retards et les oublis."}</p>
            </section>

            <section id="chapter-5" class="guide-dg-chapter">
                <h2>{"5. Choisir les bons outils"}</h2>
                <p>{"Vos outils doivent d'abord servir votre pilotage, pas seulement votre expert-comptable. Centralisation dans un ERP, automatisation de la facturation et du rapprochement bancaire, tableau de bord en temps réel : le dernier chapitre trace la cible."}</p>
            </section>

            <section class="guide-dg-footer-cta">
                <h2>{"Où en êtes-vous ?"}</h2>
                <p>{"17 questions, un score sur 17, des recommandations chapitre par chapitre."}</p>
                <button class="guide-dg-cta" onclick={props.on_start.clone()}>
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
}

#[function_component(Results)]
fn results(props: &ResultsProps) -> Html {
    let breakdown = tally(&props.sheet, &SECTIONS);
    let score = breakdown.total;
    let Some(tier) = tier_for(score, &TIERS) else {
        return html! {};
    };

    let action_plan = [
        ("Créer un plan comptable personnalisé", 3u8),
        ("Organiser vos documents et créer une adresse dédiée", 4),
        ("Automatiser les flux bancaires", 5),
        ("Centraliser les outils via un ERP comme Odoo", 5),
    ];

    html! {
        <div class="guide-dg">
            <style>{GUIDE_STYLE}</style>
            <Confetti
                active={score >= CONFETTI_THRESHOLD}
                colors={vec![ACCENT, "#fe981a", "#10b981", "#3b82f6"]}
            />

            <section class="guide-dg-hero results">
                <span class="guide-dg-badge">{"Résultats du diagnostic"}</span>
                <h1>{format!("Votre diagnostic personnalisé, {} 🎯", props.user.first_name)}</h1>
            </section>

            <div class="guide-dg-results">
                <div class="guide-dg-score-card">
                    <div class="guide-dg-score-circle">
                        <span class="guide-dg-score-value">{format_score(score)}</span>
                        <span class="guide-dg-score-max">{format!("/{}", MAX_SCORE as u32)}</span>
                    </div>
                    <h2>{format!("{} {}", tier.emoji, tier.label)}</h2>
                    <p>{tier.description}</p>
                    <div class="guide-dg-recommendation">
                        <p class="guide-dg-recommendation-label">{"📌 Recommandation principale :"}</p>
                        <p>{tier.recommendation}</p>
                    </div>
                </div>

                <h3 class="guide-dg-results-title">{"📋 Diagnostic personnalisé basé sur vos réponses"}</h3>
                {
                    SECTIONS.iter().map(|section| html! {
                        <div class="guide-dg-feedback-block">
                            <div class="guide-dg-feedback-header">
                                <span>{section.icon}</span>
                                <h4>{section.title}</h4>
                            </div>
                            <div class="guide-dg-feedback-list">
                                {
                                    section.questions.iter().map(|q| {
                                        let points = props.sheet.get(q.id).unwrap_or(0.0);
                                        let positive = points == q.max_points();
                                        html! {
                                            <div class={classes!("guide-dg-feedback", if positive { "positive" } else { "negative" })}>
                                                <span>{if positive { "✅" } else { "⚠️" }}</span>
                                                <div>
                                                    <p class="guide-dg-feedback-question">{format!("« {} »", q.text)}</p>
                                                    <p class="guide-dg-feedback-text">{q.feedback(points)}</p>
                                                    if !positive {
                                                        <p class="guide-dg-feedback-chapter">{format!("📘 Voir Chapitre {}", q.chapter)}</p>
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

                <div class="guide-dg-plan">
                    <h3>{"📝 Plan d'action recommandé"}</h3>
                    <table>
                        <thead>
                            <tr>
                                <th>{"Étape"}</th>
                                <th>{"Action"}</th>
                                <th>{"Chapitre"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                action_plan.iter().enumerate().map(|(i, (action, chapter))| html! {
                                    <tr>
                                        <td class="guide-dg-plan-step">{i + 1}</td>
                                        <td>{*action}</td>
                                        <td class="guide-dg-plan-chapter">{format!("Ch. {chapter}")}</td>
                                    </tr>
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>

                <div class="guide-dg-quote">
                    <p>{"« Une bonne comptabilité, ce n'est pas plus de chiffres. »"}</p>
                    <p class="guide-dg-quote-accent">{"Ce sont les bons chiffres, au bon moment."}</p>
                </div>

                <div class="guide-dg-final-cta">
                    <h3>{"Prêt à passer à l'action ?"}</h3>
                    <p>{"Téléchargez le guide complet ou prenez rendez-vous pour un audit personnalisé."}</p>
                    <div class="guide-dg-final-actions">
                        <Link<Route> to={Route::Contact} classes="guide-dg-cta">
                            {"📞 Prendre rendez-vous"}
                        </Link<Route>>
                        <Link<Route> to={Route::Ressources} classes="guide-dg-cta ghost">
                            {"📚 Voir nos autres guides"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// "14.5" for half points, "14" otherwise.
fn format_score(score: f32) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i32)
    } else {
        format!("{score:.1}")
    }
}

const GUIDE_STYLE: &str = r#"
.guide-dg {
    padding-top: 74px;
    min-height: 100vh;
    background: #ffffff;
    color: #1f2937;
}
.guide-dg-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
    background: linear-gradient(135deg, #014730 0%, #026b49 100%);
}
.guide-dg-hero h1 {
    font-size: 2.5rem;
    color: #ffffff;
    max-width: 760px;
    margin: 0 auto 1.25rem;
}
.guide-dg-hero p {
    font-size: 1.15rem;
    color: rgba(255, 255, 255, 0.75);
    max-width: 620px;
    margin: 0 auto 2rem;
    line-height: 1.7;
}
.guide-dg-badge {
    display: inline-block;
    background: rgba(255, 255, 255, 0.2);
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 600;
    padding: 0.375rem 1rem;
    border-radius: 9999px;
    margin-bottom: 1.25rem;
}
.guide-dg-cta {
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
.guide-dg-cta:hover {
    background: #e8870f;
    box-shadow: 0 10px 20px rgba(254, 152, 26, 0.3);
}
.guide-dg-cta.ghost {
    background: rgba(255, 255, 255, 0.2);
}
.guide-dg-cta.ghost:hover {
    background: rgba(255, 255, 255, 0.3);
    box-shadow: none;
}
.guide-dg-chapter {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 2rem;
    border-bottom: 1px solid #f3f4f6;
}
.guide-dg-chapter h2 {
    font-size: 1.6rem;
    color: #014730;
    margin-bottom: 1rem;
}
.guide-dg-chapter p {
    color: #4b5563;
    line-height: 1.8;
}
.guide-dg-footer-cta {
    text-align: center;
    padding: 4rem 2rem 6rem;
}
.guide-dg-footer-cta h2 {
    font-size: 2rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-dg-footer-cta p {
    color: #6b7280;
    margin-bottom: 2rem;
}
.guide-dg-results {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 1.5rem 6rem;
}
.guide-dg-score-card {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1.5rem;
    padding: 2rem;
    text-align: center;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
    margin-bottom: 2rem;
}
.guide-dg-score-circle {
    display: inline-flex;
    align-items: baseline;
    justify-content: center;
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    background: linear-gradient(135deg, #014730 0%, #026b49 100%);
    color: #ffffff;
    margin-bottom: 1.5rem;
    padding-top: 2.9rem;
}
.guide-dg-score-value {
    font-size: 1.9rem;
    font-weight: 700;
}
.guide-dg-score-max {
    font-size: 1.1rem;
}
.guide-dg-score-card h2 {
    font-size: 1.5rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-dg-score-card > p {
    color: #6b7280;
    margin-bottom: 1rem;
}
.guide-dg-recommendation {
    background: #fff4e5;
    border: 1px solid #fde4c0;
    border-radius: 0.75rem;
    padding: 1rem;
    text-align: left;
}
.guide-dg-recommendation-label {
    font-size: 0.875rem;
    color: #6b7280;
    margin-bottom: 0.25rem;
}
.guide-dg-recommendation p:last-child {
    font-weight: 500;
    color: #111827;
}
.guide-dg-results-title {
    font-size: 1.15rem;
    font-weight: 700;
    color: #111827;
    margin-bottom: 1rem;
}
.guide-dg-feedback-block {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    overflow: hidden;
    margin-bottom: 1.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}
.guide-dg-feedback-header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    background: #f9fafb;
    padding: 1rem 1.5rem;
    border-bottom: 1px solid #f3f4f6;
}
.guide-dg-feedback-header span {
    font-size: 1.5rem;
}
.guide-dg-feedback-header h4 {
    font-weight: 700;
    color: #111827;
    margin: 0;
}
.guide-dg-feedback-list {
    padding: 1rem;
}
.guide-dg-feedback {
    display: flex;
    gap: 0.75rem;
    padding: 1rem;
    border-radius: 0.75rem;
    margin-bottom: 0.75rem;
}
.guide-dg-feedback.positive {
    background: #ecfdf5;
    border: 1px solid #d1fae5;
}
.guide-dg-feedback.negative {
    background: #fff7ed;
    border: 1px solid #ffedd5;
}
.guide-dg-feedback-question {
    font-size: 0.875rem;
    color: #6b7280;
    font-style: italic;
    margin-bottom: 0.25rem;
}
.guide-dg-feedback-text {
    font-size: 0.9rem;
    font-weight: 500;
}
.guide-dg-feedback.positive .guide-dg-feedback-text {
    color: #065f46;
}
.guide-dg-feedback.negative .guide-dg-feedback-text {
    color: #9a3412;
}
.guide-dg-feedback-chapter {
    font-size: 0.8rem;
    color: #6b7280;
    margin-top: 0.4rem;
}
.guide-dg-plan {
    background: #eff6ff;
    border: 1px solid #dbeafe;
    border-radius: 1rem;
    padding: 1.5rem;
    margin-bottom: 2rem;
}
.guide-dg-plan h3 {
    font-weight: 700;
    color: #111827;
    margin-bottom: 1rem;
}
.guide-dg-plan table {
    width: 100%;
    font-size: 0.9rem;
    border-collapse: collapse;
}
.guide-dg-plan th {
    text-align: left;
    padding: 0.5rem;
    border-bottom: 1px solid #bfdbfe;
}
.guide-dg-plan td {
    padding: 0.5rem;
    border-bottom: 1px solid #dbeafe;
    color: #374151;
}
.guide-dg-plan-step {
    font-weight: 700;
    color: #014730;
}
.guide-dg-plan-chapter {
    color: #2563eb;
    font-weight: 500;
}
.guide-dg-quote {
    background: #111827;
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
    margin-bottom: 2rem;
}
.guide-dg-quote p {
    font-size: 1.1rem;
    color: #ffffff;
    font-style: italic;
}
.guide-dg-quote-accent {
    color: #fe981a !important;
    font-weight: 700;
    font-style: normal !important;
    margin-top: 0.5rem;
}
.guide-dg-final-cta {
    background: linear-gradient(135deg, #014730 0%, #026b49 100%);
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
}
.guide-dg-final-cta h3 {
    font-size: 1.3rem;
    color: #ffffff;
    margin-bottom: 0.75rem;
}
.guide-dg-final-cta p {
    color: rgba(255, 255, 255, 0.7);
    margin-bottom: 1.5rem;
}
.guide-dg-final-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
.guide-loading {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #6b7280;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{max_score, total_questions, AnswerValue};
    use crate::quiz::sequencer::{Advance, QuestionSequencer};

    #[test]
    fn table_has_17_questions_with_unique_ids() {
        assert_eq!(total_questions(&SECTIONS), 17);
        let mut ids: Vec<&str> = SECTIONS
            .iter()
            .flat_map(|s| s.questions.iter().map(|q| q.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn max_score_matches_the_displayed_denominator() {
        assert_eq!(max_score(&SECTIONS), MAX_SCORE);
    }

    #[test]
    fn all_yes_reaches_the_top_tier() {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        let sheet = loop {
            match seq.answer(AnswerValue::Yes) {
                Advance::Next => continue,
                Advance::Complete(sheet) => break sheet,
            }
        };
        let score = tally(&sheet, &SECTIONS).total;
        assert_eq!(score, MAX_SCORE);
        assert_eq!(tier_for(score, &TIERS).unwrap().label, "Comptabilité optimisée");
    }

    #[test]
    fn all_no_lands_in_the_bottom_tier() {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        let sheet = loop {
            match seq.answer(AnswerValue::No) {
                Advance::Next => {
                    // q14 is yes/no/unknown, No is legal everywhere
                }
                Advance::Complete(sheet) => break sheet,
            }
        };
        let score = tally(&sheet, &SECTIONS).total;
        assert_eq!(score, 0.0);
        assert_eq!(tier_for(score, &TIERS).unwrap().label, "Structuration absente");
    }

    #[test]
    fn half_point_scores_resolve_to_exactly_one_tier() {
        let mut score = 0.0;
        while score <= MAX_SCORE {
            let matching = TIERS.iter().filter(|t| t.contains(score)).count();
            assert_eq!(matching, 1, "score {score}");
            score += 0.5;
        }
    }
}
