use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chapter_nav::{Chapter, ChapterNav};
use crate::lead;
use crate::scroll_to_top;
use crate::Route;

pub const GUIDE_TITLE: &str = "Plan d'Action 2026";

/// This funnel has no quiz: two content parts, then a download form and a
/// confirmation screen.
#[derive(Clone, Copy, PartialEq)]
enum Step {
    Part1,
    Part2,
    Form,
    Confirmation,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DownloadRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub wants_diagnostic: bool,
}

fn chapters_part1() -> Vec<Chapter> {
    vec![
        Chapter { id: 1, title: "La Trésorerie" },
        Chapter { id: 2, title: "La Rentabilité réelle" },
        Chapter { id: 3, title: "Les Coûts Fixes et Variables" },
        Chapter { id: 4, title: "Le Suivi Budgétaire" },
        Chapter { id: 5, title: "Le Reporting Extra-Financier" },
    ]
}

fn chapters_part2() -> Vec<Chapter> {
    vec![
        Chapter { id: 6, title: "Méthodologie en 4 étapes" },
        Chapter { id: 7, title: "Gouvernance & Risques" },
        Chapter { id: 8, title: "Grille de maturité" },
        Chapter { id: 9, title: "Checklist de mise en œuvre" },
    ]
}

#[function_component(GuidePlanAction2026)]
pub fn guide_plan_action_2026() -> Html {
    let step = use_state(|| Step::Part1);
    let request = use_state(|| None::<DownloadRequest>);

    let goto = |target: Step| {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            step.set(target);
            scroll_to_top();
        })
    };

    let on_form_submit = {
        let step = step.clone();
        let request = request.clone();
        Callback::from(move |data: DownloadRequest| {
            request.set(Some(data));
            step.set(Step::Confirmation);
            scroll_to_top();
        })
    };

    let on_form_back = {
        let step = step.clone();
        Callback::from(move |_: ()| {
            step.set(Step::Part2);
            scroll_to_top();
        })
    };

    match *step {
        Step::Part1 => html! {
            <>
                <ChapterNav chapters={chapters_part1()} />
                <Part1 on_continue={goto(Step::Part2)} />
            </>
        },
        Step::Part2 => html! {
            <>
                <ChapterNav chapters={chapters_part2()} />
                <Part2 on_download={goto(Step::Form)} on_back={goto(Step::Part1)} />
            </>
        },
        Step::Form => html! {
            <DownloadForm on_submit={on_form_submit} on_back={on_form_back} />
        },
        Step::Confirmation => match &*request {
            Some(data) => html! { <Confirmation request={data.clone()} /> },
            None => html! {
                <div class="guide-loading"><p>{"Chargement..."}</p></div>
            },
        },
    }
}

#[derive(Properties, PartialEq)]
struct Part1Props {
    on_continue: Callback<MouseEvent>,
}

#[function_component(Part1)]
fn part1(props: &Part1Props) -> Html {
    let chapter_bodies = [
        (1u8, "La Trésorerie", "Le nerf de 2026 : prévision glissante à 13 semaines, plan de financement annuel et règles d'alerte sur le point bas. Une PME ne meurt presque jamais d'un manque de rentabilité, mais toujours d'un manque de cash."),
        (2, "La Rentabilité réelle", "Marge par produit, par client et par canal, coûts complets inclus. Le chiffre d'affaires flatte, la marge nourrit : 2026 est l'année où chaque activité doit prouver sa contribution."),
        (3, "Les Coûts Fixes et Variables", "Cartographier la structure de coûts, calculer le point mort et identifier les charges qui peuvent devenir variables. C'est la base de toute décision de volume ou de prix."),
        (4, "Le Suivi Budgétaire", "Un budget par trimestre, une revue par mois, un écart expliqué par ligne. Le budget 2026 n'est pas un document, c'est un rituel."),
        (5, "Le Reporting Extra-Financier", "CSRD, bilan carbone, indicateurs sociaux : les obligations descendent vers les PME via les donneurs d'ordre. Anticiper en 2026, c'est transformer une contrainte en argument commercial."),
    ];

    html! {
        <div class="guide-plan">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-plan-hero">
                <span class="guide-plan-badge">{"🗓️ Guide téléchargeable"}</span>
                <h1>{"Plan d'action financier 2026"}</h1>
                <p>{"Les 5 chantiers financiers prioritaires de l'année, puis la méthode pour les mettre en œuvre. Première partie : les fondamentaux."}</p>
            </section>

            {
                chapter_bodies.iter().map(|(id, title, body)| html! {
                    <section id={format!("chapter-{id}")} class="guide-plan-chapter">
                        <h2>{format!("{id}. {title}")}</h2>
                        <p>{*body}</p>
                    </section>
                }).collect::<Html>()
            }

            <section class="guide-plan-footer-cta">
                <h2>{"La suite : passer du quoi au comment"}</h2>
                <p>{"Méthodologie, gouvernance, grille de maturité et checklist de mise en œuvre."}</p>
                <button class="guide-plan-cta" onclick={props.on_continue.clone()}>
                    {"Lire la partie 2 →"}
                </button>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct Part2Props {
    on_download: Callback<MouseEvent>,
    on_back: Callback<MouseEvent>,
}

#[function_component(Part2)]
fn part2(props: &Part2Props) -> Html {
    let chapter_bodies = [
        (6u8, "Méthodologie en 4 étapes", "Diagnostic (janvier), priorisation (février), déploiement (mars à octobre), bilan (novembre-décembre). Chaque chantier du guide se décline sur ce calendrier."),
        (7, "Gouvernance & Risques", "Qui décide, qui suit, qui alerte : un comité de pilotage mensuel, une cartographie des risques financiers et des seuils d'alerte écrits avant la crise, pas pendant."),
        (8, "Grille de maturité", "Quatre niveaux par chantier, de « rien n'existe » à « automatisé et piloté ». Auto-évaluez chaque chantier pour savoir où concentrer l'effort 2026."),
        (9, "Checklist de mise en œuvre", "Quatre phases, des cases à cocher, un responsable par ligne. La version Excel de cette checklist accompagne le guide PDF."),
    ];

    html! {
        <div class="guide-plan">
            <style>{GUIDE_STYLE}</style>

            <section class="guide-plan-hero">
                <span class="guide-plan-badge">{"Partie 2 / 2"}</span>
                <h1>{"De la feuille de route à l'exécution"}</h1>
                <p>{"La méthode pour transformer les 5 chantiers en résultats mesurables."}</p>
            </section>

            {
                chapter_bodies.iter().map(|(id, title, body)| html! {
                    <section id={format!("chapter-{id}")} class="guide-plan-chapter">
                        <h2>{format!("{id}. {title}")}</h2>
                        <p>{*body}</p>
                    </section>
                }).collect::<Html>()
            }

            <section class="guide-plan-footer-cta">
                <h2>{"Recevez le guide complet"}</h2>
                <p>{"Le PDF des 9 chapitres, la checklist Excel et un lien pour échanger avec un DAF."}</p>
                <div class="guide-plan-actions">
                    <button class="guide-plan-cta" onclick={props.on_download.clone()}>
                        {"📥 Télécharger le guide"}
                    </button>
                    <button class="guide-plan-cta ghost" onclick={props.on_back.clone()}>
                        {"← Revenir à la partie 1"}
                    </button>
                </div>
            </section>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum FormStatus {
    Idle,
    Loading,
    Error,
}

#[derive(Properties, PartialEq)]
struct DownloadFormProps {
    on_submit: Callback<DownloadRequest>,
    on_back: Callback<()>,
}

/// Download form. The lead goes to the CRM connector before the
/// confirmation screen shows; a failed POST keeps the visitor on the form.
#[function_component(DownloadForm)]
fn download_form(props: &DownloadFormProps) -> Html {
    let fields = use_state(DownloadRequest::default);
    let status = use_state(|| FormStatus::Idle);

    let oninput = |apply: fn(&mut DownloadRequest, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_checkbox = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.wants_diagnostic = input.checked();
            fields.set(next);
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let onsubmit = {
        let fields = fields.clone();
        let status = status.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Loading {
                return;
            }
            status.set(FormStatus::Loading);

            let data = (*fields).clone();
            let payload = lead::guide_download_lead(
                GUIDE_TITLE,
                &data.first_name,
                &data.last_name,
                &data.email,
                &data.company,
                &data.role,
                data.wants_diagnostic,
            );
            let status = status.clone();
            let on_submit = on_submit.clone();
            spawn_local(async move {
                match lead::submit(&payload).await {
                    Ok(()) => on_submit.emit(data),
                    Err(err) => {
                        error!("guide download lead failed: {err}");
                        status.set(FormStatus::Error);
                    }
                }
            });
        })
    };

    html! {
        <div class="guide-plan">
            <style>{GUIDE_STYLE}</style>
            <div class="guide-plan-form-wrap">
                <div class="guide-plan-form-card">
                    <span class="guide-plan-form-icon">{"📥"}</span>
                    <h1>{"Recevoir le guide complet"}</h1>
                    <p class="guide-plan-form-sub">
                        {"Le PDF, la checklist Excel et le lien Calendly arrivent dans votre boîte mail."}
                    </p>

                    if *status == FormStatus::Error {
                        <div class="guide-plan-alert">
                            {"❌ L'envoi a échoué. Vérifiez votre connexion et réessayez."}
                        </div>
                    }

                    <form {onsubmit}>
                        <div class="guide-plan-form-row">
                            <div class="guide-plan-field">
                                <label>{"Prénom *"}</label>
                                <input
                                    type="text"
                                    required=true
                                    placeholder="Votre prénom"
                                    value={fields.first_name.clone()}
                                    oninput={oninput(|f, v| f.first_name = v)}
                                />
                            </div>
                            <div class="guide-plan-field">
                                <label>{"Nom *"}</label>
                                <input
                                    type="text"
                                    required=true
                                    placeholder="Votre nom"
                                    value={fields.last_name.clone()}
                                    oninput={oninput(|f, v| f.last_name = v)}
                                />
                            </div>
                        </div>
                        <div class="guide-plan-field">
                            <label>{"Email professionnel *"}</label>
                            <input
                                type="email"
                                required=true
                                placeholder="prenom@entreprise.fr"
                                value={fields.email.clone()}
                                oninput={oninput(|f, v| f.email = v)}
                            />
                        </div>
                        <div class="guide-plan-field">
                            <label>{"Entreprise"}</label>
                            <input
                                type="text"
                                placeholder="Nom de votre entreprise"
                                value={fields.company.clone()}
                                oninput={oninput(|f, v| f.company = v)}
                            />
                        </div>
                        <div class="guide-plan-field">
                            <label>{"Fonction"}</label>
                            <input
                                type="text"
                                placeholder="Ex : Dirigeant, DAF, Office Manager..."
                                value={fields.role.clone()}
                                oninput={oninput(|f, v| f.role = v)}
                            />
                        </div>
                        <label class="guide-plan-checkbox">
                            <input
                                type="checkbox"
                                checked={fields.wants_diagnostic}
                                onchange={on_checkbox}
                            />
                            <span>
                                {"Je souhaite un diagnostic personnalisé de mon pilotage financier (gratuit, 30 min)"}
                            </span>
                        </label>
                        <button
                            type="submit"
                            class="guide-plan-cta full"
                            disabled={*status == FormStatus::Loading}
                        >
                            {
                                if *status == FormStatus::Loading {
                                    "Envoi en cours..."
                                } else {
                                    "Recevoir le guide"
                                }
                            }
                        </button>
                    </form>

                    <button class="guide-plan-back" onclick={on_back}>
                        {"← Retour au guide"}
                    </button>
                    <p class="guide-plan-privacy">
                        {"🔒 Vos données restent confidentielles et ne sont pas partagées."}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfirmationProps {
    request: DownloadRequest,
}

#[function_component(Confirmation)]
fn confirmation(props: &ConfirmationProps) -> Html {
    let deliveries = [
        ("📄", "Le guide PDF complet", "9 chapitres + études de cas"),
        ("📊", "La checklist Excel", "4 phases prêtes à cocher"),
        ("🔗", "Un lien Calendly", "Pour planifier un échange"),
    ];

    html! {
        <div class="guide-plan">
            <style>{GUIDE_STYLE}</style>
            <div class="guide-plan-confirm-wrap">
                <div class="guide-plan-confirm">
                    <span class="guide-plan-confirm-check">{"✓"}</span>
                    <h1>{format!("Merci {} ! 🎉", props.request.first_name)}</h1>
                    <p class="guide-plan-confirm-sub">
                        {"Votre guide a été envoyé à "}
                        <strong>{&props.request.email}</strong>
                    </p>

                    <div class="guide-plan-confirm-card">
                        <h3>{"📬 Dans votre boîte mail :"}</h3>
                        {
                            deliveries.iter().map(|(icon, text, desc)| html! {
                                <div class="guide-plan-delivery">
                                    <span>{*icon}</span>
                                    <div>
                                        <p class="guide-plan-delivery-text">{*text}</p>
                                        <p class="guide-plan-delivery-desc">{*desc}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    if props.request.wants_diagnostic {
                        <div class="guide-plan-diag-box">
                            <p class="guide-plan-diag-title">{"✅ Diagnostic personnalisé demandé"}</p>
                            <p class="guide-plan-diag-sub">{"Nous vous recontacterons sous 48h."}</p>
                        </div>
                    }

                    <Link<Route> to={Route::Ressources} classes="guide-plan-cta">
                        {"Voir d'autres ressources"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

const GUIDE_STYLE: &str = r#"
.guide-plan {
    padding-top: 74px;
    min-height: 100vh;
    background: #ffffff;
    color: #1f2937;
}
.guide-plan-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
}
.guide-plan-hero h1 {
    font-size: 2.5rem;
    color: #ffffff;
    max-width: 760px;
    margin: 0 auto 1.25rem;
}
.guide-plan-hero p {
    font-size: 1.15rem;
    color: rgba(255, 255, 255, 0.75);
    max-width: 620px;
    margin: 0 auto;
    line-height: 1.7;
}
.guide-plan-badge {
    display: inline-block;
    background: rgba(255, 255, 255, 0.15);
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 600;
    padding: 0.375rem 1rem;
    border-radius: 9999px;
    margin-bottom: 1.25rem;
}
.guide-plan-cta {
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
.guide-plan-cta:hover {
    background: #e8870f;
    box-shadow: 0 10px 20px rgba(254, 152, 26, 0.3);
}
.guide-plan-cta.ghost {
    background: #ffffff;
    color: #1a3c5e;
    border: 1px solid #d1d5db;
}
.guide-plan-cta.ghost:hover {
    background: #f3f4f6;
    box-shadow: none;
}
.guide-plan-cta.full {
    width: 100%;
}
.guide-plan-cta:disabled {
    opacity: 0.6;
    cursor: wait;
}
.guide-plan-chapter {
    max-width: 760px;
    margin: 0 auto;
    padding: 3rem 2rem;
    border-bottom: 1px solid #f3f4f6;
}
.guide-plan-chapter h2 {
    font-size: 1.5rem;
    color: #1a3c5e;
    margin-bottom: 1rem;
}
.guide-plan-chapter p {
    color: #4b5563;
    line-height: 1.8;
}
.guide-plan-footer-cta {
    text-align: center;
    padding: 4rem 2rem 6rem;
}
.guide-plan-footer-cta h2 {
    font-size: 2rem;
    color: #111827;
    margin-bottom: 0.5rem;
}
.guide-plan-footer-cta p {
    color: #6b7280;
    margin-bottom: 2rem;
}
.guide-plan-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
.guide-plan-form-wrap {
    max-width: 560px;
    margin: 0 auto;
    padding: 5rem 1.5rem 6rem;
}
.guide-plan-form-card {
    background: #f9fafb;
    border: 1px solid #e5e7eb;
    border-radius: 1.5rem;
    padding: 2.5rem;
    text-align: center;
}
.guide-plan-form-icon {
    font-size: 2.5rem;
}
.guide-plan-form-card h1 {
    font-size: 1.75rem;
    color: #111827;
    margin: 1rem 0 0.5rem;
}
.guide-plan-form-sub {
    color: #6b7280;
    margin-bottom: 2rem;
}
.guide-plan-alert {
    background: #fef2f2;
    color: #b91c1c;
    border: 1px solid #fecaca;
    border-radius: 0.75rem;
    padding: 1rem;
    margin-bottom: 1.5rem;
    font-weight: 500;
}
.guide-plan-form-card form {
    text-align: left;
}
.guide-plan-form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
@media (max-width: 640px) {
    .guide-plan-form-row {
        grid-template-columns: 1fr;
    }
}
.guide-plan-field {
    margin-bottom: 1.25rem;
}
.guide-plan-field label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: #374151;
    margin-bottom: 0.5rem;
}
.guide-plan-field input {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 2px solid #e5e7eb;
    font-size: 1rem;
    font-family: inherit;
    background: #ffffff;
    transition: border-color 0.2s;
}
.guide-plan-field input:focus {
    outline: none;
    border-color: #1a3c5e;
}
.guide-plan-checkbox {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    background: #eef2f7;
    border-radius: 0.75rem;
    padding: 1rem;
    margin-bottom: 1.5rem;
    cursor: pointer;
}
.guide-plan-checkbox input {
    margin-top: 0.2rem;
}
.guide-plan-checkbox span {
    font-size: 0.9rem;
    color: #374151;
}
.guide-plan-back {
    background: none;
    border: none;
    color: #6b7280;
    font-size: 0.9rem;
    cursor: pointer;
    margin-top: 1.5rem;
}
.guide-plan-back:hover {
    color: #111827;
}
.guide-plan-privacy {
    font-size: 0.8rem;
    color: #9ca3af;
    margin-top: 1rem;
}
.guide-plan-confirm-wrap {
    min-height: calc(100vh - 74px);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 4rem 1.5rem;
    background: #f9fafb;
}
.guide-plan-confirm {
    max-width: 560px;
    width: 100%;
    text-align: center;
}
.guide-plan-confirm-check {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 6rem;
    height: 6rem;
    background: #1a3c5e;
    color: #ffffff;
    font-size: 3rem;
    border-radius: 9999px;
    box-shadow: 0 20px 40px rgba(26, 60, 94, 0.3);
    margin-bottom: 2rem;
}
.guide-plan-confirm h1 {
    font-size: 2.25rem;
    color: #111827;
    margin-bottom: 1rem;
}
.guide-plan-confirm-sub {
    font-size: 1.1rem;
    color: #4b5563;
    margin-bottom: 2rem;
}
.guide-plan-confirm-sub strong {
    color: #111827;
}
.guide-plan-confirm-card {
    background: #ffffff;
    border: 1px solid #f3f4f6;
    border-radius: 1rem;
    padding: 1.5rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
    margin-bottom: 1.5rem;
    text-align: left;
}
.guide-plan-confirm-card h3 {
    font-weight: 700;
    color: #111827;
    margin-bottom: 1rem;
}
.guide-plan-delivery {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    background: #f9fafb;
    border-radius: 0.75rem;
    padding: 0.75rem;
    margin-bottom: 0.75rem;
}
.guide-plan-delivery span {
    font-size: 1.5rem;
}
.guide-plan-delivery-text {
    font-weight: 500;
    color: #111827;
}
.guide-plan-delivery-desc {
    font-size: 0.875rem;
    color: #6b7280;
}
.guide-plan-diag-box {
    background: #ecfdf5;
    border: 1px solid #d1fae5;
    border-radius: 1rem;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}
.guide-plan-diag-title {
    font-weight: 500;
    color: #065f46;
}
.guide-plan-diag-sub {
    font-size: 0.875rem;
    color: #059669;
    margin-top: 0.25rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapters_split_one_to_five_and_six_to_nine() {
        let part1 = chapters_part1();
        let part2 = chapters_part2();
        assert_eq!(part1.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(part2.iter().map(|c| c.id).collect::<Vec<_>>(), [6, 7, 8, 9]);
    }

    #[test]
    fn download_lead_names_the_guide() {
        let data = DownloadRequest {
            first_name: "Marie".into(),
            last_name: "Martin".into(),
            email: "marie@pme.fr".into(),
            company: "PME SAS".into(),
            role: "DAF".into(),
            wants_diagnostic: true,
        };
        let payload = lead::guide_download_lead(
            GUIDE_TITLE,
            &data.first_name,
            &data.last_name,
            &data.email,
            &data.company,
            &data.role,
            data.wants_diagnostic,
        );
        assert!(payload.name.contains("Plan d'Action 2026"));
        assert!(payload.description.contains("Oui"));
    }
}
