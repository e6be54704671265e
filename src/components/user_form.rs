use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::quiz::model::{Requirements, UserInfo};

const ROLES: [&str; 6] = [
    "Dirigeant / Gérant",
    "Directeur financier / DAF",
    "Comptable",
    "Office Manager",
    "Responsable administratif",
    "Autre",
];

const EMPLOYEES: [&str; 5] = ["1-10", "11-50", "51-100", "101-250", "250+"];

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    pub title: &'static str,
    pub subtitle: &'static str,
    #[prop_or("🧪 Test Interactif – Étape 1/2")]
    pub badge: &'static str,
    #[prop_or("#1a3c5e")]
    pub accent: &'static str,
    #[prop_or_default]
    pub requirements: Requirements,
    pub on_submit: Callback<UserInfo>,
    pub on_back: Callback<()>,
}

/// Lead form shown before a quiz starts. Failed validation keeps every
/// field as typed and marks the offending ones; a clean submit hands the
/// finished `UserInfo` up and the funnel advances.
#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let info = use_state(UserInfo::default);
    let errors = use_state(|| crate::quiz::model::FieldErrors::default());

    let oninput = |field: fn(&mut UserInfo, String)| {
        let info = info.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*info).clone();
            field(&mut next, input.value());
            info.set(next);
        })
    };

    let onselect = |field: fn(&mut UserInfo, String)| {
        let info = info.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*info).clone();
            field(&mut next, select.value());
            info.set(next);
        })
    };

    let onsubmit = {
        let info = info.clone();
        let errors = errors.clone();
        let requirements = props.requirements;
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let validation = info.validate(requirements);
            if validation.is_empty() {
                on_submit.emit((*info).clone());
            } else {
                errors.set(validation);
            }
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let field_class = |error: Option<&'static str>| {
        classes!("user-form-input", error.map(|_| "invalid"))
    };

    html! {
        <div class="user-form" style={format!("--accent: {};", props.accent)}>
            <style>
                {USER_FORM_STYLE}
            </style>

            <div class="user-form-header">
                <div class="user-form-header-inner">
                    <button class="user-form-back" onclick={on_back}>
                        {"← Retour au guide"}
                    </button>
                    <div class="user-form-intro">
                        <span class="user-form-badge">{props.badge}</span>
                        <h1>{props.title}</h1>
                        <p>{props.subtitle}</p>
                    </div>
                </div>
            </div>

            <div class="user-form-body">
                <form {onsubmit}>
                    <div class="user-form-grid">
                        <div class="user-form-field">
                            <label>{"Prénom "}<span class="required">{"*"}</span></label>
                            <input
                                type="text"
                                class={field_class(errors.first_name)}
                                placeholder="Votre prénom"
                                value={info.first_name.clone()}
                                oninput={oninput(|i, v| i.first_name = v)}
                            />
                            if let Some(message) = errors.first_name {
                                <p class="user-form-error">{message}</p>
                            }
                        </div>
                        <div class="user-form-field">
                            <label>{"Nom "}<span class="required">{"*"}</span></label>
                            <input
                                type="text"
                                class={field_class(errors.last_name)}
                                placeholder="Votre nom"
                                value={info.last_name.clone()}
                                oninput={oninput(|i, v| i.last_name = v)}
                            />
                            if let Some(message) = errors.last_name {
                                <p class="user-form-error">{message}</p>
                            }
                        </div>
                    </div>

                    <div class="user-form-field">
                        <label>
                            {"Email professionnel "}
                            if props.requirements.email {
                                <span class="required">{"*"}</span>
                            }
                        </label>
                        <input
                            type="email"
                            class={field_class(errors.email)}
                            placeholder="votre@email.com"
                            value={info.email.clone()}
                            oninput={oninput(|i, v| i.email = v)}
                        />
                        if let Some(message) = errors.email {
                            <p class="user-form-error">{message}</p>
                        }
                    </div>

                    <div class="user-form-field">
                        <label>
                            {"Entreprise "}
                            if props.requirements.company {
                                <span class="required">{"*"}</span>
                            }
                        </label>
                        <input
                            type="text"
                            class={field_class(errors.company)}
                            placeholder="Nom de votre entreprise"
                            value={info.company.clone()}
                            oninput={oninput(|i, v| i.company = v)}
                        />
                        if let Some(message) = errors.company {
                            <p class="user-form-error">{message}</p>
                        }
                    </div>

                    <div class="user-form-grid">
                        <div class="user-form-field">
                            <label>{"Fonction"}</label>
                            <select onchange={onselect(|i, v| i.role = v)}>
                                <option value="" selected={info.role.is_empty()}>{"Sélectionner..."}</option>
                                {
                                    ROLES.iter().map(|role| html! {
                                        <option value={*role} selected={info.role == *role}>{role}</option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
                        <div class="user-form-field">
                            <label>{"Nombre d'employés"}</label>
                            <select onchange={onselect(|i, v| i.employees = v)}>
                                <option value="" selected={info.employees.is_empty()}>{"Sélectionner..."}</option>
                                {
                                    EMPLOYEES.iter().map(|bracket| html! {
                                        <option value={*bracket} selected={info.employees == *bracket}>{bracket}</option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
                    </div>

                    <div class="user-form-privacy">
                        <p>
                            <strong>{"🔒 Confidentialité :"}</strong>
                            {" Vos données sont utilisées uniquement pour personnaliser vos résultats. Nous ne les partageons jamais."}
                        </p>
                    </div>

                    <button type="submit" class="user-form-submit">
                        {"Commencer le diagnostic →"}
                    </button>
                </form>
            </div>
        </div>
    }
}

const USER_FORM_STYLE: &str = r#"
.user-form {
    width: 100%;
    min-height: 100vh;
    background: #f9fafb;
}
.user-form-header {
    background: linear-gradient(135deg, var(--accent) 0%, color-mix(in srgb, var(--accent) 70%, white) 100%);
    padding: 6rem 1.5rem 3rem;
}
.user-form-header-inner {
    max-width: 48rem;
    margin: 0 auto;
}
.user-form-back {
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.7);
    cursor: pointer;
    margin-bottom: 1.5rem;
    font-size: 0.95rem;
}
.user-form-back:hover {
    color: white;
}
.user-form-intro {
    text-align: center;
}
.user-form-badge {
    display: inline-block;
    background: rgba(255, 255, 255, 0.2);
    color: white;
    font-size: 0.875rem;
    font-weight: 600;
    padding: 0.375rem 1rem;
    border-radius: 9999px;
    margin-bottom: 1rem;
}
.user-form-intro h1 {
    font-size: 1.75rem;
    font-weight: 700;
    color: white;
    margin-bottom: 0.5rem;
}
.user-form-intro p {
    color: rgba(255, 255, 255, 0.7);
}
.user-form-body {
    max-width: 42rem;
    margin: 0 auto;
    padding: 3rem 1.5rem;
}
.user-form-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}
@media (max-width: 640px) {
    .user-form-grid { grid-template-columns: 1fr; }
}
.user-form-field {
    margin-bottom: 1.5rem;
}
.user-form-field label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: #374151;
    margin-bottom: 0.5rem;
}
.user-form-field .required {
    color: #ef4444;
}
.user-form-field input,
.user-form-field select {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 2px solid #e5e7eb;
    font-size: 1rem;
    background: white;
    transition: border-color 0.2s;
}
.user-form-field input:focus,
.user-form-field select:focus {
    outline: none;
    border-color: var(--accent);
}
.user-form-input.invalid {
    border-color: #f87171;
}
.user-form-error {
    margin-top: 0.25rem;
    font-size: 0.875rem;
    color: #ef4444;
}
.user-form-privacy {
    background: color-mix(in srgb, var(--accent) 6%, white);
    border: 1px solid color-mix(in srgb, var(--accent) 15%, white);
    border-radius: 0.75rem;
    padding: 1rem;
    margin-bottom: 1.5rem;
}
.user-form-privacy p {
    font-size: 0.875rem;
    color: #4b5563;
    margin: 0;
}
.user-form-privacy strong {
    color: var(--accent);
}
.user-form-submit {
    width: 100%;
    padding: 1rem 1.5rem;
    border: none;
    border-radius: 0.75rem;
    font-size: 1rem;
    font-weight: 600;
    color: white;
    background: var(--accent);
    cursor: pointer;
    transition: box-shadow 0.2s, transform 0.1s;
}
.user-form-submit:hover {
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
}
.user-form-submit:active {
    transform: scale(0.98);
}
"#;
