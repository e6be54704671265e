use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::quiz::model::{AnswerSheet, AnswerValue, Section};
use crate::quiz::sequencer::{Advance, QuestionSequencer};

#[derive(Properties, PartialEq)]
pub struct QuizViewProps {
    pub sections: &'static [Section],
    /// Guide accent color, drives the header gradient and highlights.
    #[prop_or("#1a3c5e")]
    pub accent: &'static str,
    pub on_complete: Callback<AnswerSheet>,
    pub on_back: Callback<()>,
}

/// One question at a time over the guide's section tables. The selected
/// button stays highlighted for a beat before the sequencer advances, like
/// the rest of the site's quizzes. Back discards the attempt; the funnel
/// decides where it lands.
#[function_component(QuizView)]
pub fn quiz_view(props: &QuizViewProps) -> Html {
    let sections = props.sections;
    let sequencer = use_state(|| QuestionSequencer::new(sections));
    let selected = use_state(|| None::<AnswerValue>);

    let question = sequencer.current_question();
    let section = sequencer.current_section();

    let on_answer = {
        let sequencer = sequencer.clone();
        let selected = selected.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |value: AnswerValue| {
            // ignore clicks while the previous answer is settling
            if selected.is_some() {
                return;
            }
            selected.set(Some(value));
            let sequencer = sequencer.clone();
            let selected = selected.clone();
            let on_complete = on_complete.clone();
            spawn_local(async move {
                TimeoutFuture::new(300).await;
                let mut next = (*sequencer).clone();
                match next.answer(value) {
                    Advance::Next => {
                        selected.set(None);
                        sequencer.set(next);
                    }
                    Advance::Complete(sheet) => on_complete.emit(sheet),
                }
            });
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let progress = sequencer.progress_percent();

    html! {
        <div class="quiz-view" style={format!("--accent: {};", props.accent)}>
            <style>
                {QUIZ_VIEW_STYLE}
            </style>

            <div class="quiz-header">
                <div class="quiz-header-inner">
                    <div class="quiz-header-row">
                        <button class="quiz-back" onclick={on_back}>
                            {"← Retour"}
                        </button>
                        <span class="quiz-counter">
                            {format!("{}/{}", sequencer.question_number(), sequencer.total_questions())}
                        </span>
                    </div>
                    <div class="quiz-progress-track">
                        <div class="quiz-progress-fill" style={format!("width: {progress}%;")} />
                    </div>
                </div>
            </div>

            <div class="quiz-section-banner">
                <div class="quiz-section-inner">
                    <div class="quiz-section-icon">{section.icon}</div>
                    <div>
                        <span class="quiz-section-description">{section.description}</span>
                        <h2 class="quiz-section-title">{section.title}</h2>
                    </div>
                </div>
            </div>

            <div class="quiz-body">
                <div class="quiz-card">
                    <span class="quiz-question-badge">
                        {format!("Question {}", sequencer.question_number())}
                    </span>
                    <h3 class="quiz-question-text">{question.text}</h3>
                    <div class="quiz-options">
                        {
                            question.kind.values().iter().map(|value| {
                                let value = *value;
                                let on_answer = on_answer.clone();
                                let is_selected = *selected == Some(value);
                                html! {
                                    <button
                                        class={classes!("quiz-option", is_selected.then(|| "selected"))}
                                        onclick={Callback::from(move |_: MouseEvent| on_answer.emit(value))}
                                    >
                                        {question.label_for(value)}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="quiz-dots">
                    {
                        sections.iter().map(|s| html! {
                            <div class="quiz-dot-group">
                                {
                                    s.questions.iter().map(|q| {
                                        let answered = sequencer.sheet().get(q.id).is_some();
                                        let current = q.id == question.id;
                                        html! {
                                            <div class={classes!(
                                                "quiz-dot",
                                                current.then(|| "current"),
                                                (answered && !current).then(|| "answered"),
                                            )} />
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

const QUIZ_VIEW_STYLE: &str = r#"
.quiz-view {
    width: 100%;
    min-height: 100vh;
    background: #f9fafb;
    padding-top: 5rem;
}
.quiz-header {
    position: sticky;
    top: 5rem;
    z-index: 30;
    background: white;
    border-bottom: 1px solid #f3f4f6;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.quiz-header-inner {
    max-width: 48rem;
    margin: 0 auto;
    padding: 1rem 1.5rem;
}
.quiz-header-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 0.75rem;
}
.quiz-back {
    background: none;
    border: none;
    font-size: 0.875rem;
    color: #6b7280;
    cursor: pointer;
}
.quiz-back:hover {
    color: #374151;
}
.quiz-counter {
    font-size: 0.875rem;
    font-weight: 700;
    color: var(--accent);
}
.quiz-progress-track {
    height: 0.5rem;
    background: #f3f4f6;
    border-radius: 9999px;
    overflow: hidden;
}
.quiz-progress-fill {
    height: 100%;
    background: var(--accent);
    border-radius: 9999px;
    transition: width 0.5s;
}
.quiz-section-banner {
    background: var(--accent);
    padding: 1.5rem;
}
.quiz-section-inner {
    max-width: 48rem;
    margin: 0 auto;
    display: flex;
    align-items: center;
    gap: 1rem;
}
.quiz-section-icon {
    width: 3rem;
    height: 3rem;
    background: rgba(255, 255, 255, 0.2);
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
}
.quiz-section-description {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.875rem;
}
.quiz-section-title {
    font-size: 1.125rem;
    font-weight: 700;
    color: white;
    margin: 0;
}
.quiz-body {
    max-width: 48rem;
    margin: 0 auto;
    padding: 3rem 1.5rem;
}
.quiz-card {
    background: white;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
    border: 1px solid #f3f4f6;
    text-align: center;
}
.quiz-question-badge {
    display: inline-block;
    background: color-mix(in srgb, var(--accent) 10%, white);
    color: var(--accent);
    font-size: 0.875rem;
    font-weight: 500;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    margin-bottom: 1rem;
}
.quiz-question-text {
    font-size: 1.375rem;
    font-weight: 700;
    color: #111827;
    margin-bottom: 2rem;
}
.quiz-options {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.quiz-option {
    width: 100%;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 2px solid #e5e7eb;
    background: white;
    text-align: left;
    font-weight: 500;
    font-size: 1rem;
    cursor: pointer;
    transition: all 0.2s;
}
.quiz-option:hover {
    border-color: var(--accent);
    background: color-mix(in srgb, var(--accent) 5%, white);
}
.quiz-option.selected {
    border-color: var(--accent);
    background: color-mix(in srgb, var(--accent) 10%, white);
}
.quiz-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 2rem;
}
.quiz-dot-group {
    display: flex;
    gap: 0.25rem;
}
.quiz-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: #e5e7eb;
    transition: all 0.2s;
}
.quiz-dot.current {
    width: 1rem;
    background: var(--accent);
}
.quiz-dot.answered {
    background: #22c55e;
}
"#;
