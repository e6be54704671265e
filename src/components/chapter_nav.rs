use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chapter {
    pub id: u8,
    pub title: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ChapterNavProps {
    pub chapters: Vec<Chapter>,
}

/// Floating chapter list on the right edge of long guide content. Appears
/// once the reader scrolls past the hero and highlights the chapter nearest
/// the upper third of the viewport. Anchors are `chapter-{id}` elements.
#[function_component(ChapterNav)]
pub fn chapter_nav(props: &ChapterNavProps) -> Html {
    let active = use_state(|| 1u8);
    let visible = use_state(|| false);

    {
        let active = active.clone();
        let visible = visible.clone();
        let chapters = props.chapters.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_scroll_y();
                    visible.set(scroll_y > 400.0);

                    let viewport_center = window_inner_height() / 3.0;
                    let mut closest = 1u8;
                    let mut closest_distance = f64::INFINITY;
                    for chapter in &chapters {
                        let Some(el) = document.get_element_by_id(&format!("chapter-{}", chapter.id)) else {
                            continue;
                        };
                        let top = el.get_bounding_client_rect().top();
                        let distance = (top - viewport_center).abs();
                        if distance < closest_distance && top < window_inner_height() * 0.7 {
                            closest_distance = distance;
                            closest = chapter.id;
                        }
                    }
                    active.set(closest);
                }) as Box<dyn FnMut()>);

                let window = web_sys::window().unwrap();
                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let window = web_sys::window().unwrap();
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            props.chapters.clone(),
        );
    }

    if !*visible {
        return html! {};
    }

    let total = props.chapters.len();

    html! {
        <div class="chapter-nav">
            <style>
                {r#"
                .chapter-nav {
                    position: fixed;
                    right: 1.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 900;
                    background: rgba(255, 255, 255, 0.95);
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 0.5rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                }
                @media (max-width: 1024px) {
                    .chapter-nav { display: none; }
                }
                .chapter-nav-button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    margin-bottom: 0.375rem;
                    border: none;
                    border-radius: 0.75rem;
                    font-weight: 700;
                    font-size: 0.875rem;
                    background: #f3f4f6;
                    color: #6b7280;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .chapter-nav-button:hover {
                    background: #e5e7eb;
                    color: #374151;
                }
                .chapter-nav-button.active {
                    background: #1a3c5e;
                    color: white;
                    transform: scale(1.1);
                }
                .chapter-nav-progress {
                    margin-top: 0.5rem;
                    padding-top: 0.5rem;
                    border-top: 1px solid #f3f4f6;
                    text-align: center;
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: #1a3c5e;
                }
                "#}
            </style>
            {
                props.chapters.iter().map(|chapter| {
                    let id = chapter.id;
                    let onclick = Callback::from(move |_: MouseEvent| {
                        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                            if let Some(el) = document.get_element_by_id(&format!("chapter-{id}")) {
                                el.scroll_into_view();
                            }
                        }
                    });
                    html! {
                        <button
                            class={classes!("chapter-nav-button", (*active == id).then(|| "active"))}
                            title={chapter.title}
                            {onclick}
                        >
                            {id}
                        </button>
                    }
                }).collect::<Html>()
            }
            <div class="chapter-nav-progress">
                {format!("{}/{}", *active, total)}
            </div>
        </div>
    }
}

fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn window_inner_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
