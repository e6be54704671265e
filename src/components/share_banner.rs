use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_search_param;

use crate::scroll_to_top;

/// Banner shown when a visitor lands on a guide through a shared link
/// (`?source=...` or `?ref=...`). Dismissable; independent of the quiz
/// funnel. Also nudges the page back to the top after the router settles,
/// since shared links often carry a stale fragment position.
#[function_component(ShareBanner)]
pub fn share_banner() -> Html {
    let source = use_search_param("source".to_string());
    let referrer = use_search_param("ref".to_string());
    let dismissed = use_state(|| false);

    let is_shared_visit = source.is_some() || referrer.is_some();

    use_effect_with_deps(
        move |shared| {
            if *shared {
                spawn_local(async {
                    TimeoutFuture::new(150).await;
                    scroll_to_top();
                });
            }
            || ()
        },
        is_shared_visit,
    );

    if !is_shared_visit || *dismissed {
        return html! {};
    }

    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    html! {
        <div class="share-banner">
            <style>
                {r#"
                .share-banner {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 0.75rem 1.5rem;
                    background: linear-gradient(90deg, #1a3c5e 0%, #2d5a8a 100%);
                    color: white;
                    font-size: 0.9rem;
                }
                .share-banner-dismiss {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.1rem;
                    cursor: pointer;
                    padding: 0 0.25rem;
                }
                .share-banner-dismiss:hover {
                    color: white;
                }
                "#}
            </style>
            <span>
                {"👋 Quelqu'un vous a partagé ce diagnostic. Faites le test, il ne prend que quelques minutes."}
            </span>
            <button class="share-banner-dismiss" onclick={on_dismiss} aria-label="Fermer">
                {"✕"}
            </button>
        </div>
    }
}
