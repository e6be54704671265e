use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Fires once when this flips to true (good-score celebrations).
    pub active: bool,
    /// First color is the guide's accent.
    #[prop_or(vec!["#1a3c5e", "#fe981a", "#10b981", "#3b82f6"])]
    pub colors: Vec<&'static str>,
}

/// Drops 40 colored pieces from the top of the viewport and removes them
/// once they are off screen. Pure decoration, no effect on state.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    {
        let colors = props.colors.clone();
        use_effect_with_deps(
            move |active| {
                if *active {
                    burst(&colors);
                }
                || ()
            },
            props.active,
        );
    }

    html! {
        <style>
            {r#"
            @keyframes confetti-fall {
                to {
                    transform: translateY(110vh) rotate(720deg);
                    opacity: 0.6;
                }
            }
            "#}
        </style>
    }
}

fn burst(colors: &[&'static str]) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    for _ in 0..40 {
        let Ok(piece) = document.create_element("div") else {
            continue;
        };
        let color = colors[(js_sys::Math::random() * colors.len() as f64) as usize % colors.len()];
        let left = js_sys::Math::random() * 100.0;
        let radius = if js_sys::Math::random() > 0.5 { "50%" } else { "2px" };
        let duration = 2.0 + js_sys::Math::random() * 2.0;
        let delay = js_sys::Math::random() * 0.5;
        let _ = piece.set_attribute(
            "style",
            &format!(
                "position:fixed;width:10px;height:10px;background:{color};left:{left}vw;top:-20px;\
                 border-radius:{radius};pointer-events:none;z-index:9999;\
                 animation:confetti-fall {duration:.2}s ease-out {delay:.2}s forwards;"
            ),
        );
        let _ = body.append_child(&piece);

        Timeout::new(((duration + delay) * 1000.0) as u32 + 200, move || {
            piece.remove();
        })
        .forget();
    }
}
