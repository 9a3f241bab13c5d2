use dioxus::prelude::*;

/// Range input reporting a parsed, clamped value on every drag step.
#[component]
pub fn Slider(
    value: f64,
    min: f64,
    max: f64,
    #[props(default = 1.0)] step: f64,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    on_value_change: EventHandler<f64>,
) -> Element {
    let upper = max.max(min);

    rsx! {
        input {
            r#type: "range",
            min: "{min}",
            max: "{upper}",
            step: "{step}",
            value: "{value}",
            disabled: disabled,
            class: "h-1 cursor-pointer accent-white {class}",
            oninput: move |e: Event<FormData>| {
                if let Ok(v) = e.value().parse::<f64>() {
                    on_value_change.call(v.clamp(min, upper));
                }
            },
        }
    }
}
