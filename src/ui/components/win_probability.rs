use dioxus::prelude::*;

/// Win probability as a percentage plus a proportional fill bar.
#[component]
pub fn WinProbabilityCard(probability: f64) -> Element {
    let percent = format_win_percent(probability);
    let fill = fill_style(probability);

    rsx! {
        div { class: "metric-card win-prob",
            span { class: "metric-label", "Win Probability" }
            p { class: "metric-value", "{percent}" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "{fill}" }
            }
        }
    }
}

pub fn format_win_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// The bar clamps to its track even if the service misbehaves; the text
/// above it still shows the raw value.
fn fill_style(probability: f64) -> String {
    let percent = (probability * 100.0).clamp(0.0, 100.0);
    format!("width: {percent:.1}%")
}
