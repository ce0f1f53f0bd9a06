use dioxus::prelude::*;

#[component]
pub fn MetricCard(title: String, value: String, detail: Option<String>) -> Element {
    rsx! {
        div { class: "metric-card",
            span { class: "metric-label", "{title}" }
            p { class: "metric-value", "{value}" }
            if let Some(detail) = detail {
                p { class: "metric-sub", "{detail}" }
            }
        }
    }
}
