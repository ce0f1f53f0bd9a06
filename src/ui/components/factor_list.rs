use dioxus::prelude::*;

use crate::domain::QuoteFactor;

#[derive(Clone, Debug, PartialEq)]
pub struct FactorRow {
    pub name: String,
    pub impact_display: String,
    pub positive: bool,
}

/// Maps the model's factors to display rows, keeping their order.
pub fn factor_rows(factors: &[QuoteFactor]) -> Vec<FactorRow> {
    factors
        .iter()
        .map(|factor| FactorRow {
            name: factor.name.clone(),
            impact_display: format!("{:+.1}", factor.impact),
            positive: factor.impact >= 0.0,
        })
        .collect()
}

#[component]
pub fn FactorList(rows: Vec<FactorRow>) -> Element {
    rsx! {
        div { class: "factors-list",
            h3 { "Key Influencing Factors" }
            ul {
                for row in rows {
                    FactorEntry { row }
                }
            }
        }
    }
}

#[component]
fn FactorEntry(row: FactorRow) -> Element {
    let impact_class = if row.positive {
        "factor-impact positive"
    } else {
        "factor-impact negative"
    };

    rsx! {
        li {
            span { class: "factor-name", "{row.name}" }
            span { class: "{impact_class}", "{row.impact_display}" }
        }
    }
}
