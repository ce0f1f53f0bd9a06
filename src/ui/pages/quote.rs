use dioxus::prelude::*;

use crate::{
    domain::{
        CustomerSegment, FieldEdit, ProductCategory, QuoteFormState, QuoteResult, SubmitRefusal,
    },
    infra::quote_api::QuoteClient,
    ui::components::{
        factor_list::{factor_rows, FactorList},
        metric_card::MetricCard,
        toast::{push_toast, ToastKind, ToastMessage},
        win_probability::WinProbabilityCard,
    },
};

#[component]
pub fn QuotePage() -> Element {
    let mut form = use_signal(QuoteFormState::default);
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let snapshot = form();
    let submitting = snapshot.is_submitting();

    let on_submit = {
        let mut form = form.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let request = match form.with_mut(|state| state.begin_submit()) {
                Ok(request) => request,
                // The button is disabled while in flight; nothing to say.
                Err(SubmitRefusal::InFlight) => return,
                Err(refusal) => {
                    let kind = match refusal {
                        SubmitRefusal::Weight | SubmitRefusal::Volume => ToastKind::Error,
                        _ => ToastKind::Warning,
                    };
                    push_toast(toasts.clone(), kind, refusal.to_string());
                    return;
                }
            };

            let mut form = form.clone();
            spawn(async move {
                let outcome = match QuoteClient::new() {
                    Ok(client) => client.request_quote(&request).await,
                    Err(error) => Err(error),
                };
                form.with_mut(|state| match outcome {
                    Ok(result) => state.resolve_success(result),
                    Err(error) => {
                        println!("Quote request failed: {error}");
                        state.resolve_failure();
                    }
                });
            });
        }
    };

    rsx! {
        div { class: "quote-container",
            section { class: "glass-panel form-panel",
                h2 { class: "panel-title", "📦 Get Shipment Quote" }

                form {
                    onsubmit: on_submit,
                    div { class: "form-group",
                        label { "Weight (kg)" }
                        input {
                            inputmode: "decimal",
                            placeholder: "e.g. 150",
                            value: snapshot.fields.weight.clone(),
                            oninput: move |evt| form.with_mut(|state| {
                                state.apply_edit(FieldEdit::Weight(evt.value().to_string()))
                            }),
                        }
                    }
                    div { class: "form-group",
                        label { "Volume (m³)" }
                        input {
                            inputmode: "decimal",
                            placeholder: "e.g. 0.5",
                            value: snapshot.fields.volume.clone(),
                            oninput: move |evt| form.with_mut(|state| {
                                state.apply_edit(FieldEdit::Volume(evt.value().to_string()))
                            }),
                        }
                    }
                    div { class: "form-group",
                        label { "Origin" }
                        input {
                            placeholder: "City, Country",
                            value: snapshot.fields.origin.clone(),
                            oninput: move |evt| form.with_mut(|state| {
                                state.apply_edit(FieldEdit::Origin(evt.value().to_string()))
                            }),
                        }
                    }
                    div { class: "form-group",
                        label { "Destination" }
                        input {
                            placeholder: "City, Country",
                            value: snapshot.fields.destination.clone(),
                            oninput: move |evt| form.with_mut(|state| {
                                state.apply_edit(FieldEdit::Destination(evt.value().to_string()))
                            }),
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Product Category" }
                            select {
                                onchange: move |evt| {
                                    if let Some(category) = ProductCategory::from_value(&evt.value()) {
                                        form.with_mut(|state| {
                                            state.apply_edit(FieldEdit::Category(category))
                                        });
                                    }
                                },
                                for category in ProductCategory::ALL {
                                    option {
                                        value: category.value(),
                                        selected: category == snapshot.fields.product_category,
                                        "{category.label()}"
                                    }
                                }
                            }
                        }
                        div { class: "form-group",
                            label { "Customer Segment" }
                            select {
                                onchange: move |evt| {
                                    if let Some(segment) = CustomerSegment::from_value(&evt.value()) {
                                        form.with_mut(|state| {
                                            state.apply_edit(FieldEdit::Segment(segment))
                                        });
                                    }
                                },
                                for segment in CustomerSegment::ALL {
                                    option {
                                        value: segment.value(),
                                        selected: segment == snapshot.fields.customer_segment,
                                        "{segment.label()}"
                                    }
                                }
                            }
                        }
                    }

                    button {
                        class: "submit-btn",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner" }
                        } else {
                            "🚚 Calculate Quote"
                        }
                    }

                    if let Some(message) = snapshot.error_message.as_ref() {
                        div { class: "error-msg", "⚠️ {message}" }
                    }
                }
            }

            if let Some(result) = snapshot.result.as_ref() {
                ResultPanel { result: result.clone() }
            }
        }
    }
}

#[component]
fn ResultPanel(result: QuoteResult) -> Element {
    let price = format!("${}", format_amount(result.recommended_price));
    let range = format!("Range: {}", format_range(result.confidence_interval));
    let rows = factor_rows(&result.factors);

    rsx! {
        section { class: "glass-panel result-panel",
            h2 { class: "panel-title", "📈 Quote Analysis" }
            MetricCard {
                title: "Recommended Price".to_string(),
                value: price,
                detail: Some(range),
            }
            WinProbabilityCard { probability: result.win_probability }
            FactorList { rows }
        }
    }
}

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

fn format_range((low, high): (f64, f64)) -> String {
    format!("${low:.2} - ${high:.2}")
}
