use thiserror::Error;

use super::entities::{CustomerSegment, ProductCategory, QuoteResult, ShipmentRequest};

/// Shown whenever the pricing service cannot deliver a quote; the
/// underlying cause is logged, never rendered.
pub const QUOTE_FAILURE_MESSAGE: &str = "Failed to fetch quote. Please try again.";

/// Raw form input exactly as the user typed or selected it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteFormFields {
    pub weight: String,
    pub volume: String,
    pub origin: String,
    pub destination: String,
    pub product_category: ProductCategory,
    pub customer_segment: CustomerSegment,
}

impl QuoteFormFields {
    /// Parses and normalizes the raw fields into a request, or names the
    /// first field that blocks submission.
    fn parse(&self) -> Result<ShipmentRequest, SubmitRefusal> {
        let weight = parse_positive(&self.weight).ok_or(SubmitRefusal::Weight)?;
        let volume = parse_positive(&self.volume).ok_or(SubmitRefusal::Volume)?;
        let origin = self.origin.trim();
        if origin.is_empty() {
            return Err(SubmitRefusal::Origin);
        }
        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(SubmitRefusal::Destination);
        }

        Ok(ShipmentRequest {
            weight,
            volume,
            origin: origin.to_string(),
            destination: destination.to_string(),
            product_category: self.product_category,
            customer_segment: self.customer_segment,
        })
    }
}

/// "NaN" and "inf" parse as f64 in Rust; they must be refused like any
/// other unusable input rather than travel to the service.
fn parse_positive(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// A single edit event coming from one form control.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Weight(String),
    Volume(String),
    Origin(String),
    Destination(String),
    Category(ProductCategory),
    Segment(CustomerSegment),
}

/// Why a submit attempt was turned down without touching the session.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitRefusal {
    #[error("A quote request is already running.")]
    InFlight,
    #[error("Enter a weight in kilograms greater than zero.")]
    Weight,
    #[error("Enter a volume in cubic metres greater than zero.")]
    Volume,
    #[error("Enter an origin for the shipment.")]
    Origin,
    #[error("Enter a destination for the shipment.")]
    Destination,
}

/// Everything one rendered quote form owns: the editable fields, the
/// submission status, and the last outcome. `result` and `error_message`
/// are never both set.
///
/// The UI reads snapshots of this value and feeds events back through the
/// methods below; nothing else mutates it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteFormState {
    pub fields: QuoteFormFields,
    pub status: QuoteStatus,
    pub result: Option<QuoteResult>,
    pub error_message: Option<String>,
}

impl QuoteFormState {
    pub fn is_submitting(&self) -> bool {
        self.status == QuoteStatus::Submitting
    }

    /// Applies one field edit. Stale results and error messages stay
    /// visible while the user edits; edits during an in-flight request
    /// are dropped so the visible fields keep matching what was sent.
    pub fn apply_edit(&mut self, edit: FieldEdit) {
        if self.is_submitting() {
            return;
        }
        match edit {
            FieldEdit::Weight(value) => self.fields.weight = value,
            FieldEdit::Volume(value) => self.fields.volume = value,
            FieldEdit::Origin(value) => self.fields.origin = value,
            FieldEdit::Destination(value) => self.fields.destination = value,
            FieldEdit::Category(category) => self.fields.product_category = category,
            FieldEdit::Segment(segment) => self.fields.customer_segment = segment,
        }
    }

    /// Starts a submission. On `Ok` the previous outcome is cleared, the
    /// status is Submitting, and the caller must issue exactly one quote
    /// request with the returned payload. On `Err` nothing changed.
    ///
    /// The disabled submit button already keeps re-entry out of the UI;
    /// the `InFlight` refusal enforces the same rule here.
    pub fn begin_submit(&mut self) -> Result<ShipmentRequest, SubmitRefusal> {
        if self.is_submitting() {
            return Err(SubmitRefusal::InFlight);
        }
        let request = self.fields.parse()?;

        self.result = None;
        self.error_message = None;
        self.status = QuoteStatus::Submitting;
        Ok(request)
    }

    /// Completes the in-flight submission with a quote. Ignored unless a
    /// submission is actually running.
    pub fn resolve_success(&mut self, result: QuoteResult) {
        if !self.is_submitting() {
            return;
        }
        self.status = QuoteStatus::Succeeded;
        self.result = Some(result);
    }

    /// Completes the in-flight submission with the uniform failure
    /// message. Ignored unless a submission is actually running.
    pub fn resolve_failure(&mut self) {
        if !self.is_submitting() {
            return;
        }
        self.status = QuoteStatus::Failed;
        self.error_message = Some(QUOTE_FAILURE_MESSAGE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::QuoteFactor;

    fn filled_state() -> QuoteFormState {
        let mut state = QuoteFormState::default();
        state.fields = QuoteFormFields {
            weight: "150".to_string(),
            volume: "0.5".to_string(),
            origin: "Rotterdam, NL".to_string(),
            destination: "Hamburg, DE".to_string(),
            product_category: ProductCategory::Electronics,
            customer_segment: CustomerSegment::Premium,
        };
        state
    }

    fn sample_result() -> QuoteResult {
        QuoteResult {
            recommended_price: 245.50,
            confidence_interval: (210.00, 280.00),
            win_probability: 0.73,
            factors: vec![
                QuoteFactor {
                    name: "distance".to_string(),
                    impact: 12.4,
                },
                QuoteFactor {
                    name: "weight".to_string(),
                    impact: -3.1,
                },
            ],
        }
    }

    #[test]
    fn new_state_starts_idle_with_no_panels() {
        let state = QuoteFormState::default();
        assert_eq!(state.status, QuoteStatus::Idle);
        assert!(state.result.is_none());
        assert!(state.error_message.is_none());
        assert_eq!(state.fields.product_category, ProductCategory::General);
        assert_eq!(state.fields.customer_segment, CustomerSegment::Standard);
    }

    #[test]
    fn edits_while_idle_only_touch_the_edited_field() {
        let mut state = QuoteFormState::default();
        state.apply_edit(FieldEdit::Origin("Rotterdam, NL".to_string()));
        state.apply_edit(FieldEdit::Segment(CustomerSegment::Strategic));

        assert_eq!(state.fields.origin, "Rotterdam, NL");
        assert_eq!(state.fields.customer_segment, CustomerSegment::Strategic);
        assert_eq!(state.fields.weight, "");
        assert_eq!(state.status, QuoteStatus::Idle);
        assert!(state.result.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn edits_update_fields_without_touching_outcome() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.resolve_success(sample_result());

        state.apply_edit(FieldEdit::Weight("200".to_string()));
        state.apply_edit(FieldEdit::Category(ProductCategory::Hazardous));

        assert_eq!(state.fields.weight, "200");
        assert_eq!(state.fields.product_category, ProductCategory::Hazardous);
        assert_eq!(state.status, QuoteStatus::Succeeded);
        assert_eq!(state.result, Some(sample_result()));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn edits_after_failure_keep_the_error_visible() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.resolve_failure();

        state.apply_edit(FieldEdit::Destination("Antwerp, BE".to_string()));

        assert_eq!(state.fields.destination, "Antwerp, BE");
        assert_eq!(state.status, QuoteStatus::Failed);
        assert_eq!(state.error_message.as_deref(), Some(QUOTE_FAILURE_MESSAGE));
        assert!(state.result.is_none());
    }

    #[test]
    fn edits_while_submitting_are_dropped() {
        let mut state = filled_state();
        state.begin_submit().unwrap();

        state.apply_edit(FieldEdit::Weight("999".to_string()));

        assert_eq!(state.fields.weight, "150");
        assert_eq!(state.status, QuoteStatus::Submitting);
    }

    #[test]
    fn empty_weight_refuses_submission_and_changes_nothing() {
        let mut state = filled_state();
        state.fields.weight = String::new();
        let before = state.clone();

        assert_eq!(state.begin_submit(), Err(SubmitRefusal::Weight));
        assert_eq!(state, before);
    }

    #[test]
    fn non_numeric_weight_is_refused_not_coerced() {
        for raw in ["abc", "12kg", "NaN", "inf", "-inf", ""] {
            let mut state = filled_state();
            state.fields.weight = raw.to_string();
            assert_eq!(
                state.begin_submit(),
                Err(SubmitRefusal::Weight),
                "weight input {raw:?} should refuse submission"
            );
            assert_eq!(state.status, QuoteStatus::Idle);
        }
    }

    #[test]
    fn zero_and_negative_volume_are_refused() {
        for raw in ["0", "-0.5"] {
            let mut state = filled_state();
            state.fields.volume = raw.to_string();
            assert_eq!(state.begin_submit(), Err(SubmitRefusal::Volume));
        }
    }

    #[test]
    fn whitespace_origin_counts_as_missing() {
        let mut state = filled_state();
        state.fields.origin = "   ".to_string();
        assert_eq!(state.begin_submit(), Err(SubmitRefusal::Origin));

        state.fields.origin = "Rotterdam, NL".to_string();
        state.fields.destination = String::new();
        assert_eq!(state.begin_submit(), Err(SubmitRefusal::Destination));
    }

    #[test]
    fn refused_submission_keeps_previous_error_visible() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.resolve_failure();

        state.apply_edit(FieldEdit::Weight("not a number".to_string()));
        assert_eq!(state.begin_submit(), Err(SubmitRefusal::Weight));

        assert_eq!(state.status, QuoteStatus::Failed);
        assert_eq!(state.error_message.as_deref(), Some(QUOTE_FAILURE_MESSAGE));
    }

    #[test]
    fn valid_submission_normalizes_and_enters_submitting() {
        let mut state = filled_state();
        state.fields.origin = "  Rotterdam, NL  ".to_string();

        let request = state.begin_submit().unwrap();

        assert_eq!(request.weight, 150.0);
        assert_eq!(request.volume, 0.5);
        assert_eq!(request.origin, "Rotterdam, NL");
        assert_eq!(request.destination, "Hamburg, DE");
        assert_eq!(request.product_category, ProductCategory::Electronics);
        assert_eq!(request.customer_segment, CustomerSegment::Premium);
        assert_eq!(state.status, QuoteStatus::Submitting);
        assert!(state.result.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn starting_a_submission_clears_the_previous_outcome() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.resolve_success(sample_result());

        state.begin_submit().unwrap();

        assert_eq!(state.status, QuoteStatus::Submitting);
        assert!(state.result.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn resubmitting_while_in_flight_is_refused() {
        let mut state = filled_state();
        let first = state.begin_submit().unwrap();

        assert_eq!(state.begin_submit(), Err(SubmitRefusal::InFlight));
        assert_eq!(state.status, QuoteStatus::Submitting);

        // The single in-flight request is still the one from the first call.
        assert_eq!(first.weight, 150.0);
    }

    #[test]
    fn success_stores_exactly_the_returned_quote() {
        let mut state = filled_state();
        state.begin_submit().unwrap();

        state.resolve_success(sample_result());

        assert_eq!(state.status, QuoteStatus::Succeeded);
        assert_eq!(state.result, Some(sample_result()));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn failure_stores_the_fixed_message_and_no_result() {
        let mut state = filled_state();
        state.begin_submit().unwrap();

        state.resolve_failure();

        assert_eq!(state.status, QuoteStatus::Failed);
        assert_eq!(state.error_message.as_deref(), Some(QUOTE_FAILURE_MESSAGE));
        assert!(!QUOTE_FAILURE_MESSAGE.is_empty());
        assert!(state.result.is_none());
        // The submit control follows is_submitting, so it is live again.
        assert!(!state.is_submitting());
    }

    #[test]
    fn completions_outside_submitting_are_ignored() {
        let mut state = filled_state();
        state.resolve_success(sample_result());
        assert_eq!(state.status, QuoteStatus::Idle);
        assert!(state.result.is_none());

        state.begin_submit().unwrap();
        state.resolve_failure();
        state.resolve_success(sample_result());

        assert_eq!(state.status, QuoteStatus::Failed);
        assert!(state.result.is_none());
    }

    #[test]
    fn identical_submissions_yield_identical_final_state() {
        let mut first = filled_state();
        first.begin_submit().unwrap();
        first.resolve_success(sample_result());

        let mut second = first.clone();
        second.begin_submit().unwrap();
        second.resolve_success(sample_result());

        assert_eq!(first, second);
    }

    #[test]
    fn failure_then_success_cycle_swaps_panels_cleanly() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.resolve_failure();

        state.begin_submit().unwrap();
        state.resolve_success(sample_result());

        assert_eq!(state.status, QuoteStatus::Succeeded);
        assert!(state.error_message.is_none());
        assert!(state.result.is_some());
    }
}
