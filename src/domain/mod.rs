//! Quote form state and the data shapes shared with the pricing service.

pub mod entities;
pub mod form_state;

pub use entities::{
    CustomerSegment, ProductCategory, QuoteFactor, QuoteResult, ShipmentRequest,
};
pub use form_state::{
    FieldEdit, QuoteFormFields, QuoteFormState, QuoteStatus, SubmitRefusal,
    QUOTE_FAILURE_MESSAGE,
};
