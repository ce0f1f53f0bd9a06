pub const APP_NAME: &str = "Quote Genie";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}

/// User agent sent with every pricing-service request.
pub fn user_agent() -> String {
    format!("quote-genie/{APP_VERSION}")
}
