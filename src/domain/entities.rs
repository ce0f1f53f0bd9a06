use serde::Serialize;

/// Cargo classification used by the pricing model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    #[default]
    General,
    Electronics,
    Perishable,
    Hazardous,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::General,
        ProductCategory::Electronics,
        ProductCategory::Perishable,
        ProductCategory::Hazardous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::General => "General",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Perishable => "Perishable",
            ProductCategory::Hazardous => "Hazardous",
        }
    }

    /// Wire value, also used as the `<option>` value in the form.
    pub fn value(&self) -> &'static str {
        match self {
            ProductCategory::General => "general",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Perishable => "perishable",
            ProductCategory::Hazardous => "hazardous",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.value() == value)
    }
}

/// Commercial tier of the requesting customer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerSegment {
    #[default]
    Standard,
    Premium,
    Strategic,
}

impl CustomerSegment {
    pub const ALL: [CustomerSegment; 3] = [
        CustomerSegment::Standard,
        CustomerSegment::Premium,
        CustomerSegment::Strategic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CustomerSegment::Standard => "Standard",
            CustomerSegment::Premium => "Premium",
            CustomerSegment::Strategic => "Strategic",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            CustomerSegment::Standard => "standard",
            CustomerSegment::Premium => "premium",
            CustomerSegment::Strategic => "strategic",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|segment| segment.value() == value)
    }
}

/// Normalized shipment attributes sent to the pricing service.
///
/// Field names match the service contract exactly; only validated values
/// end up in here (see `QuoteFormState::begin_submit`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShipmentRequest {
    pub weight: f64,
    pub volume: f64,
    pub origin: String,
    pub destination: String,
    pub product_category: ProductCategory,
    pub customer_segment: CustomerSegment,
}

/// One explainability entry: how much a single input pushed the
/// recommended price up (positive) or down (negative).
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteFactor {
    pub name: String,
    pub impact: f64,
}

/// Pricing analysis returned by the service, already shape-checked.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteResult {
    pub recommended_price: f64,
    /// Low and high bound around the recommended price, low first.
    pub confidence_interval: (f64, f64),
    /// Probability in [0, 1] that the customer accepts at this price.
    pub win_probability: f64,
    /// Ordered as delivered by the model; the order carries meaning.
    pub factors: Vec<QuoteFactor>,
}
