use crate::listing::types::camel_key;

/// The recognized condition labels of a listing.
///
/// Labels arrive as free text ("Good condition", "needs renovating") and are
/// normalized to a lower-camel key before matching, so casing, punctuation
/// and spacing never matter. Anything outside this set is treated as neutral
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    NeedsRenovating,
    SanitaryRenovationNeeded,
    Development,
    Ready,
    Satisfactory,
    GoodCondition,
    SanitaryRenovationDone,
    Renovated,
    AllBrandNew,
}

impl Condition {
    pub fn parse(label: &str) -> Option<Self> {
        match camel_key(label).as_str() {
            "needsRenovating" => Some(Self::NeedsRenovating),
            "sanitaryRenovationNeeded" => Some(Self::SanitaryRenovationNeeded),
            "development" => Some(Self::Development),
            "ready" => Some(Self::Ready),
            "satisfactory" => Some(Self::Satisfactory),
            "goodCondition" => Some(Self::GoodCondition),
            "sanitaryRenovationDone" => Some(Self::SanitaryRenovationDone),
            "renovated" => Some(Self::Renovated),
            "allBrandNew" => Some(Self::AllBrandNew),
            _ => None,
        }
    }

    pub fn points(self) -> f64 {
        match self {
            Self::NeedsRenovating => -150.0,
            Self::SanitaryRenovationNeeded => -70.0,
            Self::Development => 10.0,
            Self::Ready => 20.0,
            Self::Satisfactory => 50.0,
            Self::GoodCondition => 80.0,
            Self::SanitaryRenovationDone => 100.0,
            Self::Renovated => 150.0,
            Self::AllBrandNew => 200.0,
        }
    }
}

/// Point contribution for an optional condition label. Missing or
/// unrecognized labels contribute nothing.
pub fn condition_points(label: Option<&str>) -> f64 {
    label
        .and_then(Condition::parse)
        .map(Condition::points)
        .unwrap_or(0.0)
}
