use std::collections::BTreeMap;

/// One listing as extracted from its detail page.
///
/// Produced once by the fetch/extract layer and read-only afterwards; the
/// valuation engine never goes back to the markup.
#[derive(Debug, Clone)]
pub struct PropertyRecord {
    pub id: String,
    pub price: String, // raw price text, e.g. "120 000 €"
    pub property_type: PropertyType,
    pub location: Location,
    pub features: BTreeMap<String, String>,
    pub additional_info: BTreeMap<String, String>,
}

/// "Apartment for sale" -> property "Apartment", deal "sale"
#[derive(Debug, Clone)]
pub struct PropertyType {
    pub property: String,
    pub deal: String,
}

#[derive(Debug, Clone, Default)]
pub struct Location {
    pub direction: Option<String>,
    pub city: Option<String>,
    pub parish: Option<String>,
    pub county: Option<String>,
}

/// The subset of a record's features the scoring model consumes.
///
/// Values stay strings: numeric ones are parsed at scoring time, area values
/// carry their unit suffix until then. Every field may be absent; the scorer
/// defines a default for each.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    pub rooms: Option<String>,
    pub built_in_year: Option<String>,
    pub condition: Option<String>,
    pub number_of_floors: Option<String>,
    pub total_area: Option<String>,
}

impl FeatureSet {
    /// Project the recognized scoring keys out of a record's feature map.
    pub fn from_features(features: &BTreeMap<String, String>) -> Self {
        Self {
            rooms: features.get("rooms").cloned(),
            built_in_year: features.get("builtInYear").cloned(),
            condition: features.get("condition").cloned(),
            number_of_floors: features.get("numberOfFloors").cloned(),
            total_area: features.get("totalArea").cloned(),
        }
    }
}

/// Normalize free label text to a lower-camel lookup key.
///
/// "Built in year" -> "builtInYear", "Good condition" -> "goodCondition".
/// Words are split on any non-alphanumeric run, so punctuation never leaks
/// into a key.
pub fn camel_key(label: &str) -> String {
    let mut key = String::new();
    for (i, word) in label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let lower = word.to_lowercase();
        if i == 0 {
            key.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                key.extend(first.to_uppercase());
                key.push_str(chars.as_str());
            }
        }
    }
    key
}
