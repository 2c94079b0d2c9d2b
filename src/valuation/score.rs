use super::condition::condition_points;
use super::error::{Result, ValuationError};
use super::price::{price_range, PriceRange};
use crate::listing::types::{FeatureSet, PropertyRecord};

/// Weight applied to the room count.
const ROOM_WEIGHT: f64 = 20.0;
/// Weight applied to the total area (further scaled by floor count).
const AREA_WEIGHT: f64 = 1.0;
/// Stand-in area for listings that do not state one. A strong penalty on
/// purpose, applied symmetrically to exemplars and query.
const MISSING_AREA: f64 = -100.0;
/// Floor count assumed when the listing does not state one.
const DEFAULT_FLOORS: f64 = 1.0;

/// Signed point contribution of one numeric feature.
///
/// `min`/`max` are the same feature's value on the cheapest and dearest
/// exemplar; their ordering decides whether more of the feature is rewarded
/// or penalized. A zero-width range carries no discriminating signal and
/// contributes nothing, whatever the query value.
pub fn feature_points(feature: f64, min: f64, max: f64, points: f64) -> f64 {
    let sign = if max > min {
        1.0
    } else if max < min {
        -1.0
    } else {
        0.0
    };
    sign * points * feature
}

/// Points from the query's construction year, relative to the oldest
/// parseable year in the reference set.
///
/// Records without a usable year are excluded from the minimum, not counted
/// as zero. A query without a usable year cannot be scored at all.
pub fn year_points(records: &[PropertyRecord], built_in_year: Option<&str>) -> Result<f64> {
    let year = built_in_year
        .and_then(|y| y.trim().parse::<f64>().ok())
        .ok_or(ValuationError::MissingFeature("builtInYear"))?;

    let min_year = records
        .iter()
        .filter_map(|record| record.features.get("builtInYear"))
        .filter_map(|y| y.trim().parse::<f64>().ok())
        .filter(|y| *y != 0.0)
        .fold(f64::INFINITY, f64::min);

    // No reference year to compare against: neutral, same as a zero-width
    // feature range.
    if !min_year.is_finite() {
        return Ok(0.0);
    }
    Ok(year - min_year)
}

/// Aggregate score for a feature set against a reference set.
///
/// rooms*20 + year delta + area*1*floors + condition. The weights are fixed
/// design constants, not tunable at call time.
pub fn calculate_points(records: &[PropertyRecord], query: &FeatureSet) -> Result<f64> {
    let range = price_range(records)?;
    points_with_range(records, &range, query)
}

/// Same as [`calculate_points`] with the exemplar scan already done.
///
/// The exemplars do not depend on which record is being scored, so ranking a
/// whole set computes them once and scores every record through here.
pub(crate) fn points_with_range(
    records: &[PropertyRecord],
    range: &PriceRange,
    query: &FeatureSet,
) -> Result<f64> {
    let min_record = &records[range.min.index];
    let max_record = &records[range.max.index];

    let room_points = feature_points(
        numeric_feature(query.rooms.as_deref(), "rooms")?,
        numeric_feature(min_record.features.get("rooms").map(String::as_str), "rooms")?,
        numeric_feature(max_record.features.get("rooms").map(String::as_str), "rooms")?,
        ROOM_WEIGHT,
    );

    let built_in_year_points = year_points(records, query.built_in_year.as_deref())?;

    let total_area_points = feature_points(
        area_value(query.total_area.as_deref())?,
        area_value(min_record.features.get("totalArea").map(String::as_str))?,
        area_value(max_record.features.get("totalArea").map(String::as_str))?,
        AREA_WEIGHT,
    );

    let number_of_floors = match query.number_of_floors.as_deref() {
        Some(floors) => floors
            .trim()
            .parse::<f64>()
            .map_err(|_| ValuationError::parse("numberOfFloors", floors))?,
        None => DEFAULT_FLOORS,
    };

    let condition = condition_points(query.condition.as_deref());

    Ok(room_points + built_in_year_points + total_area_points * number_of_floors + condition)
}

/// Parse an optional numeric feature. Absent means 0.
fn numeric_feature(value: Option<&str>, what: &'static str) -> Result<f64> {
    match value {
        None => Ok(0.0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ValuationError::parse(what, raw)),
    }
}

/// Numeric value of an area like "85 m²": everything before the unit, parsed.
/// An absent area yields the fixed penalty value instead of a default of 0.
fn area_value(value: Option<&str>) -> Result<f64> {
    match value {
        None => Ok(MISSING_AREA),
        Some(raw) => {
            let number = raw.split('m').next().unwrap_or("").trim();
            number
                .parse()
                .map_err(|_| ValuationError::parse("totalArea", raw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::types::{Location, PropertyType};
    use std::collections::BTreeMap;

    fn sample_record(id: &str, price: &str, features: &[(&str, &str)]) -> PropertyRecord {
        PropertyRecord {
            id: id.to_string(),
            price: price.to_string(),
            property_type: PropertyType {
                property: "Apartment".to_string(),
                deal: "sale".to_string(),
            },
            location: Location::default(),
            features: features
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            additional_info: BTreeMap::new(),
        }
    }

    fn query(features: &[(&str, &str)]) -> FeatureSet {
        let map: BTreeMap<String, String> = features
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FeatureSet::from_features(&map)
    }

    #[test]
    fn test_feature_points_positive_correlation() {
        // Dearest exemplar has more rooms: more rooms reward the query.
        assert_eq!(feature_points(3.0, 2.0, 4.0, 20.0), 60.0);
    }

    #[test]
    fn test_feature_points_negative_correlation() {
        assert_eq!(feature_points(3.0, 4.0, 2.0, 20.0), -60.0);
    }

    #[test]
    fn test_feature_points_zero_width_range() {
        // No discriminating signal: zero, whatever the feature value.
        for feature in [-10.0, 0.0, 3.0, 1000.0] {
            assert_eq!(feature_points(feature, 5.0, 5.0, 20.0), 0.0);
        }
    }

    #[test]
    fn test_area_value_strips_unit() {
        assert_eq!(area_value(Some("85 m²")).unwrap(), 85.0);
        assert_eq!(area_value(Some("42.5 m²")).unwrap(), 42.5);
    }

    #[test]
    fn test_area_value_missing_is_penalty() {
        assert_eq!(area_value(None).unwrap(), -100.0);
    }

    #[test]
    fn test_area_value_garbage_is_parse_error() {
        assert!(matches!(
            area_value(Some("large m²")),
            Err(ValuationError::Parse { .. })
        ));
    }

    #[test]
    fn test_year_points_against_oldest_reference() {
        let records = vec![
            sample_record("a", "100 000 €", &[("builtInYear", "1995")]),
            sample_record("b", "120 000 €", &[("builtInYear", "2005")]),
            sample_record("c", "130 000 €", &[]),
        ];
        assert_eq!(year_points(&records, Some("2000")).unwrap(), 5.0);
    }

    #[test]
    fn test_year_points_missing_query_year() {
        let records = vec![sample_record("a", "100 000 €", &[("builtInYear", "1995")])];
        assert!(matches!(
            year_points(&records, None),
            Err(ValuationError::MissingFeature("builtInYear"))
        ));
        assert!(matches!(
            year_points(&records, Some("unknown")),
            Err(ValuationError::MissingFeature("builtInYear"))
        ));
    }

    #[test]
    fn test_year_points_no_reference_year_is_neutral() {
        let records = vec![
            sample_record("a", "100 000 €", &[]),
            sample_record("b", "120 000 €", &[("builtInYear", "old")]),
        ];
        assert_eq!(year_points(&records, Some("1987")).unwrap(), 0.0);
    }

    fn two_comparables() -> Vec<PropertyRecord> {
        vec![
            sample_record(
                "cheap",
                "100 000 €",
                &[
                    ("rooms", "2"),
                    ("builtInYear", "1990"),
                    ("totalArea", "50 m²"),
                    ("condition", "Ready"),
                ],
            ),
            sample_record(
                "dear",
                "200 000 €",
                &[
                    ("rooms", "4"),
                    ("builtInYear", "1990"),
                    ("totalArea", "50 m²"),
                    ("condition", "Ready"),
                ],
            ),
        ]
    }

    #[test]
    fn test_composite_aggregates_all_factors() {
        let records = two_comparables();
        // rooms 3*20 = 60 (positive sign), year 0, area range zero-width = 0,
        // condition Ready = 20.
        let q = query(&[
            ("rooms", "3"),
            ("builtInYear", "1990"),
            ("totalArea", "50 m²"),
            ("condition", "Ready"),
        ]);
        assert_eq!(calculate_points(&records, &q).unwrap(), 80.0);
    }

    #[test]
    fn test_composite_query_between_comparables() {
        let records = two_comparables();
        let cheap = FeatureSet::from_features(&records[0].features);
        let dear = FeatureSet::from_features(&records[1].features);
        let q = query(&[
            ("rooms", "3"),
            ("builtInYear", "1990"),
            ("totalArea", "50 m²"),
            ("condition", "Ready"),
        ]);

        let low = calculate_points(&records, &cheap).unwrap();
        let mid = calculate_points(&records, &q).unwrap();
        let high = calculate_points(&records, &dear).unwrap();
        assert!(low < mid && mid < high);
    }

    #[test]
    fn test_composite_area_scales_with_floors() {
        let records = vec![
            sample_record(
                "cheap",
                "100 000 €",
                &[("rooms", "2"), ("builtInYear", "2000"), ("totalArea", "30 m²")],
            ),
            sample_record(
                "dear",
                "200 000 €",
                &[("rooms", "2"), ("builtInYear", "2000"), ("totalArea", "60 m²")],
            ),
        ];
        // Area sign positive, area 40, floors 2: 40*1*2 = 80. Rooms range is
        // zero-width, year delta 0, no condition.
        let q = query(&[
            ("rooms", "2"),
            ("builtInYear", "2000"),
            ("totalArea", "40 m²"),
            ("numberOfFloors", "2"),
        ]);
        assert_eq!(calculate_points(&records, &q).unwrap(), 80.0);
    }

    #[test]
    fn test_composite_missing_area_penalty() {
        let records = vec![
            sample_record(
                "cheap",
                "100 000 €",
                &[("rooms", "2"), ("builtInYear", "2000"), ("totalArea", "30 m²")],
            ),
            sample_record(
                "dear",
                "200 000 €",
                &[("rooms", "2"), ("builtInYear", "2000"), ("totalArea", "60 m²")],
            ),
        ];
        // Missing query area stands in as -100: contribution 1*-100 = -100.
        let q = query(&[("rooms", "2"), ("builtInYear", "2000")]);
        assert_eq!(calculate_points(&records, &q).unwrap(), -100.0);
    }

    #[test]
    fn test_composite_missing_rooms_default_zero() {
        let records = two_comparables();
        let q = query(&[
            ("builtInYear", "1990"),
            ("totalArea", "50 m²"),
            ("condition", "Ready"),
        ]);
        // rooms 0*20 = 0, condition 20.
        assert_eq!(calculate_points(&records, &q).unwrap(), 20.0);
    }

    #[test]
    fn test_composite_singleton_reference() {
        // A single comparable is legal: every feature range is zero-width, so
        // only the condition table and the year delta (0) remain.
        let records = vec![sample_record(
            "only",
            "150 000 €",
            &[
                ("rooms", "3"),
                ("builtInYear", "2001"),
                ("totalArea", "75 m²"),
                ("condition", "Renovated"),
            ],
        )];
        let q = FeatureSet::from_features(&records[0].features);
        assert_eq!(calculate_points(&records, &q).unwrap(), 150.0);
    }

    #[test]
    fn test_composite_empty_reference() {
        let q = query(&[("rooms", "2"), ("builtInYear", "2000")]);
        assert!(matches!(
            calculate_points(&[], &q),
            Err(ValuationError::EmptyInput)
        ));
    }
}
