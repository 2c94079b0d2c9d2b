use super::error::Result;
use super::price::price_range;
use super::score::points_with_range;
use crate::listing::types::{FeatureSet, PropertyRecord};

/// One reference listing with its computed score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProperty {
    pub id: String,
    pub price: String,
    pub point: f64,
}

/// Score every record of a reference set against that same set and return
/// them ascending by point.
///
/// Every record is compared against the global min/max exemplars, including
/// itself, so the exemplar scan runs once up front. The sort is stable:
/// records with equal points keep their input order.
pub fn rank(records: &[PropertyRecord]) -> Result<Vec<ScoredProperty>> {
    let range = price_range(records)?;

    let mut scored = records
        .iter()
        .map(|record| {
            let features = FeatureSet::from_features(&record.features);
            Ok(ScoredProperty {
                id: record.id.clone(),
                price: record.price.clone(),
                point: points_with_range(records, &range, &features)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|a, b| {
        a.point
            .partial_cmp(&b.point)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(scored)
}
