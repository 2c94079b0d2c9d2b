use super::error::{Result, ValuationError};
use super::price::parse_price;
use super::rank::rank;
use super::score::calculate_points;
use crate::listing::types::{FeatureSet, PropertyRecord};

/// Estimate a fair price for a query feature set against a reference set.
///
/// The query is scored, the reference set is ranked into its score curve, and
/// the estimate is read off the curve: an exact point hit returns that
/// listing's price, a point beyond either end extrapolates, anything else
/// interpolates between the bracketing pair.
///
/// Two oddities of the pricing model are kept on purpose (changing either
/// changes observable output):
/// - the above- and below-range extrapolation formulas are not mirror images
///   of each other;
/// - the bracketing scan compares the query's point against neighboring
///   *prices*. The curve is ordered by point, so when price is not monotone
///   along it the scan can come up empty, which is reported as an
///   interpolation failure rather than treated as fatal.
pub fn estimate_price(records: &[PropertyRecord], query: &FeatureSet) -> Result<f64> {
    let point = calculate_points(records, query)?;
    let curve = rank(records)?;

    let (first, last) = match (curve.first(), curve.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ValuationError::EmptyInput),
    };
    let min_point = first.point;
    let min_price = parse_price(&first.price)?;
    let max_point = last.point;
    let max_price = parse_price(&last.price)?;

    if point > max_point {
        return Ok((point - max_point) / 2.0 + max_price);
    }
    if point < min_point {
        return Ok((min_price - point) / 2.0 + point);
    }
    if let Some(hit) = curve.iter().find(|scored| scored.point == point) {
        return parse_price(&hit.price);
    }

    for pair in curve.windows(2) {
        let lower_price = parse_price(&pair[0].price)?;
        let upper_price = parse_price(&pair[1].price)?;
        if lower_price <= point && point <= upper_price {
            return Ok((upper_price - lower_price) / 2.0 + lower_price);
        }
    }

    Err(ValuationError::Interpolation(point))
}
