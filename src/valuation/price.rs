use super::error::{Result, ValuationError};
use crate::listing::types::PropertyRecord;

/// A record's parsed price together with where it sits in the reference set.
///
/// `index` is the record's position in the input slice, kept so the full
/// record can be looked up again after the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub price: f64,
    pub id: String,
    pub index: usize,
}

/// The min- and max-priced exemplars of a reference set.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange {
    pub min: PricePoint,
    pub max: PricePoint,
}

/// Parse a listing price of the form "<digits, possibly space-grouped> <2-char
/// currency suffix>", e.g. "120 000 €" -> 120000.
///
/// The last two characters are dropped, remaining whitespace removed, and the
/// rest must be digits only. An empty remainder is a parse failure, never a
/// silent zero.
pub fn parse_price(price: &str) -> Result<f64> {
    let cut = price
        .char_indices()
        .rev()
        .nth(1)
        .map(|(i, _)| i)
        .ok_or_else(|| ValuationError::parse("price", price))?;

    let digits: String = price[..cut].chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValuationError::parse("price", price));
    }

    let value: f64 = digits
        .parse()
        .map_err(|_| ValuationError::parse("price", price))?;
    if !value.is_finite() {
        return Err(ValuationError::parse("price", price));
    }
    Ok(value)
}

/// Scan a non-empty reference set for its cheapest and dearest listings.
///
/// Single pass, two accumulators. Ties keep the first occurrence: the scan
/// only moves `min` on a strictly smaller price and `max` on a strictly
/// greater one, so a later listing at an already-seen extremum never
/// overwrites the earlier index.
pub fn price_range(records: &[PropertyRecord]) -> Result<PriceRange> {
    let first = records.first().ok_or(ValuationError::EmptyInput)?;
    let mut min = PricePoint {
        price: parse_price(&first.price)?,
        id: first.id.clone(),
        index: 0,
    };
    let mut max = min.clone();

    for (index, record) in records.iter().enumerate().skip(1) {
        let current_price = parse_price(&record.price)?;
        if current_price < min.price {
            min = PricePoint {
                price: current_price,
                id: record.id.clone(),
                index,
            };
        }
        if current_price > max.price {
            max = PricePoint {
                price: current_price,
                id: record.id.clone(),
                index,
            };
        }
    }

    Ok(PriceRange { min, max })
}
