use anyhow::{Context, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

use super::types::{camel_key, Location, PropertyRecord, PropertyType};

/// Extract a structured record from a listing detail page.
///
/// Field layout follows the portal's markup: the price block, the `h1` title
/// carrying the address tail, the first lined table (deal row + feature
/// rows), and the description paragraph whose `<strong>` runs form key/value
/// pairs.
pub fn extract_record(html: &str, id: &str) -> Result<PropertyRecord> {
    let doc = Html::parse_document(html);

    let price_sel = Selector::parse(".price-outer").unwrap();
    let price_el = doc
        .select(&price_sel)
        .next()
        .with_context(|| format!("Listing {}: no price block", id))?;
    let price =
        first_text(price_el).with_context(|| format!("Listing {}: empty price block", id))?;

    let title_sel = Selector::parse("h1").unwrap();
    let title: String = doc
        .select(&title_sel)
        .next()
        .with_context(|| format!("Listing {}: no title", id))?
        .text()
        .collect();

    let location = parse_location(&title);

    let table_sel = Selector::parse("table.table-lined").unwrap();
    let table = doc
        .select(&table_sel)
        .next()
        .with_context(|| format!("Listing {}: no feature table", id))?;

    let row_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("th, td").unwrap();
    let mut rows = table.select(&row_sel);

    // First row names the deal, e.g. "Apartment for sale".
    let deal_row: String = rows
        .next()
        .with_context(|| format!("Listing {}: empty feature table", id))?
        .text()
        .collect();
    let (property, deal) = deal_row.trim().split_once("for").unwrap_or((deal_row.trim(), ""));
    let property_type = PropertyType {
        property: property.trim().to_string(),
        deal: deal.trim().to_string(),
    };

    // Remaining rows are "<label> <value>" pairs; rows without a value cell
    // are skipped.
    let mut features = BTreeMap::new();
    for row in rows {
        let mut cells = row.select(&cell_sel);
        let (Some(label), Some(value)) = (cells.next(), cells.next()) else {
            continue;
        };
        let key = camel_key(label.text().collect::<String>().trim());
        let value = value.text().collect::<String>().trim().to_string();
        if !key.is_empty() && !value.is_empty() {
            features.insert(key, value);
        }
    }

    let additional_info = parse_additional_info(&doc);

    Ok(PropertyRecord {
        id: id.to_string(),
        price,
        property_type,
        location,
        features,
        additional_info,
    })
}

/// Address tail of the title: " - <direction>, <city>, <parish>, <county>".
fn parse_location(title: &str) -> Location {
    let re = Regex::new(r"\s-\s(.*)$").unwrap();
    let mut location = Location::default();
    if let Some(caps) = re.captures(title.trim()) {
        let mut parts = caps[1].split(',').map(|part| part.trim().to_string());
        location.direction = parts.next();
        location.city = parts.next();
        location.parish = parts.next();
        location.county = parts.next();
    }
    location
}

/// Key/value pairs out of the description paragraph.
///
/// The paragraph reads "<strong>Label:</strong> value <strong>Next:</strong>
/// ...": the i-th value is whatever follows the i-th colon, cut short at the
/// next label so consecutive pairs don't bleed into each other.
fn parse_additional_info(doc: &Html) -> BTreeMap<String, String> {
    let para_sel = Selector::parse(".description p").unwrap();
    let strong_sel = Selector::parse("strong").unwrap();

    let mut info = BTreeMap::new();
    let Some(para) = doc.select(&para_sel).next() else {
        return info;
    };

    let labels: Vec<String> = para
        .select(&strong_sel)
        .map(|s| strong_label(s))
        .collect();
    let text: String = para.text().collect();
    let segments: Vec<&str> = text.split(':').collect();

    for (i, label) in labels.iter().enumerate() {
        let Some(raw) = segments.get(i + 1) else {
            break;
        };
        let mut value = raw.trim().to_string();
        if let Some(next_label) = labels.get(i + 1) {
            if let Some(cut) = value.find(next_label.as_str()) {
                value = value[..cut].trim().to_string();
            }
        }
        let key = camel_key(label);
        if !key.is_empty() {
            info.insert(key, value);
        }
    }
    info
}

/// A strong element's label text without its trailing colon.
fn strong_label(strong: ElementRef) -> String {
    strong
        .text()
        .collect::<String>()
        .trim()
        .split(':')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Convenience over scraper's text iterator: first non-empty trimmed chunk.
fn first_text(el: ElementRef) -> Option<String> {
    el.text()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string)
}
