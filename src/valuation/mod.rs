pub mod condition;
pub mod error;
pub mod estimate;
pub mod price;
pub mod rank;
pub mod score;

pub use condition::{condition_points, Condition};
pub use error::ValuationError;
pub use estimate::estimate_price;
pub use price::{parse_price, price_range, PricePoint, PriceRange};
pub use rank::{rank, ScoredProperty};
pub use score::calculate_points;
