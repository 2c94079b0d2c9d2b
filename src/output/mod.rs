pub mod formatter;

pub use formatter::{
    format_point, format_price, format_range, format_ranked_table, should_use_colors,
};
