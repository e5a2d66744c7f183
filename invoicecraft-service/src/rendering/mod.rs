//! Rendering core: financial aggregation, placeholder substitution, and
//! server-rendered document previews.

pub mod currency;
pub mod dates;
pub mod placeholders;
pub mod preview;
pub mod totals;

pub use currency::currency_symbol;
pub use dates::format_long_date;
pub use placeholders::resolve_placeholders;
pub use totals::{DocumentTotals, compute_totals};
