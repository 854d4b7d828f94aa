//! Suggestion Table
//!
//! Maps a stress label to an ordered list of coping activities, and serves
//! the decorative motivational quote banner.

mod quotes;
mod table;

pub use quotes::random_quote;
pub use table::suggestions_for;
