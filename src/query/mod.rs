pub mod executor;
pub mod expander;
pub mod scorer;
pub mod snippet;

pub use executor::QueryExecutor;
pub use expander::{expand, TermSet};
pub use scorer::score;
