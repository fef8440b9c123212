mod filter;

pub use filter::{Comparison, Filter};
