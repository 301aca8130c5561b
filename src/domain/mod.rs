pub mod model;

pub use model::{Classification, NumberProperty, ParsedNumber};
