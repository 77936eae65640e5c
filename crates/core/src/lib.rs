pub mod coordinate;
pub mod report;

// Re-export the types every other crate touches
pub use coordinate::Coordinate;
pub use report::{FileAlignment, MissingDependency, ModifiedVersion};
