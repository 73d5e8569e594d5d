pub mod derive;
pub mod overview;
pub mod source;

// Re-export key types for convenience
pub use derive::{derive, DerivedTable};
pub use overview::overview;
pub use source::JobTable;
