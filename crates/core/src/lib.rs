// crates/core/src/lib.rs
pub mod document;
pub mod error;
pub mod manifest;
pub mod metadata;
pub mod paginator;
pub mod status;
pub mod timefmt;

pub use document::*;
pub use error::*;
pub use manifest::*;
pub use metadata::*;
pub use paginator::*;
pub use status::*;
pub use timefmt::*;
