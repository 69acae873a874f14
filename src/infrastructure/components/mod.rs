//! Component catalog implementations.
//!
//! Provides two [`crate::domain::repositories::ComponentRepository`] implementations:
//! - [`FsComponentRepository`] - Reads component files on every lookup
//! - [`PreloadedComponentRepository`] - Whole catalog loaded into memory at start-up

mod fs_store;
mod preloaded_store;

pub use fs_store::FsComponentRepository;
pub use preloaded_store::PreloadedComponentRepository;
