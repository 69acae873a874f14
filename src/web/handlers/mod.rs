//! Web page handlers.

pub mod gallery;
pub mod preview;

pub use gallery::gallery_handler;
pub use preview::preview_handler;
