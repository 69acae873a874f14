//! Browser-facing pages.
//!
//! A server-rendered gallery of template packages (Askama) and live previews
//! of each package rendered with the sample store.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
