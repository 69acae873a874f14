//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod components;
pub mod health;
pub mod render;
pub mod templates;

pub use components::component_list_handler;
pub use health::health_handler;
pub use render::render_handler;
pub use templates::{
    create_template_handler, delete_template_handler, get_template_handler,
    template_list_handler,
};
