//! Output rendering (text listings, health summaries, JSON)

pub mod json;
pub mod text;

pub use json::{render_health_json, render_listing_json};
pub use text::{render_health, render_listing};
