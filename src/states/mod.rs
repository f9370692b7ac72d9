//! State Management Layer
//!
//! Application chrome state (route, theme, locale) lives in a GPUI entity
//! behind a global store. Showcase pages own their view-state as plain
//! fields; the pieces with actual logic are extracted into `view_state` so
//! they can be unit-tested without a window.

mod app;
mod i18n;
mod view_state;

pub use app::*;
pub use i18n::*;
pub use view_state::*;
