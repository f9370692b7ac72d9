//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 80.0;

/// Content panel minimum width
pub const CONTENT_MIN_WIDTH: f32 = 400.0;

/// Maximum width of the readable column inside a showcase page
pub const PAGE_MAX_WIDTH: f32 = 960.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
