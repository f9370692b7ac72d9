//! View Components
//!
//! Chrome views for the gallery application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├────────┬────────────────────────────────────────────────────┤
//! │        │                                                     │
//! │ Side   │                                                     │
//! │ bar    │                    Content                          │
//! │ (80px) │             (current showcase page)                 │
//! │        │                                                     │
//! └────────┴────────────────────────────────────────────────────┘
//! ```

mod content;
mod sidebar;
mod title_bar;
mod workspace;

pub use content::*;
pub use sidebar::*;
pub use title_bar::*;
pub use workspace::*;
