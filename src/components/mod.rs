//! Reusable UI components

pub mod primitives;
pub mod section;

pub use section::Section;
