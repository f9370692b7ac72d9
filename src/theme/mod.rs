//! Theme support
//!
//! Light/dark chrome theming comes from gpui-component. This module carries
//! the fixed tone palette the showcased widgets use for their color variants.

pub mod colors;
