//! Component Gallery Library
//!
//! This crate provides a native GPUI application that renders a catalog of
//! pre-built interface widgets (buttons, checkboxes, selects, switches,
//! ratings, chips, a date picker, radio groups, cards) with client-side
//! navigation between showcase pages.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod pages;
pub mod states;
pub mod theme;
pub mod views;
