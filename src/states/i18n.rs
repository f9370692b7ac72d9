//! Internationalization Helpers
//!
//! Provides convenient functions for translating chrome strings based on the
//! current locale. Showcase copy itself is demonstration content and stays in
//! English.

use super::GalleryStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryStore>().read(cx).locale();
    t!(format!("common.{key}"), locale = locale).into()
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryStore>().read(cx).locale();
    t!(format!("sidebar.{key}"), locale = locale).into()
}

/// Get translated string from "titlebar" namespace
pub fn i18n_titlebar(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryStore>().read(cx).locale();
    t!(format!("titlebar.{key}"), locale = locale).into()
}
