//! Title Bar Component
//!
//! Custom title bar with the settings menu and branding.

use crate::states::{
    FontSize, FontSizeAction, GalleryStore, LocaleAction, ThemeAction, i18n_titlebar,
};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct GalleryTitleBar;

impl GalleryTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<GalleryStore>().read(cx);
        let (font_size, locale, theme) = (store.font_size(), store.locale(), store.theme());

        menu
            // Font size section
            .label(i18n_titlebar(cx, "font_size"))
            .menu_with_check(
                i18n_titlebar(cx, "font_size_large"),
                font_size == FontSize::Large,
                Box::new(FontSizeAction::Large),
            )
            .menu_with_check(
                i18n_titlebar(cx, "font_size_medium"),
                font_size == FontSize::Medium,
                Box::new(FontSizeAction::Medium),
            )
            .menu_with_check(
                i18n_titlebar(cx, "font_size_small"),
                font_size == FontSize::Small,
                Box::new(FontSizeAction::Small),
            )
            .separator()
            // Language section
            .label(i18n_titlebar(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_titlebar(cx, "theme"))
            .menu_with_check(
                i18n_titlebar(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_titlebar(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_titlebar(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for GalleryTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            // Left side - app name
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_titlebar(cx, "app_name")).text_sm()),
            )
            // Right side - settings menu
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(
                        Button::new("settings")
                            .tooltip(i18n_titlebar(cx, "settings"))
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| {
                                Self::render_settings_menu(menu, window, cx)
                            })
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
