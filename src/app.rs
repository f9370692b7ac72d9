//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info};

use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::states::{
    FontSize, FontSizeAction, GalleryAppState, GalleryStore, LocaleAction, ThemeAction,
    update_app_state_and_save,
};
use crate::views::GalleryWorkspace;

actions!(gallery, [Quit]);

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(handle_theme_action);
        cx.on_action(handle_locale_action);
        cx.on_action(handle_font_size_action);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Load persisted state and publish the global store
        let state = GalleryAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load saved state, starting fresh");
            GalleryAppState::new()
        });

        if let Some(mode) = state.theme() {
            Theme::change(mode, None, cx);
        } else {
            Theme::sync_system_appearance(None, cx);
        }

        let bounds = state
            .bounds()
            .copied()
            .unwrap_or_else(|| {
                Bounds::centered(
                    None,
                    gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                    cx,
                )
            });

        let app_state = cx.new(|_| state);
        cx.set_global(GalleryStore::new(app_state));

        // Create main window
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Component Gallery")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let window = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| GalleryWorkspace::new(window, cx));
            cx.new(|cx| Root::new(gpui::AnyView::from(workspace), window, cx))
        });

        match window {
            Ok(_) => {
                info!("Main window opened");
                cx.activate(true);
            }
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
            }
        }
    });
}

fn handle_theme_action(action: &ThemeAction, cx: &mut App) {
    let mode = match action {
        ThemeAction::Light => Some(ThemeMode::Light),
        ThemeAction::Dark => Some(ThemeMode::Dark),
        ThemeAction::System => None,
    };

    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }

    update_app_state_and_save(cx, "theme", move |state, _| {
        state.set_theme(mode);
    });
}

fn handle_locale_action(action: &LocaleAction, cx: &mut App) {
    let locale = match action {
        LocaleAction::En => "en",
        LocaleAction::Zh => "zh",
    };

    update_app_state_and_save(cx, "locale", move |state, _| {
        state.set_locale(locale.to_string());
    });
}

fn handle_font_size_action(action: &FontSizeAction, cx: &mut App) {
    let font_size = match action {
        FontSizeAction::Large => FontSize::Large,
        FontSizeAction::Medium => FontSize::Medium,
        FontSizeAction::Small => FontSize::Small,
    };

    update_app_state_and_save(cx, "font_size", move |state, _| {
        state.set_font_size(Some(font_size));
    });
}
