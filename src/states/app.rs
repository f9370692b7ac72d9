//! Application State
//!
//! Global application state including routing, theme, locale, and window
//! bounds. The route is runtime-only; everything else persists to a TOML
//! file in the platform config directory.

use crate::assets::CustomIconName;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::{Icon, IconName, ThemeMode};
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Application routes, one per showcase page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Home page - component index grid
    #[default]
    Home,
    /// Button showcase
    Buttons,
    /// Checkbox showcase
    Checkboxes,
    /// Text field showcase
    TextFields,
    /// Select showcase
    Selects,
    /// Switch showcase
    Switches,
    /// Rating showcase
    Ratings,
    /// Chip showcase
    Chips,
    /// Date picker showcase
    DatePicker,
    /// Radio group showcase
    Radios,
    /// Card showcase
    Cards,
}

impl Route {
    /// All routes, in sidebar order
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Buttons,
            Route::Checkboxes,
            Route::TextFields,
            Route::Selects,
            Route::Switches,
            Route::Ratings,
            Route::Chips,
            Route::DatePicker,
            Route::Radios,
            Route::Cards,
        ]
    }

    /// Showcase routes only (everything except Home)
    pub fn showcases() -> &'static [Route] {
        &Route::all()[1..]
    }

    /// Page heading shown at the top of the showcase
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Component Gallery",
            Route::Buttons => "Button",
            Route::Checkboxes => "Checkbox",
            Route::TextFields => "Text Field",
            Route::Selects => "Select",
            Route::Switches => "Switch",
            Route::Ratings => "Rating",
            Route::Chips => "Chip",
            Route::DatePicker => "Date Picker",
            Route::Radios => "Radio Button",
            Route::Cards => "Card",
        }
    }

    /// One-line description used on the home index cards
    pub fn description(&self) -> &'static str {
        match self {
            Route::Home => "A native showcase of interface widget variants, states and sizes.",
            Route::Buttons => {
                "Buttons allow users to take actions and make choices with a single tap."
            }
            Route::Checkboxes => "Checkboxes allow users to select one or more items from a set.",
            Route::TextFields => "Text fields let users enter and edit text in forms and dialogs.",
            Route::Selects => "Selects let users choose one value from a list of options.",
            Route::Switches => "Switches toggle the state of a single setting on or off.",
            Route::Ratings => "Ratings provide insight into opinions with a star scale.",
            Route::Chips => "Chips are compact elements that represent an input, attribute, or action.",
            Route::DatePicker => "Date pickers let users select a day from a calendar view.",
            Route::Radios => "Radio buttons allow users to select one option from a set.",
            Route::Cards => "Cards contain content and actions about a single subject.",
        }
    }

    /// Translation key for the sidebar label
    pub fn nav_key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Buttons => "buttons",
            Route::Checkboxes => "checkboxes",
            Route::TextFields => "text_fields",
            Route::Selects => "selects",
            Route::Switches => "switches",
            Route::Ratings => "ratings",
            Route::Chips => "chips",
            Route::DatePicker => "date_picker",
            Route::Radios => "radios",
            Route::Cards => "cards",
        }
    }

    /// Icon shown in the sidebar and on the home cards
    pub fn icon(&self) -> Icon {
        match self {
            Route::Home => Icon::new(IconName::LayoutDashboard),
            Route::Buttons => Icon::from(CustomIconName::ButtonWidget),
            Route::Checkboxes => Icon::from(CustomIconName::CheckboxWidget),
            Route::TextFields => Icon::from(CustomIconName::TextFieldWidget),
            Route::Selects => Icon::from(CustomIconName::SelectWidget),
            Route::Switches => Icon::from(CustomIconName::SwitchWidget),
            Route::Ratings => Icon::from(CustomIconName::Star),
            Route::Chips => Icon::from(CustomIconName::Tag),
            Route::DatePicker => Icon::from(CustomIconName::Calendar),
            Route::Radios => Icon::from(CustomIconName::RadioWidget),
            Route::Cards => Icon::from(CustomIconName::CardWidget),
        }
    }
}

/// Font size options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Convert to pixel size (returns None for default/Medium)
    pub fn to_pixels(self) -> Option<f32> {
        match self {
            FontSize::Small => Some(14.0),
            FontSize::Medium => None, // Use system default
            FontSize::Large => Some(18.0),
        }
    }
}

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

/// Font size action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum FontSizeAction {
    Large,
    Medium,
    Small,
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("component-gallery.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryAppState {
    route: Route,
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
    font_size: Option<FontSize>,
}

impl GalleryAppState {
    /// Load state from config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once("-") {
                state.locale = Some(lang.to_string());
            }
        }

        // Always start at home
        state.route = Route::Home;

        Ok(state)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size.unwrap_or(FontSize::Medium)
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            self.route = route;
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn set_font_size(&mut self, font_size: Option<FontSize>) {
        self.font_size = font_size;
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<GalleryStore>()`
#[derive(Clone)]
pub struct GalleryStore {
    app_state: Entity<GalleryAppState>,
}

impl GalleryStore {
    /// Create a new global store
    pub fn new(app_state: Entity<GalleryAppState>) -> Self {
        Self { app_state }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<GalleryAppState> {
        self.app_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a GalleryAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut GalleryAppState, &mut Context<GalleryAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }

    /// Get a clone of current app state
    pub fn value(&self, cx: &App) -> GalleryAppState {
        self.app_state.read(cx).clone()
    }
}

impl Global for GalleryStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &GalleryAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut GalleryAppState, &App) + Send + 'static + Clone,
{
    let store = cx.global::<GalleryStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_toml_round_trip() {
        let mut state = GalleryAppState::new();
        state.set_theme(Some(ThemeMode::Dark));
        state.set_locale("en".to_string());
        state.set_font_size(Some(FontSize::Large));

        let encoded = toml::to_string(&state).expect("serialize");
        let decoded: GalleryAppState = toml::from_str(&encoded).expect("deserialize");

        assert_eq!(decoded.theme(), Some(ThemeMode::Dark));
        assert_eq!(decoded.locale(), "en");
        assert_eq!(decoded.font_size(), FontSize::Large);
    }

    #[test]
    fn test_theme_string_mapping() {
        let mut state = GalleryAppState::new();
        assert_eq!(state.theme(), None);

        state.set_theme(Some(ThemeMode::Light));
        assert_eq!(state.theme(), Some(ThemeMode::Light));

        state.set_theme(None);
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn test_route_titles_are_unique() {
        let mut titles = Vec::new();
        for route in Route::all() {
            assert!(
                !titles.contains(&route.title()),
                "duplicate page title {:?}",
                route.title()
            );
            titles.push(route.title());
        }
    }

    #[test]
    fn test_showcases_exclude_home() {
        assert!(!Route::showcases().contains(&Route::Home));
        assert_eq!(Route::showcases().len(), Route::all().len() - 1);
    }
}
