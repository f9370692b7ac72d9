//! Embedded assets for the gallery
//!
//! Uses rust-embed to bundle icons and other assets at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Custom icon names for the gallery
#[derive(Debug, Clone, Copy)]
pub enum CustomIconName {
    /// Button showcase icon
    ButtonWidget,
    /// Checkbox showcase icon
    CheckboxWidget,
    /// Text field showcase icon
    TextFieldWidget,
    /// Select showcase icon
    SelectWidget,
    /// Switch showcase icon
    SwitchWidget,
    /// Radio showcase icon
    RadioWidget,
    /// Card showcase icon
    CardWidget,
    /// Calendar / date picker icon
    Calendar,
    /// Outline star (rating)
    Star,
    /// Filled star (rating)
    StarFilled,
    /// Outline heart
    Heart,
    /// Filled heart
    HeartFilled,
    /// Tag / chip icon
    Tag,
    /// Smiley face (chip avatar demos)
    Smile,
    /// Paper-plane send icon
    Send,
    /// Trash can icon
    Trash,
    /// Minus icon (indeterminate checkbox)
    Minus,
    /// Download icon
    Download,
    /// Check mark
    Check,
    /// Close / dismiss cross
    Close,
    /// Chevron pointing left (calendar navigation)
    ChevronLeft,
    /// Chevron pointing down (select caret)
    ChevronDown,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::ButtonWidget => "icons/square-mouse-pointer.svg",
            CustomIconName::CheckboxWidget => "icons/square-check.svg",
            CustomIconName::TextFieldWidget => "icons/text-cursor.svg",
            CustomIconName::SelectWidget => "icons/list.svg",
            CustomIconName::SwitchWidget => "icons/toggle-right.svg",
            CustomIconName::RadioWidget => "icons/circle-dot.svg",
            CustomIconName::CardWidget => "icons/panel-top.svg",
            CustomIconName::Calendar => "icons/calendar.svg",
            CustomIconName::Star => "icons/star.svg",
            CustomIconName::StarFilled => "icons/star-filled.svg",
            CustomIconName::Heart => "icons/heart.svg",
            CustomIconName::HeartFilled => "icons/heart-filled.svg",
            CustomIconName::Tag => "icons/tag.svg",
            CustomIconName::Smile => "icons/smile.svg",
            CustomIconName::Send => "icons/send.svg",
            CustomIconName::Trash => "icons/trash.svg",
            CustomIconName::Minus => "icons/minus.svg",
            CustomIconName::Download => "icons/download.svg",
            CustomIconName::Check => "icons/check.svg",
            CustomIconName::Close => "icons/close.svg",
            CustomIconName::ChevronLeft => "icons/chevron-left.svg",
            CustomIconName::ChevronDown => "icons/chevron-down.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}
