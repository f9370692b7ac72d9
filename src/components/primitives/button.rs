//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, Hsla, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{ActiveTheme, Colorize, Icon, IconName, StyledExt};

use crate::assets::CustomIconName;
use crate::components::primitives::ControlSize;
use crate::theme::colors::{GalleryColors, Tone};

/// Button fill style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid tone background
    #[default]
    Filled,
    /// Tone border and text on a transparent background
    Outlined,
    /// Tone text only
    Text,
    /// Plain foreground text, subtle hover
    Ghost,
}

/// A tone-colored button
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    tone: Tone,
    size: ControlSize,
    disabled: bool,
    loading: bool,
    full_width: bool,
    start_icon: Option<CustomIconName>,
    end_icon: Option<CustomIconName>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new filled primary button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Filled,
            tone: Tone::Primary,
            size: ControlSize::Medium,
            disabled: false,
            loading: false,
            full_width: false,
            start_icon: None,
            end_icon: None,
            on_click: None,
        }
    }

    /// Set the fill style
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the tone color
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the control size
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show a spinner and ignore clicks
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretch to the parent width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Icon placed before the label
    pub fn start_icon(mut self, icon: CustomIconName) -> Self {
        self.start_icon = Some(icon);
        self
    }

    /// Icon placed after the label
    pub fn end_icon(mut self, icon: CustomIconName) -> Self {
        self.end_icon = Some(icon);
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let tone: Hsla = self.tone.color().into();
        let on_tone: Hsla = GalleryColors::text_on_tone().into();
        let transparent: Hsla = GalleryColors::transparent().into();

        let (bg, text, border, hover_bg) = match self.variant {
            ButtonVariant::Filled => (tone, on_tone, tone, tone.darken(0.1)),
            ButtonVariant::Outlined => (transparent, tone, tone, tone.opacity(0.08)),
            ButtonVariant::Text => (transparent, tone, transparent, tone.opacity(0.08)),
            ButtonVariant::Ghost => (
                transparent,
                cx.theme().foreground,
                transparent,
                cx.theme().secondary,
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ControlSize::Small => (px(10.0), px(4.0), px(12.0)),
            ControlSize::Medium => (px(16.0), px(6.0), px(14.0)),
            ControlSize::Large => (px(22.0), px(8.0), px(15.0)),
        };

        let interactive = !self.disabled && !self.loading;

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .px(padding_x)
            .py(padding_y)
            .rounded_md()
            .border_1()
            .border_color(border)
            .bg(bg)
            .text_color(text)
            .text_size(font_size)
            .font_semibold()
            .cursor_pointer()
            .when(self.full_width, |this| this.w_full())
            .when(!interactive, |this| this.opacity(0.5));

        if self.loading {
            element = element.child(Icon::new(IconName::Loader).text_color(text).size_4());
        } else if let Some(icon) = self.start_icon {
            element = element.child(Icon::from(icon).text_color(text).size_4());
        }

        element = element.child(self.label);

        if let Some(icon) = self.end_icon {
            element = element.child(Icon::from(icon).text_color(text).size_4());
        }

        if interactive {
            element = element.hover(move |s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
