//! Chip Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, Hsla, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{ActiveTheme, Colorize, Icon};

use crate::assets::CustomIconName;
use crate::components::primitives::ControlSize;
use crate::theme::colors::{GalleryColors, Tone};

/// Chip fill style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChipVariant {
    /// Soft tone background
    #[default]
    Filled,
    /// Tone border on a transparent background
    Outlined,
}

/// A compact labeled pill, optionally clickable or dismissible
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    variant: ChipVariant,
    tone: Option<Tone>,
    size: ControlSize,
    disabled: bool,
    icon: Option<CustomIconName>,
    avatar: Option<SharedString>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    on_dismiss: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    /// Create a new neutral chip
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ChipVariant::Filled,
            tone: None,
            size: ControlSize::Medium,
            disabled: false,
            icon: None,
            avatar: None,
            on_click: None,
            on_dismiss: None,
        }
    }

    /// Set the fill style
    pub fn variant(mut self, variant: ChipVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Color the chip with a tone; without one it stays neutral gray
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Set the control size
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Icon shown before the label
    pub fn icon(mut self, icon: CustomIconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Letter avatar shown before the label
    pub fn avatar(mut self, letter: impl Into<SharedString>) -> Self {
        self.avatar = Some(letter.into());
        self
    }

    /// Make the chip clickable
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Show a dismiss button and handle it
    pub fn on_dismiss(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_dismiss = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let tone: Hsla = match self.tone {
            Some(tone) => tone.color().into(),
            None => cx.theme().muted_foreground,
        };
        let transparent: Hsla = GalleryColors::transparent().into();

        let (bg, text, border) = match self.variant {
            ChipVariant::Filled => (tone.opacity(0.15), tone, transparent),
            ChipVariant::Outlined => (transparent, tone, tone),
        };

        let (height, font_size) = match self.size {
            ControlSize::Small => (px(24.0), px(12.0)),
            ControlSize::Medium => (px(30.0), px(13.0)),
            ControlSize::Large => (px(36.0), px(14.0)),
        };

        let clickable = !self.disabled && self.on_click.is_some();

        let mut chip = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .h(height)
            .px_3()
            .rounded_full()
            .border_1()
            .border_color(border)
            .bg(bg)
            .text_color(text)
            .text_size(font_size)
            .when(self.disabled, |this| this.opacity(0.5));

        if let Some(letter) = self.avatar {
            chip = chip.child(
                div()
                    .size(px(20.0))
                    .rounded_full()
                    .bg(tone.opacity(0.3))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(11.0))
                    .child(letter),
            );
        } else if let Some(icon) = self.icon {
            chip = chip.child(Icon::from(icon).text_color(text).size_4());
        }

        chip = chip.child(self.label);

        if let Some(handler) = self.on_dismiss {
            let dismiss = div()
                .id("dismiss")
                .cursor_pointer()
                .rounded_full()
                .hover(move |s| s.bg(tone.opacity(0.2)))
                .child(Icon::from(CustomIconName::Close).text_color(text).size_4())
                .on_click(move |event, window, cx| {
                    cx.stop_propagation();
                    handler(event, window, cx);
                });
            if !self.disabled {
                chip = chip.child(dismiss);
            }
        }

        if clickable {
            chip = chip.cursor_pointer().hover(move |s| s.bg(tone.opacity(0.25)));
            if let Some(handler) = self.on_click {
                chip = chip.on_click(handler);
            }
        }

        chip
    }
}
