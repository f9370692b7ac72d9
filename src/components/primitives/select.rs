//! Select Trigger Component
//!
//! The non-interactive trigger box. Rows that actually open an option menu
//! wrap a dropdown button instead; this element covers the styling states
//! (placeholder, error, disabled, sizes) the showcase needs side by side.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{ActiveTheme, Icon};

use crate::assets::CustomIconName;
use crate::components::primitives::ControlSize;
use crate::theme::colors::GalleryColors;

/// A select trigger box with label, value and helper text
#[derive(IntoElement)]
pub struct Select {
    id: ElementId,
    label: Option<SharedString>,
    placeholder: SharedString,
    value: Option<SharedString>,
    helper_text: Option<SharedString>,
    error: bool,
    disabled: bool,
    size: ControlSize,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Select {
    /// Create a new select trigger
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            placeholder: "Select...".into(),
            value: None,
            helper_text: None,
            error: false,
            disabled: false,
            size: ControlSize::Medium,
            on_click: None,
        }
    }

    /// Set the label shown above the box
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder shown while no value is picked
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the picked value
    pub fn value(mut self, value: Option<SharedString>) -> Self {
        self.value = value;
        self
    }

    /// Set the helper line shown under the box
    pub fn helper_text(mut self, helper_text: impl Into<SharedString>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Show the error styling
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the control size
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
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

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let has_value = self.value.is_some();
        let border_color = if self.error {
            GalleryColors::danger().into()
        } else {
            cx.theme().border
        };
        let text_color = if has_value {
            cx.theme().foreground
        } else {
            cx.theme().muted_foreground
        };
        let helper_color = if self.error {
            GalleryColors::danger().into()
        } else {
            cx.theme().muted_foreground
        };

        let (height, font_size) = match self.size {
            ControlSize::Small => (px(28.0), px(13.0)),
            ControlSize::Medium => (px(34.0), px(14.0)),
            ControlSize::Large => (px(42.0), px(15.0)),
        };

        let display: SharedString = self.value.unwrap_or(self.placeholder);

        let mut trigger = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .h(height)
            .px_3()
            .rounded_md()
            .border_1()
            .border_color(border_color)
            .bg(cx.theme().background)
            .text_color(text_color)
            .text_size(font_size)
            .child(display)
            .child(
                Icon::from(CustomIconName::ChevronDown)
                    .text_color(cx.theme().muted_foreground)
                    .size_4(),
            );

        if self.disabled {
            trigger = trigger.opacity(0.5);
        } else {
            trigger = trigger.cursor_pointer();
            if let Some(handler) = self.on_click {
                trigger = trigger.on_click(handler);
            }
        }

        div()
            .flex()
            .flex_col()
            .gap_1()
            .w_full()
            .when_some(self.label, |this, label| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().muted_foreground)
                        .child(label),
                )
            })
            .child(trigger)
            .when_some(self.helper_text, |this, helper_text| {
                this.child(div().text_xs().text_color(helper_color).child(helper_text))
            })
    }
}
