//! Checkbox Component

use gpui::{
    div, prelude::*, px, App, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{ActiveTheme, Icon};

use crate::assets::CustomIconName;
use crate::components::primitives::ControlSize;
use crate::theme::colors::{GalleryColors, Tone};

/// A checkbox with an optional indeterminate display state
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    indeterminate: bool,
    label: Option<SharedString>,
    label_first: bool,
    tone: Tone,
    size: ControlSize,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            indeterminate: false,
            label: None,
            label_first: false,
            tone: Tone::Primary,
            size: ControlSize::Medium,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Show the indeterminate mark instead of a check mark
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Place the label before the box instead of after it
    pub fn label_first(mut self) -> Self {
        self.label_first = true;
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

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler, called with the next checked value
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let filled = checked || self.indeterminate;
        let tone: Hsla = self.tone.color().into();
        let on_tone: Hsla = GalleryColors::text_on_tone().into();

        let box_size = match self.size {
            ControlSize::Small => px(15.0),
            ControlSize::Medium => px(18.0),
            ControlSize::Large => px(22.0),
        };

        let (box_bg, border_color) = if filled {
            (tone, tone)
        } else {
            (cx.theme().background, cx.theme().border)
        };

        let mark = if self.indeterminate {
            Some(CustomIconName::Minus)
        } else if checked {
            Some(CustomIconName::Check)
        } else {
            None
        };

        let box_el = div()
            .size(box_size)
            .rounded_sm()
            .border_1()
            .border_color(border_color)
            .bg(box_bg)
            .flex()
            .items_center()
            .justify_center()
            .when_some(mark, |this, mark| {
                this.child(Icon::from(mark).text_color(on_tone).size_3())
            });

        let label_el = self.label.map(|label| {
            div()
                .text_sm()
                .text_color(cx.theme().foreground)
                .child(label)
        });

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer();

        checkbox = if self.label_first {
            checkbox.children(label_el).child(box_el)
        } else {
            checkbox.child(box_el).children(label_el)
        };

        if !self.disabled {
            if let Some(handler) = self.on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        } else {
            checkbox = checkbox.opacity(0.5);
        }

        checkbox
    }
}
