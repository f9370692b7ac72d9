//! Radio Button Component

use gpui::{
    div, prelude::*, px, App, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::components::primitives::ControlSize;
use crate::theme::colors::Tone;

/// A single radio button; the owning page tracks which one is selected
#[derive(IntoElement)]
pub struct Radio {
    id: ElementId,
    selected: bool,
    label: Option<SharedString>,
    tone: Tone,
    size: ControlSize,
    disabled: bool,
    on_select: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Radio {
    /// Create a new radio button
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: false,
            label: None,
            tone: Tone::Primary,
            size: ControlSize::Medium,
            disabled: false,
            on_select: None,
        }
    }

    /// Set the selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
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

    /// Handler invoked when this option is picked
    pub fn on_select(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Radio {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let selected = self.selected;
        let tone: Hsla = self.tone.color().into();

        let (ring_size, dot_size) = match self.size {
            ControlSize::Small => (px(15.0), px(7.0)),
            ControlSize::Medium => (px(18.0), px(9.0)),
            ControlSize::Large => (px(22.0), px(11.0)),
        };

        let ring_color = if selected { tone } else { cx.theme().border };

        let mut radio = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(ring_size)
                    .rounded_full()
                    .border_2()
                    .border_color(ring_color)
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(selected, |this| {
                        this.child(div().size(dot_size).rounded_full().bg(tone))
                    }),
            );

        if let Some(label) = self.label {
            radio = radio.child(
                div()
                    .text_sm()
                    .text_color(cx.theme().foreground)
                    .child(label),
            );
        }

        if !self.disabled {
            if let Some(handler) = self.on_select {
                radio = radio.on_click(move |_event, window, cx| {
                    handler(window, cx);
                });
            }
        } else {
            radio = radio.opacity(0.5);
        }

        radio
    }
}
