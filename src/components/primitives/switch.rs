//! Switch Component

use gpui::{
    div, prelude::*, px, App, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::components::primitives::ControlSize;
use crate::theme::colors::{GalleryColors, Tone};

/// A toggle switch
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    label_first: bool,
    tone: Tone,
    size: ControlSize,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Switch {
    /// Create a new switch
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            label_first: false,
            tone: Tone::Primary,
            size: ControlSize::Medium,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the on/off state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Place the label before the track instead of after it
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

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let tone: Hsla = self.tone.color().into();
        let knob_color: Hsla = GalleryColors::text_on_tone().into();

        let (track_width, track_height, knob_size) = match self.size {
            ControlSize::Small => (px(30.0), px(16.0), px(12.0)),
            ControlSize::Medium => (px(40.0), px(22.0), px(16.0)),
            ControlSize::Large => (px(50.0), px(28.0), px(22.0)),
        };

        let track_bg = if checked { tone } else { cx.theme().secondary };

        // Knob position is done with flex alignment rather than offsets
        let track = div()
            .w(track_width)
            .h(track_height)
            .rounded_full()
            .bg(track_bg)
            .p(px(3.0))
            .flex()
            .items_center()
            .map(|this| if checked { this.justify_end() } else { this.justify_start() })
            .child(div().size(knob_size).rounded_full().bg(knob_color));

        let label_el = self.label.map(|label| {
            div()
                .text_sm()
                .text_color(cx.theme().foreground)
                .child(label)
        });

        let mut switch = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer();

        switch = if self.label_first {
            switch.children(label_el).child(track)
        } else {
            switch.child(track).children(label_el)
        };

        if !self.disabled {
            if let Some(handler) = self.on_change {
                switch = switch.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        } else {
            switch = switch.opacity(0.5);
        }

        switch
    }
}
