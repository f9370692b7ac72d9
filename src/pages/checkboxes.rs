//! Checkbox Showcase Page

use crate::components::Section;
use crate::components::primitives::{Checkbox, ControlSize};
use crate::states::{Route, TriState};
use crate::theme::colors::{GalleryColors, Tone};
use gpui::{Context, Window, div, prelude::*};
use gpui_component::{ActiveTheme, h_flex, v_flex};

use super::page_frame;

const NOTIFICATION_CHANNELS: [&str; 3] = ["Email", "SMS", "Push"];
const SESSION_OPTIONS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// Checkbox showcase view
pub struct CheckboxesPage {
    /// Controlled checkbox whose label mirrors its state
    agreed: bool,
    /// Parent/children indeterminate demo
    channels: TriState,
    /// Pick-exactly-two validation group
    sessions: TriState,
}

impl CheckboxesPage {
    /// Create a new checkboxes page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            agreed: false,
            channels: TriState::new(true, false, false),
            sessions: TriState::new(true, true, false),
        }
    }
}

impl Render for CheckboxesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();

        let mut tone_boxes = Vec::new();
        for (index, tone) in Tone::all().iter().enumerate() {
            tone_boxes.push(
                Checkbox::new(("tone-check", index))
                    .checked(true)
                    .tone(*tone)
                    .label(tone.label()),
            );
        }

        // Children rows for the indeterminate demo
        let mut channel_rows = Vec::new();
        for (index, name) in NOTIFICATION_CHANNELS.iter().enumerate() {
            let entity = entity.clone();
            channel_rows.push(
                Checkbox::new(("channel", index))
                    .checked(self.channels.get(index))
                    .label(*name)
                    .on_change(move |_checked, _window, cx| {
                        entity.update(cx, |this, cx| {
                            this.channels.toggle(index);
                            cx.notify();
                        });
                    }),
            );
        }

        let mut session_rows = Vec::new();
        for (index, name) in SESSION_OPTIONS.iter().enumerate() {
            let entity = entity.clone();
            session_rows.push(
                Checkbox::new(("session", index))
                    .checked(self.sessions.get(index))
                    .tone(Tone::Secondary)
                    .label(*name)
                    .on_change(move |_checked, _window, cx| {
                        entity.update(cx, |this, cx| {
                            this.sessions.toggle(index);
                            cx.notify();
                        });
                    }),
            );
        }

        let sessions_valid = self.sessions.exactly_two();
        let helper_color: gpui::Hsla = if sessions_valid {
            GalleryColors::success().into()
        } else {
            GalleryColors::danger().into()
        };
        let helper_text = if sessions_valid {
            "Two sessions picked."
        } else {
            "Pick exactly two sessions."
        };

        let agree_label = if self.agreed { "Checked" } else { "Unchecked" };
        let controlled_entity = entity.clone();
        let parent_entity = entity.clone();

        page_frame(Route::Checkboxes, cx)
            .child(
                Section::new("Basic").child(
                    h_flex()
                        .gap_5()
                        .items_center()
                        .child(Checkbox::new("basic-unchecked"))
                        .child(Checkbox::new("basic-checked").checked(true))
                        .child(Checkbox::new("basic-disabled").disabled(true))
                        .child(
                            Checkbox::new("basic-disabled-checked")
                                .checked(true)
                                .disabled(true),
                        ),
                ),
            )
            .child(
                Section::new("Controlled")
                    .description("The label mirrors the current state.")
                    .child(
                        Checkbox::new("controlled")
                            .checked(self.agreed)
                            .label(agree_label)
                            .on_change(move |checked, _window, cx| {
                                controlled_entity.update(cx, |this, cx| {
                                    this.agreed = checked;
                                    cx.notify();
                                });
                            }),
                    ),
            )
            .child(
                Section::new("Colors")
                    .child(h_flex().gap_5().items_center().flex_wrap().children(tone_boxes)),
            )
            .child(
                Section::new("Sizes").child(
                    h_flex()
                        .gap_5()
                        .items_center()
                        .child(
                            Checkbox::new("size-small")
                                .checked(true)
                                .size(ControlSize::Small)
                                .label("Small"),
                        )
                        .child(Checkbox::new("size-medium").checked(true).label("Medium"))
                        .child(
                            Checkbox::new("size-large")
                                .checked(true)
                                .size(ControlSize::Large)
                                .label("Large"),
                        ),
                ),
            )
            .child(
                Section::new("Label placement").child(
                    h_flex()
                        .gap_5()
                        .items_center()
                        .child(Checkbox::new("label-end").checked(true).label("End"))
                        .child(
                            Checkbox::new("label-start")
                                .checked(true)
                                .label("Start")
                                .label_first(),
                        ),
                ),
            )
            .child(
                Section::new("Indeterminate")
                    .description("The parent derives its display from the three children.")
                    .child(
                        v_flex()
                            .gap_2()
                            .child(
                                Checkbox::new("channels-parent")
                                    .checked(self.channels.all_checked())
                                    .indeterminate(self.channels.indeterminate())
                                    .label("All notifications")
                                    .on_change(move |checked, _window, cx| {
                                        parent_entity.update(cx, |this, cx| {
                                            this.channels.set_all(checked);
                                            cx.notify();
                                        });
                                    }),
                            )
                            .child(v_flex().gap_2().ml_6().children(channel_rows)),
                    ),
            )
            .child(
                Section::new("Validation")
                    .description("Pick exactly two of the three sessions.")
                    .child(v_flex().gap_2().children(session_rows))
                    .child(div().text_xs().text_color(helper_color).child(helper_text)),
            )
    }
}
