//! Switch Showcase Page

use crate::components::Section;
use crate::components::primitives::{ControlSize, Switch};
use crate::states::{Route, TriState};
use crate::theme::colors::Tone;
use gpui::{Context, Window, div, prelude::*};
use gpui_component::{ActiveTheme, h_flex, v_flex};

use super::page_frame;

const SETTINGS: [&str; 3] = ["Wi-Fi", "Bluetooth", "Location"];

/// Switch showcase view
pub struct SwitchesPage {
    /// Plain toggle
    basic: bool,
    /// Controlled switch whose label flips between On and Off
    powered: bool,
    /// Settings group with a summary line
    settings: TriState,
}

impl SwitchesPage {
    /// Create a new switches page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            basic: true,
            powered: false,
            settings: TriState::new(true, true, false),
        }
    }
}

impl Render for SwitchesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();

        let mut tone_switches = Vec::new();
        for (index, tone) in Tone::all().iter().enumerate() {
            tone_switches.push(
                Switch::new(("tone-switch", index))
                    .checked(true)
                    .tone(*tone)
                    .label(tone.label()),
            );
        }

        let mut setting_rows = Vec::new();
        for (index, name) in SETTINGS.iter().enumerate() {
            let entity = entity.clone();
            setting_rows.push(
                h_flex()
                    .justify_between()
                    .items_center()
                    .child(div().text_sm().text_color(cx.theme().foreground).child(*name))
                    .child(
                        Switch::new(("setting", index))
                            .checked(self.settings.get(index))
                            .on_change(move |_checked, _window, cx| {
                                entity.update(cx, |this, cx| {
                                    this.settings.toggle(index);
                                    cx.notify();
                                });
                            }),
                    ),
            );
        }

        let summary = format!("{} of {} enabled", self.settings.checked_count(), SETTINGS.len());
        let powered_label = if self.powered { "On" } else { "Off" };

        let basic_entity = entity.clone();
        let powered_entity = entity.clone();

        page_frame(Route::Switches, cx)
            .child(
                Section::new("Basic").child(
                    h_flex()
                        .gap_5()
                        .items_center()
                        .child(Switch::new("basic").checked(self.basic).on_change(
                            move |checked, _window, cx| {
                                basic_entity.update(cx, |this, cx| {
                                    this.basic = checked;
                                    cx.notify();
                                });
                            },
                        ))
                        .child(Switch::new("basic-off"))
                        .child(Switch::new("basic-disabled").disabled(true))
                        .child(Switch::new("basic-disabled-on").checked(true).disabled(true)),
                ),
            )
            .child(
                Section::new("Controlled")
                    .description("The label flips exactly once per click.")
                    .child(
                        Switch::new("controlled")
                            .checked(self.powered)
                            .label(powered_label)
                            .on_change(move |checked, _window, cx| {
                                powered_entity.update(cx, |this, cx| {
                                    this.powered = checked;
                                    cx.notify();
                                });
                            }),
                    ),
            )
            .child(
                Section::new("Colors")
                    .child(h_flex().gap_5().items_center().flex_wrap().children(tone_switches)),
            )
            .child(
                Section::new("Sizes").child(
                    h_flex()
                        .gap_5()
                        .items_center()
                        .child(
                            Switch::new("size-small")
                                .checked(true)
                                .size(ControlSize::Small)
                                .label("Small"),
                        )
                        .child(Switch::new("size-medium").checked(true).label("Medium"))
                        .child(
                            Switch::new("size-large")
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
                        .child(Switch::new("label-end").checked(true).label("End"))
                        .child(
                            Switch::new("label-start")
                                .checked(true)
                                .label("Start")
                                .label_first(),
                        ),
                ),
            )
            .child(
                Section::new("Settings group")
                    .description("A settings panel with a live summary.")
                    .child(
                        v_flex()
                            .gap_3()
                            .w(gpui::px(320.0))
                            .children(setting_rows)
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(summary),
                            ),
                    ),
            )
    }
}
