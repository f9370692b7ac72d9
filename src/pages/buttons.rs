//! Button Showcase Page

use crate::assets::CustomIconName;
use crate::components::Section;
use crate::components::primitives::{Button, ButtonVariant, ControlSize};
use crate::states::Route;
use crate::theme::colors::Tone;
use gpui::{Context, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex};

use super::page_frame;

/// Button showcase view
pub struct ButtonsPage {
    /// How many times the counter button was pressed
    click_count: usize,
}

impl ButtonsPage {
    /// Create a new buttons page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self { click_count: 0 }
    }
}

impl Render for ButtonsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut tone_buttons = Vec::new();
        for (index, tone) in Tone::all().iter().enumerate() {
            tone_buttons.push(
                Button::new(("tone-btn", index), tone.label()).tone(*tone),
            );
        }

        page_frame(Route::Buttons, cx)
            .child(
                Section::new("Variants")
                    .description("Filled for primary actions, outlined and text for secondary ones.")
                    .child(
                        h_flex()
                            .gap_3()
                            .items_center()
                            .child(Button::new("variant-filled", "Filled"))
                            .child(
                                Button::new("variant-outlined", "Outlined")
                                    .variant(ButtonVariant::Outlined),
                            )
                            .child(Button::new("variant-text", "Text").variant(ButtonVariant::Text))
                            .child(
                                Button::new("variant-ghost", "Ghost").variant(ButtonVariant::Ghost),
                            ),
                    ),
            )
            .child(
                Section::new("Colors")
                    .description("Every button accepts one of the shared tone colors.")
                    .child(h_flex().gap_3().items_center().flex_wrap().children(tone_buttons)),
            )
            .child(
                Section::new("Sizes").child(
                    h_flex()
                        .gap_3()
                        .items_center()
                        .child(Button::new("size-small", "Small").size(ControlSize::Small))
                        .child(Button::new("size-medium", "Medium"))
                        .child(Button::new("size-large", "Large").size(ControlSize::Large)),
                ),
            )
            .child(
                Section::new("Icons").child(
                    h_flex()
                        .gap_3()
                        .items_center()
                        .child(
                            Button::new("icon-send", "Send").end_icon(CustomIconName::Send),
                        )
                        .child(
                            Button::new("icon-download", "Download")
                                .variant(ButtonVariant::Outlined)
                                .start_icon(CustomIconName::Download),
                        )
                        .child(
                            Button::new("icon-delete", "Delete")
                                .tone(Tone::Danger)
                                .start_icon(CustomIconName::Trash),
                        ),
                ),
            )
            .child(
                Section::new("States").child(
                    h_flex()
                        .gap_3()
                        .items_center()
                        .child(Button::new("state-disabled", "Disabled").disabled(true))
                        .child(
                            Button::new("state-disabled-outlined", "Disabled")
                                .variant(ButtonVariant::Outlined)
                                .disabled(true),
                        )
                        .child(Button::new("state-loading", "Loading").loading(true)),
                ),
            )
            .child(
                Section::new("Click handling")
                    .description("Each press increments the counter below.")
                    .child(
                        h_flex()
                            .gap_4()
                            .items_center()
                            .child(Button::new("counter", "Click me").on_click(cx.listener(
                                |this, _event, _window, cx| {
                                    this.click_count += 1;
                                    cx.notify();
                                },
                            )))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("Clicked {} times", self.click_count)),
                            ),
                    ),
            )
            .child(
                Section::new("Full width").child(
                    div()
                        .w(px(420.0))
                        .child(Button::new("full-width", "Stretch to container").full_width()),
                ),
            )
    }
}
