//! Chip Showcase Page

use crate::assets::CustomIconName;
use crate::components::Section;
use crate::components::primitives::{Button, ButtonVariant, Chip, ChipVariant, ControlSize};
use crate::states::{Route, TagList};
use crate::theme::colors::Tone;
use gpui::{Context, Window, div, prelude::*};
use gpui_component::{ActiveTheme, StyledExt, h_flex, v_flex};

use super::page_frame;

const FRAMEWORK_TAGS: [&str; 5] = ["Angular", "jQuery", "Polymer", "React", "Vue.js"];
const POST_TAGS: [&str; 4] = ["rust", "gui", "desktop", "widgets"];

/// Chip showcase view
pub struct ChipsPage {
    /// Dismissible framework tags
    tags: TagList,
    /// Label of the last clicked chip
    last_clicked: Option<&'static str>,
}

impl ChipsPage {
    /// Create a new chips page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            tags: TagList::new(&FRAMEWORK_TAGS),
            last_clicked: None,
        }
    }
}

impl Render for ChipsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();

        let mut tone_chips = Vec::new();
        for (index, tone) in Tone::all().iter().enumerate() {
            tone_chips.push(Chip::new(("tone-chip", index), tone.label()).tone(*tone));
        }

        let mut tag_chips = Vec::new();
        for item in self.tags.items() {
            let entity = entity.clone();
            let key = item.key;
            tag_chips.push(
                Chip::new(("framework-tag", key), item.label)
                    .tone(Tone::Primary)
                    .on_dismiss(move |_event, _window, cx| {
                        entity.update(cx, |this, cx| {
                            this.tags.dismiss(key);
                            cx.notify();
                        });
                    }),
            );
        }

        let clicked_text = match self.last_clicked {
            Some(label) => format!("Last clicked: {label}"),
            None => "Click a chip above.".to_string(),
        };

        let mut clickable_chips = Vec::new();
        for (index, label) in ["Alpha", "Beta", "Stable"].into_iter().enumerate() {
            let entity = entity.clone();
            clickable_chips.push(
                Chip::new(("clickable-chip", index), label)
                    .variant(ChipVariant::Outlined)
                    .tone(Tone::Info)
                    .on_click(move |_event, _window, cx| {
                        entity.update(cx, |this, cx| {
                            this.last_clicked = Some(label);
                            cx.notify();
                        });
                    }),
            );
        }

        let mut post_chips = Vec::new();
        for (index, tag) in POST_TAGS.iter().enumerate() {
            post_chips.push(
                Chip::new(("post-tag", index), *tag)
                    .size(ControlSize::Small)
                    .icon(CustomIconName::Tag),
            );
        }

        let reset_entity = entity.clone();
        let tags_empty = self.tags.is_empty();

        page_frame(Route::Chips, cx)
            .child(
                Section::new("Variants").child(
                    h_flex()
                        .gap_3()
                        .items_center()
                        .child(Chip::new("variant-filled", "Filled"))
                        .child(Chip::new("variant-outlined", "Outlined").variant(ChipVariant::Outlined))
                        .child(Chip::new("variant-disabled", "Disabled").disabled(true)),
                ),
            )
            .child(
                Section::new("Colors")
                    .child(h_flex().gap_3().items_center().flex_wrap().children(tone_chips)),
            )
            .child(
                Section::new("Sizes").child(
                    h_flex()
                        .gap_3()
                        .items_center()
                        .child(Chip::new("size-small", "Small").size(ControlSize::Small))
                        .child(Chip::new("size-medium", "Medium"))
                        .child(Chip::new("size-large", "Large").size(ControlSize::Large)),
                ),
            )
            .child(
                Section::new("Adornments").child(
                    h_flex()
                        .gap_3()
                        .items_center()
                        .child(
                            Chip::new("icon-chip", "Tagged")
                                .tone(Tone::Success)
                                .icon(CustomIconName::Tag),
                        )
                        .child(Chip::new("avatar-chip", "Morgan").avatar("M")),
                ),
            )
            .child(
                Section::new("Clickable")
                    .child(h_flex().gap_3().items_center().children(clickable_chips))
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(clicked_text),
                    ),
            )
            .child(
                Section::new("Dismissible")
                    .description("Removing a tag keeps the rest in their original order.")
                    .child(
                        v_flex()
                            .gap_3()
                            .items_start()
                            .child(h_flex().gap_2().items_center().flex_wrap().children(tag_chips))
                            .map(|this| {
                                if tags_empty {
                                    this.child(
                                        div()
                                            .text_sm()
                                            .text_color(cx.theme().muted_foreground)
                                            .child("All tags dismissed."),
                                    )
                                } else {
                                    this
                                }
                            })
                            .child(
                                Button::new("reset-tags", "Reset")
                                    .variant(ButtonVariant::Text)
                                    .on_click(move |_event, _window, cx| {
                                        reset_entity.update(cx, |this, cx| {
                                            this.tags = TagList::new(&FRAMEWORK_TAGS);
                                            cx.notify();
                                        });
                                    }),
                            ),
                    ),
            )
            .child(
                Section::new("Post tags")
                    .description("Compact chips as metadata on a blog post.")
                    .child(
                        v_flex()
                            .gap_2()
                            .child(
                                div()
                                    .text_base()
                                    .font_semibold()
                                    .text_color(cx.theme().foreground)
                                    .child("Building native UI in Rust"),
                            )
                            .child(h_flex().gap_2().items_center().children(post_chips)),
                    ),
            )
    }
}
