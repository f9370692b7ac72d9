//! Rating Showcase Page

use crate::assets::CustomIconName;
use crate::components::Section;
use crate::components::primitives::{ControlSize, Rating};
use crate::states::{Route, rating_text};
use crate::theme::colors::GalleryColors;
use gpui::{Context, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, StyledExt, h_flex, v_flex};

use super::page_frame;

/// Rating showcase view
pub struct RatingsPage {
    /// Controlled rating with hover feedback
    value: u8,
    /// Hovered candidate while the pointer is over the stars
    hover: Option<u8>,
    /// Heart-icon rating
    hearts: u8,
    /// Product review example
    review: u8,
}

impl RatingsPage {
    /// Create a new ratings page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            value: 2,
            hover: None,
            hearts: 3,
            review: 0,
        }
    }
}

impl Render for RatingsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();

        let hover_label = {
            let shown = self.hover.unwrap_or(self.value);
            if shown == 0 {
                "No rating yet".to_string()
            } else {
                rating_text(shown)
            }
        };

        let review_text = match self.review {
            0 => "Tap a star to review this product.".to_string(),
            value => format!("Thanks! You rated it {}.", rating_text(value)),
        };

        let value_entity = entity.clone();
        let hover_entity = entity.clone();
        let hearts_entity = entity.clone();
        let review_entity = entity.clone();

        page_frame(Route::Ratings, cx)
            .child(
                Section::new("Controlled")
                    .description("Hovering previews a value; the label names it.")
                    .child(
                        h_flex()
                            .gap_4()
                            .items_center()
                            .child(
                                Rating::new("controlled")
                                    .value(self.value)
                                    .hover(self.hover)
                                    .on_change(move |value, _window, cx| {
                                        value_entity.update(cx, |this, cx| {
                                            this.value = value;
                                            cx.notify();
                                        });
                                    })
                                    .on_hover(move |hover, _window, cx| {
                                        hover_entity.update(cx, |this, cx| {
                                            if this.hover != hover {
                                                this.hover = hover;
                                                cx.notify();
                                            }
                                        });
                                    }),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(hover_label),
                            ),
                    ),
            )
            .child(
                Section::new("States").child(
                    v_flex()
                        .gap_3()
                        .child(
                            h_flex()
                                .gap_3()
                                .items_center()
                                .child(Rating::new("read-only").value(3).readonly(true))
                                .child(state_label("Read only", cx)),
                        )
                        .child(
                            h_flex()
                                .gap_3()
                                .items_center()
                                .child(Rating::new("disabled").value(4).disabled(true))
                                .child(state_label("Disabled", cx)),
                        )
                        .child(
                            h_flex()
                                .gap_3()
                                .items_center()
                                .child(Rating::new("empty").readonly(true))
                                .child(state_label("No value", cx)),
                        ),
                ),
            )
            .child(
                Section::new("Sizes").child(
                    v_flex()
                        .gap_3()
                        .child(Rating::new("size-small").value(3).size(ControlSize::Small).readonly(true))
                        .child(Rating::new("size-medium").value(3).readonly(true))
                        .child(Rating::new("size-large").value(3).size(ControlSize::Large).readonly(true)),
                ),
            )
            .child(
                Section::new("Custom icon")
                    .description("Hearts instead of stars.")
                    .child(
                        Rating::new("hearts")
                            .value(self.hearts)
                            .icons(CustomIconName::HeartFilled, CustomIconName::Heart)
                            .fill_color(GalleryColors::danger())
                            .on_change(move |value, _window, cx| {
                                hearts_entity.update(cx, |this, cx| {
                                    this.hearts = value;
                                    cx.notify();
                                });
                            }),
                    ),
            )
            .child(
                Section::new("Product review").child(
                    v_flex()
                        .gap_2()
                        .w(px(360.0))
                        .p_4()
                        .rounded_lg()
                        .border_1()
                        .border_color(cx.theme().border)
                        .child(
                            div()
                                .text_base()
                                .font_semibold()
                                .text_color(cx.theme().foreground)
                                .child("Mechanical Keyboard"),
                        )
                        .child(Rating::new("review").value(self.review).on_change(
                            move |value, _window, cx| {
                                review_entity.update(cx, |this, cx| {
                                    this.review = value;
                                    cx.notify();
                                });
                            },
                        ))
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(review_text),
                        ),
                ),
            )
    }
}

fn state_label(text: &'static str, cx: &Context<RatingsPage>) -> impl IntoElement {
    div()
        .text_sm()
        .text_color(cx.theme().muted_foreground)
        .child(text)
}
