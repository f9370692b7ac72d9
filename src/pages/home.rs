//! Home Page
//!
//! Component index: a hero heading, one clickable card per showcase and a
//! get-started panel.

use crate::components::primitives::{Button, ButtonVariant};
use crate::states::{GalleryStore, Route, i18n_common};
use crate::theme::colors::GalleryColors;
use gpui::{Context, Hsla, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, Colorize, StyledExt, h_flex, v_flex};

/// Home page view
pub struct HomePage;

impl HomePage {
    /// Create a new home page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render one clickable showcase card
    fn render_showcase_card(
        &self,
        index: usize,
        route: Route,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let tone: Hsla = GalleryColors::primary().into();

        v_flex()
            .id(("showcase-card", index))
            .w(px(280.0))
            .gap_3()
            .p_5()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .cursor_pointer()
            .hover(move |s| s.border_color(tone).bg(tone.opacity(0.04)))
            .child(
                div()
                    .size(px(40.0))
                    .rounded_md()
                    .bg(tone.opacity(0.12))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(route.icon().text_color(tone)),
            )
            .child(
                div()
                    .text_base()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child(route.title()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(route.description()),
            )
            .on_click(cx.listener(move |_this, _event, _window, cx| {
                cx.update_global::<GalleryStore, ()>(|store, cx| {
                    store.update(cx, |state, cx| {
                        state.go_to(route, cx);
                    });
                });
            }))
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut cards = Vec::new();
        for (index, route) in Route::showcases().iter().enumerate() {
            cards.push(self.render_showcase_card(index, *route, cx));
        }

        let tone: Hsla = GalleryColors::primary().into();

        v_flex()
            .id("home-page")
            .size_full()
            .overflow_y_scroll()
            .p_8()
            .gap_8()
            // Hero
            .child(
                v_flex()
                    .gap_3()
                    .child(
                        div()
                            .text_3xl()
                            .font_bold()
                            .text_color(cx.theme().foreground)
                            .child(i18n_common(cx, "hero_title")),
                    )
                    .child(
                        div()
                            .text_base()
                            .text_color(cx.theme().muted_foreground)
                            .max_w(px(560.0))
                            .child(i18n_common(cx, "hero_subtitle")),
                    ),
            )
            // Component grid
            .child(div().flex().flex_wrap().gap_4().children(cards))
            // Get started panel
            .child(
                v_flex()
                    .gap_3()
                    .p_6()
                    .rounded_lg()
                    .bg(tone.opacity(0.06))
                    .border_1()
                    .border_color(tone.opacity(0.25))
                    .child(
                        div()
                            .text_lg()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child(i18n_common(cx, "get_started_title")),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(i18n_common(cx, "get_started_body")),
                    )
                    .child(
                        h_flex().child(
                            Button::new("get-started", i18n_common(cx, "get_started_cta"))
                                .variant(ButtonVariant::Filled)
                                .on_click(cx.listener(|_this, _event, _window, cx| {
                                    cx.update_global::<GalleryStore, ()>(|store, cx| {
                                        store.update(cx, |state, cx| {
                                            state.go_to(Route::Buttons, cx);
                                        });
                                    });
                                })),
                        ),
                    ),
            )
    }
}
