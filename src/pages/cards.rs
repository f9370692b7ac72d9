//! Card Showcase Page

use crate::assets::CustomIconName;
use crate::components::Section;
use crate::components::primitives::{Button, ButtonVariant, Card, Chip, ControlSize, Rating};
use crate::states::Route;
use crate::theme::colors::{GalleryColors, Tone};
use gpui::{Context, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, Colorize, Icon, StyledExt, h_flex};

use super::page_frame;

const PRODUCTS: [(&str, &str, u8, Tone); 3] = [
    ("Desk Lamp", "$39", 4, Tone::Warning),
    ("Ergo Chair", "$249", 5, Tone::Info),
    ("Laptop Stand", "$59", 3, Tone::Success),
];

/// Card showcase view
pub struct CardsPage {
    /// Disclosure panel on the recipe card
    expanded: bool,
    /// Like toggle on the recipe card
    liked: bool,
}

impl CardsPage {
    /// Create a new cards page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            expanded: false,
            liked: false,
        }
    }

    /// Render one product card for the grid example
    fn render_product_card(&self, index: usize) -> Card {
        let (name, price, stars, tone) = PRODUCTS[index];

        Card::new()
            .width(220.0)
            .media(tone, CustomIconName::CardWidget)
            .title(name)
            .subtitle(price)
            .child(Rating::new(("product-rating", index)).value(stars).readonly(true))
            .action(
                Button::new(("product-add", index), "Add to cart")
                    .size(ControlSize::Small)
                    .full_width(),
            )
    }
}

impl Render for CardsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();

        let expanded = self.expanded;
        let liked = self.liked;
        let heart_icon = if liked {
            CustomIconName::HeartFilled
        } else {
            CustomIconName::Heart
        };
        let heart_color: gpui::Hsla = if liked {
            GalleryColors::danger().into()
        } else {
            cx.theme().muted_foreground
        };
        let expand_label = if expanded { "Show less" } else { "Show more" };

        let like_entity = entity.clone();
        let expand_entity = entity.clone();

        let mut recipe_card = Card::new()
            .width(340.0)
            .media(Tone::Secondary, CustomIconName::Smile)
            .title("Paella")
            .subtitle("September 14, 2021")
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(
                        "This impressive paella is a perfect party dish and a fun meal to cook \
                         together with your guests.",
                    ),
            )
            .action(
                div()
                    .id("like-btn")
                    .cursor_pointer()
                    .p_1()
                    .rounded_full()
                    .child(Icon::from(heart_icon).text_color(heart_color).size_5())
                    .on_click(move |_event, _window, cx| {
                        like_entity.update(cx, |this, cx| {
                            this.liked = !this.liked;
                            cx.notify();
                        });
                    }),
            )
            .action(
                Button::new("expand-btn", expand_label)
                    .variant(ButtonVariant::Text)
                    .on_click(move |_event, _window, cx| {
                        expand_entity.update(cx, |this, cx| {
                            this.expanded = !this.expanded;
                            cx.notify();
                        });
                    }),
            );

        if expanded {
            recipe_card = recipe_card.child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(
                        "Heat the broth, fry the chicken and rice, then add saffron and simmer \
                         gently without stirring until the rice is tender.",
                    ),
            );
        }

        let mut product_cards = Vec::new();
        for index in 0..PRODUCTS.len() {
            product_cards.push(self.render_product_card(index));
        }

        page_frame(Route::Cards, cx)
            .child(
                Section::new("Basic").child(
                    Card::new()
                        .width(340.0)
                        .title("Word of the Day")
                        .subtitle("be-nev-o-lent")
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child("Well meaning and kindly; a benevolent smile."),
                        )
                        .action(Button::new("learn-more", "Learn more").variant(ButtonVariant::Text)),
                ),
            )
            .child(
                Section::new("Variants")
                    .description("Elevated cards carry a shadow, outlined ones only a border.")
                    .child(
                        h_flex()
                            .gap_4()
                            .child(
                                Card::new()
                                    .width(260.0)
                                    .title("Elevated")
                                    .child(body_text("Default styling with a drop shadow.", cx)),
                            )
                            .child(
                                Card::new()
                                    .width(260.0)
                                    .outlined()
                                    .title("Outlined")
                                    .child(body_text("Border only, sits flat on the page.", cx)),
                            ),
                    ),
            )
            .child(
                Section::new("Interactive")
                    .description("A like toggle and an expanding details panel.")
                    .child(recipe_card),
            )
            .child(
                Section::new("Horizontal").child(
                    h_flex()
                        .w(px(420.0))
                        .rounded_lg()
                        .border_1()
                        .border_color(cx.theme().border)
                        .bg(cx.theme().background)
                        .overflow_hidden()
                        .child(
                            div()
                                .w(px(120.0))
                                .flex_none()
                                .bg(gpui::Hsla::from(GalleryColors::info()).opacity(0.2))
                                .flex()
                                .items_center()
                                .justify_center()
                                .child(
                                    Icon::from(CustomIconName::Calendar)
                                        .text_color(GalleryColors::info())
                                        .size_8(),
                                ),
                        )
                        .child(
                            div()
                                .flex_1()
                                .p_4()
                                .flex()
                                .flex_col()
                                .gap_1()
                                .child(
                                    div()
                                        .text_base()
                                        .font_semibold()
                                        .text_color(cx.theme().foreground)
                                        .child("Live From Space"),
                                )
                                .child(body_text("Mac Miller, media on the side.", cx)),
                        ),
                ),
            )
            .child(
                Section::new("Product grid")
                    .description("Cards composed with ratings, chips and buttons.")
                    .child(
                        h_flex().gap_2().items_center().child(
                            Chip::new("grid-note", "3 items")
                                .size(ControlSize::Small)
                                .tone(Tone::Info),
                        ),
                    )
                    .child(h_flex().gap_4().flex_wrap().children(product_cards)),
            )
    }
}

fn body_text(text: &'static str, cx: &Context<CardsPage>) -> impl IntoElement {
    div()
        .text_sm()
        .text_color(cx.theme().muted_foreground)
        .child(text)
}
