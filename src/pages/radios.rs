//! Radio Button Showcase Page

use crate::components::Section;
use crate::components::primitives::{Button, ControlSize, Radio};
use crate::states::Route;
use crate::theme::colors::{GalleryColors, Tone};
use gpui::{Context, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, StyledExt, h_flex, v_flex};

use super::page_frame;

const GENDERS: [&str; 3] = ["Female", "Male", "Other"];
const SHIPPING: [&str; 3] = ["Standard", "Express", "Overnight"];
const CONTACT_METHODS: [&str; 3] = ["Email", "Phone", "Post"];
const PLANS: [(&str, &str); 3] = [
    ("Basic", "$5 / month"),
    ("Pro", "$12 / month"),
    ("Enterprise", "$49 / month"),
];

/// Radio showcase view
pub struct RadiosPage {
    /// Labeled vertical group
    gender: Option<usize>,
    /// Horizontal direction demo
    shipping: Option<usize>,
    /// Subscription plan picker
    plan: Option<usize>,
    /// Submit-with-validation example
    contact: Option<usize>,
    submitted: bool,
}

impl RadiosPage {
    /// Create a new radios page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            gender: None,
            shipping: Some(0),
            plan: Some(1),
            contact: None,
            submitted: false,
        }
    }

    /// Render a group of radios bound to one of the page's option fields
    fn radio_group(
        &self,
        id: &'static str,
        options: &'static [&'static str],
        selected: Option<usize>,
        pick: impl Fn(&mut Self, usize) + Copy + 'static,
        cx: &mut Context<Self>,
    ) -> Vec<Radio> {
        let entity = cx.entity();
        let mut radios = Vec::new();
        for (index, label) in options.iter().enumerate() {
            let entity = entity.clone();
            radios.push(
                Radio::new((id, index))
                    .selected(selected == Some(index))
                    .label(*label)
                    .on_select(move |_window, cx| {
                        entity.update(cx, |this, cx| {
                            pick(this, index);
                            cx.notify();
                        });
                    }),
            );
        }
        radios
    }

    /// Render one subscription plan card
    fn render_plan_card(&self, index: usize, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let entity = cx.entity();
        let (name, price) = PLANS[index];
        let selected = self.plan == Some(index);
        let tone: gpui::Hsla = GalleryColors::primary().into();

        v_flex()
            .id(("plan-card", index))
            .w(px(180.0))
            .gap_2()
            .p_4()
            .rounded_lg()
            .border_1()
            .cursor_pointer()
            .map(|this| {
                if selected {
                    this.border_color(tone).bg(cx.theme().list_active)
                } else {
                    this.border_color(cx.theme().border)
                }
            })
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .child(
                        div()
                            .text_base()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child(name),
                    )
                    .child(Radio::new(("plan-radio", index)).selected(selected)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(price),
            )
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.plan = Some(index);
                cx.notify();
            }))
    }
}

impl Render for RadiosPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let gender_radios = self.radio_group(
            "gender",
            &GENDERS,
            self.gender,
            |this, index| this.gender = Some(index),
            cx,
        );
        let shipping_radios = self.radio_group(
            "shipping",
            &SHIPPING,
            self.shipping,
            |this, index| this.shipping = Some(index),
            cx,
        );
        let contact_radios = self.radio_group(
            "contact",
            &CONTACT_METHODS,
            self.contact,
            |this, index| {
                this.contact = Some(index);
                this.submitted = false;
            },
            cx,
        );

        let mut tone_radios = Vec::new();
        for (index, tone) in Tone::all().iter().enumerate() {
            tone_radios.push(
                Radio::new(("tone-radio", index))
                    .selected(true)
                    .tone(*tone)
                    .label(tone.label()),
            );
        }

        let mut plan_cards = Vec::new();
        for index in 0..PLANS.len() {
            plan_cards.push(self.render_plan_card(index, cx));
        }

        // Validation message appears only after a submit with nothing picked
        let form_status = if self.submitted {
            match self.contact {
                None => Some((
                    GalleryColors::danger().into(),
                    "Choose a contact method first.".to_string(),
                )),
                Some(index) => Some((
                    GalleryColors::success().into(),
                    format!("Preference saved: {}.", CONTACT_METHODS[index]),
                )),
            }
        } else {
            None::<(gpui::Hsla, String)>
        };

        page_frame(Route::Radios, cx)
            .child(
                Section::new("Group")
                    .description("One selection per group.")
                    .child(
                        v_flex()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_semibold()
                                    .text_color(cx.theme().foreground)
                                    .child("Gender"),
                            )
                            .child(v_flex().gap_2().children(gender_radios)),
                    ),
            )
            .child(
                Section::new("Direction")
                    .description("The same group laid out horizontally.")
                    .child(h_flex().gap_5().items_center().children(shipping_radios)),
            )
            .child(
                Section::new("Colors")
                    .child(h_flex().gap_5().items_center().flex_wrap().children(tone_radios)),
            )
            .child(
                Section::new("Sizes").child(
                    h_flex()
                        .gap_5()
                        .items_center()
                        .child(
                            Radio::new("size-small")
                                .selected(true)
                                .size(ControlSize::Small)
                                .label("Small"),
                        )
                        .child(Radio::new("size-medium").selected(true).label("Medium"))
                        .child(
                            Radio::new("size-large")
                                .selected(true)
                                .size(ControlSize::Large)
                                .label("Large"),
                        ),
                ),
            )
            .child(
                Section::new("Plan picker")
                    .description("Whole cards act as radio options.")
                    .child(h_flex().gap_4().children(plan_cards)),
            )
            .child(
                Section::new("Submit validation")
                    .description("The error shows only when submitting with nothing picked.")
                    .child(
                        v_flex()
                            .gap_3()
                            .items_start()
                            .child(v_flex().gap_2().children(contact_radios))
                            .child(Button::new("submit-contact", "Save preference").on_click(
                                cx.listener(|this, _event, _window, cx| {
                                    this.submitted = true;
                                    cx.notify();
                                }),
                            ))
                            .when_some(form_status, |this, (color, text)| {
                                this.child(div().text_sm().text_color(color).child(text))
                            }),
                    ),
            )
    }
}
