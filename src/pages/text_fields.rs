//! Text Field Showcase Page

use crate::components::Section;
use crate::states::Route;
use crate::theme::colors::GalleryColors;
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName,
    input::{Input, InputEvent, InputState},
    v_flex,
};

use super::page_frame;

/// Text field showcase view
pub struct TextFieldsPage {
    /// Basic input; the echo line below mirrors its value
    basic_state: Entity<InputState>,
    /// Form row inputs
    name_state: Entity<InputState>,
    email_state: Entity<InputState>,
    /// Always-invalid field for the error styling demo
    required_state: Entity<InputState>,
    /// Search input with prefix icon and clear button
    search_state: Entity<InputState>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl TextFieldsPage {
    /// Create a new text fields page
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let basic_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("Type something..."));
        let name_state = cx.new(|cx| InputState::new(window, cx).placeholder("Jane Doe"));
        let email_state =
            cx.new(|cx| InputState::new(window, cx).placeholder("jane@example.com"));
        let required_state = cx.new(|cx| InputState::new(window, cx).placeholder("Required"));
        let search_state = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder("Search components...")
        });

        let mut subscriptions = Vec::new();

        // Mirror the basic input's value into the echo line
        subscriptions.push(cx.subscribe(&basic_state, |_this, _state, event, cx| {
            if matches!(event, InputEvent::Change | InputEvent::PressEnter { .. }) {
                cx.notify();
            }
        }));

        Self {
            basic_state,
            name_state,
            email_state,
            required_state,
            search_state,
            _subscriptions: subscriptions,
        }
    }

    /// Render a labeled form row
    fn form_row(
        &self,
        label: &'static str,
        helper: &'static str,
        input: Input,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_1()
            .w(px(360.0))
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(label),
            )
            .child(input)
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(helper),
            )
    }
}

impl Render for TextFieldsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let basic_value = self.basic_state.read(cx).value().to_string();
        let echo = if basic_value.is_empty() {
            "Nothing typed yet.".to_string()
        } else {
            format!("You typed: {basic_value}")
        };

        let error_color: gpui::Hsla = GalleryColors::danger().into();

        page_frame(Route::TextFields, cx)
            .child(
                Section::new("Basic")
                    .description("The line below echoes the current value.")
                    .child(
                        v_flex()
                            .gap_2()
                            .w(px(360.0))
                            .child(Input::new(&self.basic_state))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(echo),
                            ),
                    ),
            )
            .child(
                Section::new("Form rows")
                    .child(self.form_row(
                        "Full name",
                        "Shown on your public profile.",
                        Input::new(&self.name_state),
                        cx,
                    ))
                    .child(self.form_row(
                        "Email",
                        "We never share your address.",
                        Input::new(&self.email_state),
                        cx,
                    )),
            )
            .child(
                Section::new("Validation")
                    .description("The error text is tied to the field's error flag.")
                    .child(
                        v_flex()
                            .gap_1()
                            .w(px(360.0))
                            .child(Input::new(&self.required_state))
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(error_color)
                                    .child("This field is required"),
                            ),
                    ),
            )
            .child(
                Section::new("Adornments")
                    .description("Prefix icon and an escape-to-clear button.")
                    .child(
                        div().w(px(360.0)).child(
                            Input::new(&self.search_state)
                                .prefix(
                                    Icon::new(IconName::Search)
                                        .text_color(cx.theme().muted_foreground)
                                        .size_4(),
                                )
                                .cleanable(true),
                        ),
                    ),
            )
            .child(
                Section::new("Read only")
                    .description("Static value rendered without an editor.")
                    .child(
                        div()
                            .w(px(360.0))
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .border_1()
                            .border_color(cx.theme().border)
                            .bg(cx.theme().secondary)
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child("v0.1.0 (fixed value)"),
                    ),
            )
    }
}
