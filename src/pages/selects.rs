//! Select Showcase Page

use crate::components::Section;
use crate::components::primitives::{ControlSize, Select};
use crate::states::Route;
use gpui::{Action, Context, Corner, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme,
    button::{Button, ButtonVariants, DropdownButton},
    h_flex, v_flex,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::page_frame;

/// Team size options for the single select
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
enum TeamSizePick {
    Solo,
    Small,
    Large,
}

impl TeamSizePick {
    fn label(self) -> &'static str {
        match self {
            TeamSizePick::Solo => "Just me",
            TeamSizePick::Small => "2-10 people",
            TeamSizePick::Large => "More than 10",
        }
    }

    fn all() -> [TeamSizePick; 3] {
        [TeamSizePick::Solo, TeamSizePick::Small, TeamSizePick::Large]
    }
}

/// Language toggles for the multiple select
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
enum LanguageToggle {
    Rust,
    Python,
    TypeScript,
    Go,
}

impl LanguageToggle {
    fn label(self) -> &'static str {
        match self {
            LanguageToggle::Rust => "Rust",
            LanguageToggle::Python => "Python",
            LanguageToggle::TypeScript => "TypeScript",
            LanguageToggle::Go => "Go",
        }
    }

    fn all() -> [LanguageToggle; 4] {
        [
            LanguageToggle::Rust,
            LanguageToggle::Python,
            LanguageToggle::TypeScript,
            LanguageToggle::Go,
        ]
    }
}

/// Select showcase view
pub struct SelectsPage {
    /// Single-select value
    team_size: Option<TeamSizePick>,
    /// Multi-select values, indexed like `LanguageToggle::all()`
    languages: [bool; 4],
}

impl SelectsPage {
    /// Create a new selects page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            team_size: None,
            languages: [false; 4],
        }
    }

    fn languages_summary(&self) -> Option<String> {
        let picked: Vec<&str> = LanguageToggle::all()
            .iter()
            .enumerate()
            .filter(|(index, _)| self.languages[*index])
            .map(|(_, lang)| lang.label())
            .collect();
        if picked.is_empty() {
            None
        } else {
            Some(picked.join(", "))
        }
    }
}

impl Render for SelectsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let team_size = self.team_size;
        let team_size_label = team_size.map(TeamSizePick::label).unwrap_or("Team size");
        let team_dropdown = DropdownButton::new("team-size-dropdown")
            .button(Button::new("team-size-btn").outline().label(team_size_label))
            .dropdown_menu_with_anchor(Corner::TopLeft, move |mut menu, _, _| {
                for option in TeamSizePick::all() {
                    menu = menu.menu_with_check(
                        option.label(),
                        team_size == Some(option),
                        Box::new(option),
                    );
                }
                menu
            });

        let languages = self.languages;
        let languages_label = self
            .languages_summary()
            .unwrap_or_else(|| "Languages".to_string());
        let languages_dropdown = DropdownButton::new("languages-dropdown")
            .button(Button::new("languages-btn").outline().label(languages_label))
            .dropdown_menu_with_anchor(Corner::TopLeft, move |mut menu, _, _| {
                for (index, option) in LanguageToggle::all().into_iter().enumerate() {
                    menu = menu.menu_with_check(option.label(), languages[index], Box::new(option));
                }
                menu
            });

        let picked_text = match self.team_size {
            Some(option) => format!("Selected: {}", option.label()),
            None => "Nothing selected yet.".to_string(),
        };

        page_frame(Route::Selects, cx)
            .on_action(cx.listener(|this, pick: &TeamSizePick, _window, cx| {
                this.team_size = Some(*pick);
                cx.notify();
            }))
            .on_action(cx.listener(|this, toggle: &LanguageToggle, _window, cx| {
                if let Some(index) = LanguageToggle::all().iter().position(|l| l == toggle) {
                    this.languages[index] = !this.languages[index];
                    cx.notify();
                }
            }))
            .child(
                Section::new("Single select")
                    .description("Picking an option updates the trigger and the line below.")
                    .child(
                        v_flex()
                            .gap_2()
                            .items_start()
                            .child(team_dropdown)
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(picked_text),
                            ),
                    ),
            )
            .child(
                Section::new("Multiple select")
                    .description("Each option toggles independently; the trigger lists the picks.")
                    .child(h_flex().items_start().child(languages_dropdown)),
            )
            .child(
                Section::new("States").child(
                    v_flex()
                        .gap_4()
                        .w(px(360.0))
                        .child(
                            Select::new("state-placeholder")
                                .label("Placeholder")
                                .placeholder("Choose a flavor"),
                        )
                        .child(
                            Select::new("state-disabled")
                                .label("Disabled")
                                .value(Some("Vanilla".into()))
                                .disabled(true),
                        )
                        .child(
                            Select::new("state-error")
                                .label("With error")
                                .placeholder("Choose a flavor")
                                .error(true)
                                .helper_text("A flavor is required"),
                        ),
                ),
            )
            .child(
                Section::new("Sizes").child(
                    v_flex()
                        .gap_4()
                        .w(px(360.0))
                        .child(
                            Select::new("size-small")
                                .size(ControlSize::Small)
                                .value(Some("Small".into())),
                        )
                        .child(Select::new("size-medium").value(Some("Medium".into())))
                        .child(
                            Select::new("size-large")
                                .size(ControlSize::Large)
                                .value(Some("Large".into())),
                        ),
                ),
            )
    }
}
