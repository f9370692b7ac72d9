//! Card Component

use gpui::{
    div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};
use gpui_component::{ActiveTheme, Colorize, Icon, StyledExt};

use crate::assets::CustomIconName;
use crate::theme::colors::Tone;

/// A bordered content card with optional header, media block and action row
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    media: Option<(Tone, CustomIconName)>,
    outlined: bool,
    width: Option<f32>,
    children: Vec<AnyElement>,
    actions: Vec<AnyElement>,
}

impl Card {
    /// Create a new empty card
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: None,
            media: None,
            outlined: false,
            width: None,
            children: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Set the header title
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the header subtitle
    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Show a tone-colored media block with a centered icon
    pub fn media(mut self, tone: Tone, icon: CustomIconName) -> Self {
        self.media = Some((tone, icon));
        self
    }

    /// Border-only styling without the drop shadow
    pub fn outlined(mut self) -> Self {
        self.outlined = true;
        self
    }

    /// Fix the card width in pixels
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Add an element to the bottom action row
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let mut card = div()
            .flex()
            .flex_col()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .overflow_hidden()
            .when(!self.outlined, |this| this.shadow_sm())
            .when_some(self.width, |this, width| this.w(px(width)));

        if let Some((tone, icon)) = self.media {
            let fill: gpui::Hsla = tone.color().into();
            card = card.child(
                div()
                    .h(px(120.0))
                    .w_full()
                    .bg(fill.opacity(0.2))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(Icon::from(icon).text_color(fill).size_12()),
            );
        }

        if self.title.is_some() || self.subtitle.is_some() {
            card = card.child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .px_4()
                    .pt_4()
                    .when_some(self.title, |this, title| {
                        this.child(
                            div()
                                .text_base()
                                .font_semibold()
                                .text_color(cx.theme().foreground)
                                .child(title),
                        )
                    })
                    .when_some(self.subtitle, |this, subtitle| {
                        this.child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(subtitle),
                        )
                    }),
            );
        }

        if !self.children.is_empty() {
            card = card.child(div().flex().flex_col().gap_2().p_4().children(self.children));
        }

        if !self.actions.is_empty() {
            card = card.child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .px_4()
                    .pb_3()
                    .children(self.actions),
            );
        }

        card
    }
}
