//! Star Rating Component

use gpui::{
    div, prelude::*, App, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{ActiveTheme, Icon};

use crate::assets::CustomIconName;
use crate::components::primitives::ControlSize;
use crate::theme::colors::GalleryColors;

/// A row of selectable stars
///
/// `value` counts filled icons. While the pointer is over the row the page
/// passes the hovered candidate back in via `hover`, so the preview fill is
/// part of page state like everything else.
#[derive(IntoElement)]
pub struct Rating {
    id: ElementId,
    value: u8,
    max: u8,
    hover: Option<u8>,
    filled_icon: CustomIconName,
    empty_icon: CustomIconName,
    fill_color: Hsla,
    readonly: bool,
    disabled: bool,
    size: ControlSize,
    on_change: Option<Box<dyn Fn(u8, &mut Window, &mut App) + 'static>>,
    on_hover: Option<Box<dyn Fn(Option<u8>, &mut Window, &mut App) + 'static>>,
}

impl Rating {
    /// Create a new five-star rating
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: 0,
            max: 5,
            hover: None,
            filled_icon: CustomIconName::StarFilled,
            empty_icon: CustomIconName::Star,
            fill_color: GalleryColors::rating_star().into(),
            readonly: false,
            disabled: false,
            size: ControlSize::Medium,
            on_change: None,
            on_hover: None,
        }
    }

    /// Set the current value
    pub fn value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    /// Set the number of icons
    pub fn max(mut self, max: u8) -> Self {
        self.max = max;
        self
    }

    /// Set the hovered candidate value
    pub fn hover(mut self, hover: Option<u8>) -> Self {
        self.hover = hover;
        self
    }

    /// Replace the star icons, e.g. with hearts
    pub fn icons(mut self, filled: CustomIconName, empty: CustomIconName) -> Self {
        self.filled_icon = filled;
        self.empty_icon = empty;
        self
    }

    /// Set the fill color
    pub fn fill_color(mut self, color: impl Into<Hsla>) -> Self {
        self.fill_color = color.into();
        self
    }

    /// Display only, no interaction
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the control size
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Handler invoked with the picked value
    pub fn on_change(mut self, handler: impl Fn(u8, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Handler invoked with the hovered candidate, `None` on leave
    pub fn on_hover(
        mut self,
        handler: impl Fn(Option<u8>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_hover = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Rating {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let interactive = !self.readonly && !self.disabled;
        let display_value = self.hover.unwrap_or(self.value);
        let fill_color = self.fill_color;
        let empty_color = cx.theme().muted_foreground;

        let on_change = self.on_change.map(std::rc::Rc::new);
        let on_hover = self.on_hover.map(std::rc::Rc::new);

        let icon_size = match self.size {
            ControlSize::Small => gpui::px(16.0),
            ControlSize::Medium => gpui::px(22.0),
            ControlSize::Large => gpui::px(28.0),
        };

        let mut row = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .when(self.disabled, |this| this.opacity(0.5));

        for index in 1..=self.max {
            let filled = index <= display_value;
            let icon = if filled { self.filled_icon } else { self.empty_icon };
            let color = if filled { fill_color } else { empty_color };

            let mut star = div()
                .id(("star", index as usize))
                .child(Icon::from(icon).text_color(color).size(icon_size));

            if interactive {
                star = star.cursor_pointer();

                if let Some(handler) = on_change.clone() {
                    star = star.on_click(move |_event, window, cx| {
                        handler(index, window, cx);
                    });
                }

                if let Some(handler) = on_hover.clone() {
                    star = star.on_hover(move |hovered, window, cx| {
                        handler(hovered.then_some(index), window, cx);
                    });
                }
            }

            row = row.child(star);
        }

        row
    }
}
