//! Showcase Pages
//!
//! One page per route. Pages own their view-state as plain fields and are
//! rebuilt on navigation, so every visit starts from the defaults below.

mod buttons;
mod cards;
mod checkboxes;
mod chips;
mod date_picker;
mod home;
mod radios;
mod ratings;
mod selects;
mod switches;
mod text_fields;

pub use buttons::ButtonsPage;
pub use cards::CardsPage;
pub use checkboxes::CheckboxesPage;
pub use chips::ChipsPage;
pub use date_picker::DatePickerPage;
pub use home::HomePage;
pub use radios::RadiosPage;
pub use ratings::RatingsPage;
pub use selects::SelectsPage;
pub use switches::SwitchesPage;
pub use text_fields::TextFieldsPage;

use crate::constants::PAGE_MAX_WIDTH;
use crate::states::Route;
use gpui::{App, Div, Stateful, div, prelude::*, px};
use gpui_component::{ActiveTheme, StyledExt, v_flex};

/// Scrollable page frame with the route's heading and intro line
fn page_frame(route: Route, cx: &App) -> Stateful<Div> {
    v_flex()
        .id(route.nav_key())
        .size_full()
        .overflow_y_scroll()
        .p_8()
        .gap_6()
        .max_w(px(PAGE_MAX_WIDTH))
        .child(
            v_flex()
                .gap_2()
                .child(
                    div()
                        .text_2xl()
                        .font_bold()
                        .text_color(cx.theme().foreground)
                        .child(route.title()),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(route.description()),
                ),
        )
}
