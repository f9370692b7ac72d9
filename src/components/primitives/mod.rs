//! Widget Primitives
//!
//! The controls the gallery showcases. Each is a stateless `RenderOnce`
//! element configured through builder methods; the owning page holds the
//! state and wires the change callbacks.

mod button;
mod calendar;
mod card;
mod checkbox;
mod chip;
mod radio;
mod rating;
mod select;
mod switch;

pub use button::{Button, ButtonVariant};
pub use calendar::{month_grid, step_month, Calendar, WEEKDAY_HEADERS};
pub use card::Card;
pub use checkbox::Checkbox;
pub use chip::{Chip, ChipVariant};
pub use radio::Radio;
pub use rating::Rating;
pub use select::Select;
pub use switch::Switch;

/// Control size shared by the widget set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlSize {
    Small,
    #[default]
    Medium,
    Large,
}
