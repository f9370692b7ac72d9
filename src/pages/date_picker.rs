//! Date Picker Showcase Page

use crate::components::Section;
use crate::components::primitives::{Button, ButtonVariant, Calendar, Select, Switch, step_month};
use crate::states::{Route, TimeValue};
use crate::theme::colors::GalleryColors;
use chrono::{Datelike, Local, NaiveDate};
use gpui::{Action, Context, Corner, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme,
    button::{Button as ToolkitButton, ButtonVariants, DropdownButton},
    h_flex, v_flex,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::page_frame;

/// Night count options for the booking example
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
enum NightsPick {
    One,
    Two,
    Three,
    Seven,
}

impl NightsPick {
    fn label(self) -> &'static str {
        match self {
            NightsPick::One => "1 night",
            NightsPick::Two => "2 nights",
            NightsPick::Three => "3 nights",
            NightsPick::Seven => "7 nights",
        }
    }

    fn all() -> [NightsPick; 4] {
        [NightsPick::One, NightsPick::Two, NightsPick::Three, NightsPick::Seven]
    }
}

/// Hour choice for the time picker
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
struct HourPick {
    hour: u32,
}

/// Minute choice for the time picker
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
struct MinutePick {
    minute: u32,
}

/// Date picker showcase view
pub struct DatePickerPage {
    /// Visible month of the main calendar
    year: i32,
    month: u32,
    /// Selected day of the main calendar
    selected: Option<NaiveDate>,
    /// Time picker value, shared by the combined date and time row
    time: TimeValue,
    /// Render time labels on a 12-hour clock
    twelve_hour: bool,
    /// Booking example state
    booking_year: i32,
    booking_month: u32,
    arrival: Option<NaiveDate>,
    nights: Option<NightsPick>,
    /// Set on confirm; clears once an arrival date is picked
    arrival_missing: bool,
    confirmed: bool,
}

impl DatePickerPage {
    /// Create a new date picker page
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
            selected: None,
            time: TimeValue::new(9, 30),
            twelve_hour: false,
            booking_year: today.year(),
            booking_month: today.month(),
            arrival: None,
            nights: None,
            arrival_missing: false,
            confirmed: false,
        }
    }
}

impl Render for DatePickerPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();
        let today = Local::now().date_naive();

        let selected_text = match self.selected {
            Some(date) => format!("Selected: {}", date.format("%-d %B %Y")),
            None => "No date selected.".to_string(),
        };

        let select_entity = entity.clone();
        let prev_entity = entity.clone();
        let next_entity = entity.clone();
        let clear_entity = entity.clone();

        let calendar = Calendar::new("main-calendar", self.year, self.month)
            .selected(self.selected)
            .today(Some(today))
            .on_select(move |date, _window, cx| {
                select_entity.update(cx, |this, cx| {
                    this.selected = Some(date);
                    cx.notify();
                });
            })
            .on_prev(move |_window, cx| {
                prev_entity.update(cx, |this, cx| {
                    (this.year, this.month) = step_month(this.year, this.month, false);
                    cx.notify();
                });
            })
            .on_next(move |_window, cx| {
                next_entity.update(cx, |this, cx| {
                    (this.year, this.month) = step_month(this.year, this.month, true);
                    cx.notify();
                });
            });

        // Time picker dropdowns
        let time = self.time;
        let hour_dropdown = DropdownButton::new("hour-dropdown")
            .button(ToolkitButton::new("hour-btn").outline().label(format!("{:02}", time.hour)))
            .dropdown_menu_with_anchor(Corner::TopLeft, move |mut menu, _, _| {
                for hour in 0..24 {
                    menu = menu.menu_with_check(
                        format!("{hour:02}"),
                        time.hour == hour,
                        Box::new(HourPick { hour }),
                    );
                }
                menu
            });
        let minute_dropdown = DropdownButton::new("minute-dropdown")
            .button(ToolkitButton::new("minute-btn").outline().label(format!("{:02}", time.minute)))
            .dropdown_menu_with_anchor(Corner::TopLeft, move |mut menu, _, _| {
                for minute in (0..60).step_by(5) {
                    menu = menu.menu_with_check(
                        format!("{minute:02}"),
                        time.minute == minute,
                        Box::new(MinutePick { minute }),
                    );
                }
                menu
            });

        let time_label = if self.twelve_hour { time.label_12h() } else { time.label() };
        let combined_text = match self.selected {
            Some(date) => format!("{} at {}", date.format("%-d %B %Y"), time_label),
            None => "Pick a day above to complete the date and time.".to_string(),
        };
        let clock_entity = entity.clone();

        // Booking example
        let nights = self.nights;
        let nights_label = nights.map(NightsPick::label).unwrap_or("Nights");
        let nights_dropdown = DropdownButton::new("nights-dropdown")
            .button(ToolkitButton::new("nights-btn").outline().label(nights_label))
            .dropdown_menu_with_anchor(Corner::TopLeft, move |mut menu, _, _| {
                for option in NightsPick::all() {
                    menu = menu.menu_with_check(option.label(), nights == Some(option), Box::new(option));
                }
                menu
            });

        let arrival_select = entity.clone();
        let arrival_prev = entity.clone();
        let arrival_next = entity.clone();
        let confirm_entity = entity.clone();

        let booking_calendar = Calendar::new("booking-calendar", self.booking_year, self.booking_month)
            .selected(self.arrival)
            .today(Some(today))
            .on_select(move |date, _window, cx| {
                arrival_select.update(cx, |this, cx| {
                    this.arrival = Some(date);
                    this.arrival_missing = false;
                    cx.notify();
                });
            })
            .on_prev(move |_window, cx| {
                arrival_prev.update(cx, |this, cx| {
                    (this.booking_year, this.booking_month) =
                        step_month(this.booking_year, this.booking_month, false);
                    cx.notify();
                });
            })
            .on_next(move |_window, cx| {
                arrival_next.update(cx, |this, cx| {
                    (this.booking_year, this.booking_month) =
                        step_month(this.booking_year, this.booking_month, true);
                    cx.notify();
                });
            });

        let booking_status = if self.arrival_missing {
            Some((GalleryColors::danger().into(), "An arrival date is required.".to_string()))
        } else if self.confirmed {
            let date = self
                .arrival
                .map(|d| d.format("%-d %B %Y").to_string())
                .unwrap_or_default();
            let nights = self.nights.map(NightsPick::label).unwrap_or("1 night");
            Some((
                GalleryColors::success().into(),
                format!("Booked: arriving {date}, staying {nights}."),
            ))
        } else {
            None::<(gpui::Hsla, String)>
        };

        page_frame(Route::DatePicker, cx)
            .on_action(cx.listener(|this, pick: &NightsPick, _window, cx| {
                this.nights = Some(*pick);
                cx.notify();
            }))
            .on_action(cx.listener(|this, pick: &HourPick, _window, cx| {
                this.time.hour = pick.hour;
                cx.notify();
            }))
            .on_action(cx.listener(|this, pick: &MinutePick, _window, cx| {
                this.time.minute = pick.minute;
                cx.notify();
            }))
            .child(
                Section::new("Calendar")
                    .description("Page between months and pick a day; today is outlined.")
                    .child(
                        v_flex()
                            .gap_3()
                            .items_start()
                            .child(calendar)
                            .child(
                                h_flex()
                                    .gap_3()
                                    .items_center()
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(selected_text),
                                    )
                                    .child(
                                        Button::new("clear-date", "Clear")
                                            .variant(ButtonVariant::Text)
                                            .on_click(move |_event, _window, cx| {
                                                clear_entity.update(cx, |this, cx| {
                                                    this.selected = None;
                                                    cx.notify();
                                                });
                                            }),
                                    ),
                            ),
                    ),
            )
            .child(
                Section::new("Time")
                    .description("Hour and minute pickers; minutes step by five.")
                    .child(
                        h_flex()
                            .gap_2()
                            .items_center()
                            .child(hour_dropdown)
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(":"),
                            )
                            .child(minute_dropdown)
                            .child(
                                div()
                                    .ml_3()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("Selected time: {time_label}")),
                            ),
                    )
                    .child(
                        h_flex()
                            .gap_4()
                            .items_start()
                            .child(
                                div().w(px(160.0)).child(
                                    Select::new("time-readonly")
                                        .label("Read only")
                                        .value(Some(time.label().into())),
                                ),
                            )
                            .child(
                                div().w(px(160.0)).child(
                                    Select::new("time-disabled")
                                        .label("Disabled")
                                        .value(Some("09:00".into()))
                                        .disabled(true),
                                ),
                            ),
                    ),
            )
            .child(
                Section::new("Date and time")
                    .description("The calendar selection and the time combine into one value.")
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().foreground)
                            .child(combined_text),
                    )
                    .child(
                        Switch::new("twelve-hour")
                            .checked(self.twelve_hour)
                            .label("12-hour clock")
                            .on_change(move |checked, _window, cx| {
                                clock_entity.update(cx, |this, cx| {
                                    this.twelve_hour = checked;
                                    cx.notify();
                                });
                            }),
                    ),
            )
            .child(
                Section::new("Booking form")
                    .description("Confirming without an arrival date shows the error.")
                    .child(
                        v_flex()
                            .gap_4()
                            .items_start()
                            .w(px(360.0))
                            .child(booking_calendar)
                            .child(h_flex().gap_3().items_center().child(nights_dropdown))
                            .child(
                                Button::new("confirm-booking", "Confirm booking").on_click(
                                    move |_event, _window, cx| {
                                        confirm_entity.update(cx, |this, cx| {
                                            if this.arrival.is_none() {
                                                this.arrival_missing = true;
                                                this.confirmed = false;
                                            } else {
                                                this.arrival_missing = false;
                                                this.confirmed = true;
                                            }
                                            cx.notify();
                                        });
                                    },
                                ),
                            )
                            .when_some(booking_status, |this, (color, text)| {
                                this.child(div().text_sm().text_color(color).child(text))
                            }),
                    ),
            )
    }
}
