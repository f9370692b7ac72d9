//! Calendar Component

use chrono::{Datelike, NaiveDate};
use gpui::{
    div, prelude::*, px, App, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{ActiveTheme, Colorize, Icon, IconName, StyledExt};

use crate::assets::CustomIconName;
use crate::theme::colors::GalleryColors;

/// Monday-first weekday header row
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Lay a month out as Monday-first weeks
///
/// Each row is one week; leading and trailing cells outside the month are
/// `None`. Returns no rows when year/month do not name a valid month.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let offset = first.weekday().num_days_from_monday() as usize;
    let days_in_month = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    }
    .map(|next| next.signed_duration_since(first).num_days() as u32)
    .unwrap_or(0);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;

    for day in 1..=days_in_month {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    weeks
}

/// Step one month forward or back, rolling the year over
pub fn step_month(year: i32, month: u32, forward: bool) -> (i32, u32) {
    if forward {
        if month == 12 { (year + 1, 1) } else { (year, month + 1) }
    } else if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// A month view with day selection and month paging
#[derive(IntoElement)]
pub struct Calendar {
    id: ElementId,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    today: Option<NaiveDate>,
    on_select: Option<Box<dyn Fn(NaiveDate, &mut Window, &mut App) + 'static>>,
    on_prev: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
    on_next: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Calendar {
    /// Create a calendar showing the given month
    pub fn new(id: impl Into<ElementId>, year: i32, month: u32) -> Self {
        Self {
            id: id.into(),
            year,
            month,
            selected: None,
            today: None,
            on_select: None,
            on_prev: None,
            on_next: None,
        }
    }

    /// Highlight the selected day
    pub fn selected(mut self, selected: Option<NaiveDate>) -> Self {
        self.selected = selected;
        self
    }

    /// Outline today's date
    pub fn today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    /// Handler invoked with the picked date
    pub fn on_select(
        mut self,
        handler: impl Fn(NaiveDate, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Handler for the previous-month button
    pub fn on_prev(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_prev = Some(Box::new(handler));
        self
    }

    /// Handler for the next-month button
    pub fn on_next(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_next = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Calendar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let year = self.year;
        let month = self.month;
        let tone: Hsla = GalleryColors::primary().into();
        let on_tone: Hsla = GalleryColors::text_on_tone().into();

        let title = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default();

        let on_select = self.on_select.map(std::rc::Rc::new);

        let mut header = div()
            .flex()
            .items_center()
            .justify_between()
            .child({
                let mut prev = div()
                    .id("prev-month")
                    .p_1()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(|s| s.bg(cx.theme().secondary))
                    .child(
                        Icon::from(CustomIconName::ChevronLeft)
                            .text_color(cx.theme().foreground)
                            .size_4(),
                    );
                if let Some(handler) = self.on_prev {
                    prev = prev.on_click(move |_event, window, cx| handler(window, cx));
                }
                prev
            });

        header = header
            .child(
                div()
                    .text_sm()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child(title),
            )
            .child({
                let mut next = div()
                    .id("next-month")
                    .p_1()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(|s| s.bg(cx.theme().secondary))
                    .child(
                        Icon::new(IconName::ChevronRight)
                            .text_color(cx.theme().foreground)
                            .size_4(),
                    );
                if let Some(handler) = self.on_next {
                    next = next.on_click(move |_event, window, cx| handler(window, cx));
                }
                next
            });

        let weekday_row = div().flex().children(WEEKDAY_HEADERS.iter().map(|name| {
            div()
                .size(px(34.0))
                .flex()
                .items_center()
                .justify_center()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child(*name)
        }));

        let mut grid = div().flex().flex_col();
        for (week_index, week) in month_grid(year, month).into_iter().enumerate() {
            let mut row = div().flex();
            for (slot, cell) in week.into_iter().enumerate() {
                let cell_el = match cell {
                    None => div().size(px(34.0)).into_any_element(),
                    Some(day) => {
                        let is_selected = self
                            .selected
                            .is_some_and(|s| s.year() == year && s.month() == month && s.day() == day);
                        let is_today = self
                            .today
                            .is_some_and(|t| t.year() == year && t.month() == month && t.day() == day);

                        let mut day_el = div()
                            .id(("day", week_index * 7 + slot))
                            .size(px(34.0))
                            .rounded_full()
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_sm()
                            .cursor_pointer()
                            .map(|this| {
                                if is_selected {
                                    this.bg(tone).text_color(on_tone)
                                } else {
                                    this.text_color(cx.theme().foreground)
                                        .when(is_today, |s| s.border_1().border_color(tone))
                                        .hover(move |s| s.bg(tone.opacity(0.12)))
                                }
                            })
                            .child(day.to_string());

                        if let Some(handler) = on_select.clone() {
                            day_el = day_el.on_click(move |_event, window, cx| {
                                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                                    handler(date, window, cx);
                                }
                            });
                        }

                        day_el.into_any_element()
                    }
                };
                row = row.child(cell_el);
            }
            grid = grid.child(row);
        }

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap_2()
            .p_3()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(header)
            .child(weekday_row)
            .child(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_grid_starts_on_monday() {
        // September 2025 starts on a Monday
        let grid = month_grid(2025, 9);
        assert_eq!(grid[0][0], Some(1));
        assert_eq!(grid[0][6], Some(7));
    }

    #[test]
    fn test_month_grid_leap_february() {
        // February 2024 starts on a Thursday and has 29 days
        let grid = month_grid(2024, 2);
        assert_eq!(grid[0][0], None);
        assert_eq!(grid[0][3], Some(1));

        let days: Vec<u32> = grid.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&29));
        // days come out in order
        assert!(days.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    #[test]
    fn test_month_grid_december_rollover() {
        let days: Vec<u32> = month_grid(2025, 12).iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 31);
    }

    #[test]
    fn test_month_grid_invalid_month() {
        assert!(month_grid(2025, 13).is_empty());
    }

    #[test]
    fn test_step_month_rollover() {
        assert_eq!(step_month(2025, 12, true), (2026, 1));
        assert_eq!(step_month(2025, 1, false), (2024, 12));
        assert_eq!(step_month(2025, 6, true), (2025, 7));
        assert_eq!(step_month(2025, 6, false), (2025, 5));
    }
}
