//! Main Content Area
//!
//! Routes to the showcase page for the current route. Page entities are
//! rebuilt on navigation, so each visit starts from the page's default
//! state.

use crate::pages::{
    ButtonsPage, CardsPage, CheckboxesPage, ChipsPage, DatePickerPage, HomePage, RadiosPage,
    RatingsPage, SelectsPage, SwitchesPage, TextFieldsPage,
};
use crate::constants::CONTENT_MIN_WIDTH;
use crate::states::{GalleryStore, Route};
use gpui::{AnyView, AppContext, Context, Subscription, Window, div, prelude::*, px};
use gpui_component::ActiveTheme;

/// Main content container component
pub struct GalleryContent {
    /// Route the current page was built for
    page_route: Route,
    /// The current page view
    page: Option<AnyView>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl GalleryContent {
    /// Create a new content view
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<GalleryStore>();
        let page_route = store.read(cx).route();
        let app_state = store.app_state();

        let mut subscriptions = Vec::new();

        // Re-render on route changes; the page itself is swapped in render
        // where the window is available.
        subscriptions.push(cx.observe(&app_state, |_this, _model, cx| {
            cx.notify();
        }));

        Self {
            page_route,
            page: None,
            _subscriptions: subscriptions,
        }
    }

    /// Build the page view for a route
    fn build_page(route: Route, window: &mut Window, cx: &mut Context<Self>) -> AnyView {
        match route {
            Route::Home => cx.new(|cx| HomePage::new(window, cx)).into(),
            Route::Buttons => cx.new(|cx| ButtonsPage::new(window, cx)).into(),
            Route::Checkboxes => cx.new(|cx| CheckboxesPage::new(window, cx)).into(),
            Route::TextFields => cx.new(|cx| TextFieldsPage::new(window, cx)).into(),
            Route::Selects => cx.new(|cx| SelectsPage::new(window, cx)).into(),
            Route::Switches => cx.new(|cx| SwitchesPage::new(window, cx)).into(),
            Route::Ratings => cx.new(|cx| RatingsPage::new(window, cx)).into(),
            Route::Chips => cx.new(|cx| ChipsPage::new(window, cx)).into(),
            Route::DatePicker => cx.new(|cx| DatePickerPage::new(window, cx)).into(),
            Route::Radios => cx.new(|cx| RadiosPage::new(window, cx)).into(),
            Route::Cards => cx.new(|cx| CardsPage::new(window, cx)).into(),
        }
    }
}

impl Render for GalleryContent {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = cx.global::<GalleryStore>().read(cx).route();

        // Dropping the old entity discards its view state
        if self.page.is_none() || self.page_route != route {
            self.page_route = route;
            self.page = Some(Self::build_page(route, window, cx));
        }

        div()
            .id("content")
            .flex_1()
            .h_full()
            .min_w(px(CONTENT_MIN_WIDTH))
            .overflow_hidden()
            .bg(cx.theme().background)
            .children(self.page.clone())
    }
}
