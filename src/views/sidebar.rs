//! Sidebar Navigation Component
//!
//! Fixed-width navigation sidebar with one entry per showcase page.

use crate::constants::SIDEBAR_WIDTH;
use crate::states::{GalleryAppState, GalleryStore, Route, i18n_sidebar};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme,
    button::{Button, ButtonVariants},
    label::Label,
    tooltip::Tooltip,
    v_flex,
};

/// Sidebar navigation component
pub struct GallerySidebar {
    /// Current route for highlighting
    current_route: Route,
    /// App state entity for navigation
    app_state: Entity<GalleryAppState>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl GallerySidebar {
    /// Create a new sidebar
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut subscriptions = Vec::new();

        let store = cx.global::<GalleryStore>();
        let app_state = store.app_state();
        let current_route = store.read(cx).route();

        // Subscribe to route changes
        subscriptions.push(cx.observe(&app_state, |this, model, cx| {
            let route = model.read(cx).route();
            if this.current_route != route {
                this.current_route = route;
                cx.notify();
            }
        }));

        Self {
            current_route,
            app_state,
            _subscriptions: subscriptions,
        }
    }

    /// Render one navigation button
    fn render_nav_button(
        &self,
        index: usize,
        route: Route,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let is_active = self.current_route == route;
        let label = i18n_sidebar(cx, route.nav_key());
        let tooltip_label = label.clone();
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;
        let app_state = self.app_state.clone();

        let btn = Button::new(("nav", index))
            .ghost()
            .w_full()
            .h(px(56.0))
            .child(
                v_flex()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .child(route.icon())
                    .child(Label::new(label).text_xs()),
            )
            .on_click(move |_, _, cx| {
                app_state.update(cx, |state, cx| {
                    state.go_to(route, cx);
                });
            });

        div()
            .id(("nav-item", index))
            .tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }
}

impl Render for GallerySidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;

        let mut items = Vec::new();
        for (index, route) in Route::all().iter().enumerate() {
            items.push(self.render_nav_button(index, *route, cx));
        }

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            .child(
                v_flex()
                    .id("sidebar-nav")
                    .flex_1()
                    .pt_2()
                    .overflow_y_scroll()
                    .children(items),
            )
    }
}
