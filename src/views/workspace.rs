//! Workspace - Main Shell
//!
//! The workspace holds the title bar, sidebar and content area, and applies
//! the configured base font size to the whole tree.

use crate::states::GalleryStore;
use crate::views::{GalleryContent, GallerySidebar, GalleryTitleBar};
use gpui::{Context, Entity, Window, div, prelude::*, px};
use gpui_component::ActiveTheme;

/// Main workspace containing the application layout
pub struct GalleryWorkspace {
    title_bar: Entity<GalleryTitleBar>,
    sidebar: Entity<GallerySidebar>,
    content: Entity<GalleryContent>,
}

impl GalleryWorkspace {
    /// Create a new workspace
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| GalleryTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| GallerySidebar::new(window, cx));
        let content = cx.new(|cx| GalleryContent::new(window, cx));

        Self {
            title_bar,
            sidebar,
            content,
        }
    }
}

impl Render for GalleryWorkspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let font_size = cx.global::<GalleryStore>().read(cx).font_size();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .when_some(font_size.to_pixels(), |this, size| this.text_size(px(size)))
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(self.content.clone()),
            )
    }
}
