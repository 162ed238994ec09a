//! Navigation sidebar.
//!
//! Renders one button per [`Page`] in sidebar order. Expanded it shows icon
//! plus label and the "Analytics & Reporting" heading; collapsed it shows
//! icons only, with the label as a hover title and a divider in place of the
//! heading. Settings always sits below a divider.

use crate::view::{Page, Section};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    pub active: Page,
    pub open: bool,
    pub on_navigate: EventHandler<Page>,
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let width = if props.open { 256 } else { 64 };
    let open = props.open;
    let active = props.active;
    let on_navigate = props.on_navigate;
    let justify = if open { "flex-start" } else { "center" };
    let analytics_title = Section::Analytics.title();

    rsx! {
        nav {
            style: "width: {width}px; background: #fff; border-right: 1px solid #e5e7eb; display: flex; flex-direction: column; transition: width 0.3s; flex-shrink: 0;",
            div {
                style: "padding: 16px; border-bottom: 1px solid #e5e7eb; display: flex; align-items: center; gap: 8px; justify-content: {justify};",
                span { style: "font-size: 20px;", "👤" }
                if open {
                    span { style: "font-weight: 600; white-space: nowrap;", "Admin" }
                }
            }
            div {
                style: "flex: 1; overflow-y: auto; padding: 8px 0;",
                for page in Page::ALL {
                    if page == Page::PatternAnalyzer {
                        if open {
                            div {
                                style: "padding: 8px 16px; margin-top: 16px; font-size: 14px; font-weight: 500; color: #6b7280;",
                                "{analytics_title}"
                            }
                        } else {
                            div { style: "border-top: 1px solid #e5e7eb; margin: 8px 0;" }
                        }
                    }
                    if page == Page::Settings {
                        div { style: "border-top: 1px solid #e5e7eb; margin: 8px 0;" }
                    }
                    MenuItem {
                        page,
                        selected: page == active,
                        open,
                        on_navigate,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MenuItemProps {
    page: Page,
    selected: bool,
    open: bool,
    on_navigate: EventHandler<Page>,
}

#[component]
fn MenuItem(props: MenuItemProps) -> Element {
    let page = props.page;
    let (bg, fg, border) = if props.selected {
        ("#eff6ff", "#2563eb", "4px solid #2563eb")
    } else {
        ("transparent", "#374151", "4px solid transparent")
    };
    let title = if props.open { "" } else { page.label() };

    rsx! {
        button {
            style: "width: 100%; display: flex; align-items: center; gap: 12px; padding: 12px 16px; background: {bg}; color: {fg}; border: none; border-right: {border}; cursor: pointer; text-align: left;",
            title: "{title}",
            onclick: move |_| props.on_navigate.call(page),
            span { style: "width: 20px; text-align: center; flex-shrink: 0;", "{page.icon()}" }
            if props.open {
                span { style: "font-size: 14px; white-space: nowrap;", "{page.label()}" }
            }
        }
    }
}
