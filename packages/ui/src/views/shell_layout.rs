use dioxus::prelude::*;

use crate::sidebar::{AppSidebar, NavItem};
use crate::theme::ThemeToggle;

/// Frame around every signed-in page: sidebar, header with the theme toggle,
/// and the page itself.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
#[component]
pub fn ShellLayout(
    #[props(!optional)] active: Option<NavItem>,
    on_navigate: EventHandler<NavItem>,
    on_logged_out: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "shell",
            AppSidebar {
                active: active,
                on_navigate: on_navigate,
                on_logged_out: on_logged_out,
            }
            div {
                class: "shell-main",
                header {
                    class: "shell-header",
                    ThemeToggle {}
                }
                main {
                    class: "shell-content",
                    {children}
                }
            }
        }
    }
}
