use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{FaBook, FaBookOpen, FaMagnifyingGlass, FaUser};
use crate::Icon;

/// Entries of the main navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Library,
    Search,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Library, NavItem::Search, NavItem::Profile];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Library => "My Library",
            NavItem::Search => "Add Book",
            NavItem::Profile => "Profile",
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Library => rsx! { Icon { icon: FaBook, width: 16, height: 16 } },
        NavItem::Search => rsx! { Icon { icon: FaMagnifyingGlass, width: 16, height: 16 } },
        NavItem::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
    }
}

/// Persistent navigation column of the signed-in shell.
#[component]
pub fn AppSidebar(
    #[props(!optional)] active: Option<NavItem>,
    on_navigate: EventHandler<NavItem>,
    on_logged_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                Icon { icon: FaBookOpen, width: 20, height: 20 }
                span { "Reading Journal" }
            }

            div {
                class: "sidebar-nav",
                for item in NavItem::ALL {
                    button {
                        key: "{item.label()}",
                        class: if active == Some(item) { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(item),
                        NavIcon { item }
                        span { "{item.label()}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                if let Some(user) = auth().user {
                    span {
                        class: "sidebar-user",
                        title: "{user.email}",
                        "{user.display_name()}"
                    }
                }
                LogoutButton {
                    class: "sidebar-item",
                    on_logged_out: on_logged_out,
                }
            }
        }
    }
}
