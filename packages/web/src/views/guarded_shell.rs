//! Layout for every page that needs a signed-in user.

use dioxus::prelude::*;
use ui::views::ShellLayout;
use ui::{NavItem, RouteGuard};

use crate::Route;

fn nav_item_for(route: &Route) -> Option<NavItem> {
    match route {
        Route::Library {} | Route::BookDetail { .. } | Route::AddNote { .. } => {
            Some(NavItem::Library)
        }
        Route::Search {} => Some(NavItem::Search),
        Route::Profile {} => Some(NavItem::Profile),
        _ => None,
    }
}

fn route_for(item: NavItem) -> Route {
    match item {
        NavItem::Library => Route::Library {},
        NavItem::Search => Route::Search {},
        NavItem::Profile => Route::Profile {},
    }
}

#[component]
pub fn GuardedShell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        RouteGuard {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            ShellLayout {
                active: nav_item_for(&route),
                on_navigate: move |item: NavItem| {
                    nav.push(route_for(item));
                },
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_pages_highlight_library() {
        let detail = Route::BookDetail { id: "7".into() };
        assert_eq!(nav_item_for(&detail), Some(NavItem::Library));
        assert_eq!(nav_item_for(&Route::Login {}), None);
    }

    #[test]
    fn test_every_nav_item_routes_back_to_itself() {
        for item in NavItem::ALL {
            assert_eq!(nav_item_for(&route_for(item)), Some(item));
        }
    }
}
