//! Light/dark theme: a context signal, the header toggle, and the DOM side.

use dioxus::prelude::*;
use store::Theme;

use crate::context::use_app;
use crate::icons::{FaMoon, FaSun};
use crate::Icon;

pub type ThemeSignal = Signal<Theme>;

/// Set or clear the `dark` class on the document element.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root
                .class_list()
                .toggle_with_force("dark", theme == Theme::Dark);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(theme = theme.as_str(), "theme changed");
}

/// Provides the [`ThemeSignal`], seeded from the store and mirrored to the DOM.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let app = use_app();
    let theme: ThemeSignal = use_context_provider(|| Signal::new(app.store.theme()));

    use_effect(move || apply_theme(theme()));

    rsx! {
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let app = use_app();

    let onclick = move |_| {
        let next = theme().toggled();
        app.store.set_theme(next);
        theme.set(next);
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: onclick,
            if theme() == Theme::Dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
