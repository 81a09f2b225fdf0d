//! The user's books, filterable by title or author.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, CardContent, Input};
use ui::icons::{FaBookOpen, FaPlus};
use ui::library::{empty_library_hint, filter_books, notes_label};
use ui::{use_app, Icon};

use super::BookCover;
use crate::Route;

#[component]
pub fn Library() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut query = use_signal(String::new);

    let books = use_resource(move || {
        let app = app.clone();
        async move {
            let credential = app.credential();
            match app.client.list_books(credential.as_ref()).await {
                Ok(books) => books,
                Err(e) => {
                    tracing::error!("failed to fetch books: {e}");
                    Vec::new()
                }
            }
        }
    });

    let Some(books) = books() else {
        return rsx! {
            div { class: "page-status", "Loading your library..." }
        };
    };
    let visible = filter_books(&books, &query());

    rsx! {
        div {
            class: "page-stack",

            div {
                class: "page-toolbar",
                h1 { class: "page-title", "My Library" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        nav.push(Route::Search {});
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Book"
                }
            }

            Input {
                placeholder: "Search your books...",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }

            if visible.is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaBookOpen, width: 48, height: 48 }
                    h3 { "No books found" }
                    p { class: "muted", "{empty_library_hint(&query())}" }
                    if query().trim().is_empty() {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                nav.push(Route::Search {});
                            },
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            "Add Your First Book"
                        }
                    }
                }
            } else {
                div {
                    class: "book-grid",
                    for book in visible {
                        Card {
                            key: "{book.id}",
                            onclick: {
                                let id = book.id.clone();
                                move |_| {
                                    nav.push(Route::BookDetail { id: id.clone() });
                                }
                            },
                            CardContent {
                                BookCover {
                                    url: book.cover().map(str::to_string),
                                    title: book.title.clone(),
                                    icon_size: 64,
                                }
                                h3 { class: "book-title", "{book.title}" }
                                p { class: "book-author", "{book.author}" }
                                div {
                                    class: "book-meta",
                                    span { class: "muted", "{notes_label(book.note_count as usize)}" }
                                    span { class: "badge", "{book.status_label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
