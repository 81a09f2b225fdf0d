//! Catalog search and "Add to Library".

use api::CatalogBook;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Card, CardContent, Input, ToastOptions};
use ui::icons::{FaBookOpen, FaMagnifyingGlass, FaPlus};
use ui::library::search_catalog;
use ui::submit::add_to_library;
use ui::{use_app, Icon};

use super::BookCover;
use crate::Route;

#[component]
pub fn Search() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let toast = use_toast();
    let mut query = use_signal(String::new);
    // None until the first search
    let mut results = use_signal(|| Option::<Vec<CatalogBook>>::None);
    let mut loading = use_signal(|| false);

    let search_app = app.clone();
    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let app = search_app.clone();
        spawn(async move {
            loading.set(true);
            if let Some(hits) = search_catalog(&app.client, &app.store, &query()).await {
                results.set(Some(hits));
            }
            loading.set(false);
        });
    };

    let add_book = move |hit: CatalogBook| {
        let app = app.clone();
        spawn(async move {
            match add_to_library(&app.client, &app.store, &hit).await {
                Ok(book) => {
                    nav.push(Route::BookDetail { id: book.id });
                }
                Err(e) => {
                    tracing::error!("failed to add book: {e}");
                    toast.error(e.message_or("Failed to add book"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div {
            class: "page-stack",

            div {
                h1 { class: "page-title", "Add Book" }
                p { class: "page-subtitle", "Search for books and add them to your library" }
            }

            form {
                class: "search-form",
                onsubmit: handle_search,
                Input {
                    placeholder: "Search by title or author...",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    if loading() { "Searching..." } else { "Search" }
                }
            }

            if loading() {
                div { class: "page-status", "Searching Google Books..." }
            } else if let Some(hits) = results() {
                if hits.is_empty() {
                    div {
                        class: "empty-state",
                        Icon { icon: FaBookOpen, width: 48, height: 48 }
                        h3 { "No books found" }
                        p { class: "muted", "Try a different search term" }
                    }
                } else {
                    div {
                        class: "note-list",
                        for hit in hits {
                            Card {
                                key: "{hit.id}",
                                CardContent {
                                    div {
                                        class: "search-hit",
                                        BookCover {
                                            url: hit.cover_url.clone().filter(|u| !u.trim().is_empty()),
                                            title: hit.title.clone(),
                                            icon_size: 32,
                                        }
                                        div {
                                            h3 { class: "book-title", "{hit.title}" }
                                            p { class: "book-author", "{hit.author}" }
                                            if let Some(description) = hit.description.clone() {
                                                p { class: "muted", "{description}" }
                                            }
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                onclick: {
                                                    let hit = hit.clone();
                                                    let add_book = add_book.clone();
                                                    move |_| add_book(hit.clone())
                                                },
                                                Icon { icon: FaPlus, width: 14, height: 14 }
                                                "Add to Library"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
