//! New note for a book, with existing tags offered as suggestions.

use api::Book;
use dioxus::prelude::*;
use ui::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Label, Textarea,
    ToastOptions,
};
use ui::forms::NoteForm;
use ui::icons::FaArrowLeft;
use ui::submit::submit_note;
use ui::{use_app, Icon};

use crate::Route;

#[component]
pub fn AddNote(id: String) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let app = use_app();
    let nav = use_navigator();
    let toast = use_toast();
    let mut form = use_signal(NoteForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let book_app = app.clone();
    let book = use_resource(move || {
        let app = book_app.clone();
        let id = id_signal();
        async move {
            let credential = app.credential();
            match app.client.get_book(credential.as_ref(), &id).await {
                Ok(book) => Some(book),
                Err(e) => {
                    tracing::error!(book = %id, "failed to fetch book: {e}");
                    None
                }
            }
        }
    });

    let tags_app = app.clone();
    let suggestions = use_resource(move || {
        let app = tags_app.clone();
        async move {
            let credential = app.credential();
            match app.client.list_tags(credential.as_ref()).await {
                Ok(tags) => tags,
                Err(e) => {
                    tracing::warn!("failed to fetch tags: {e}");
                    Vec::new()
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);
            let book_id = id_signal();
            match submit_note(&app.client, &app.store, &book_id, &form()).await {
                Ok(_) => {
                    toast.success("Note added".to_string(), ToastOptions::new());
                    nav.replace(Route::BookDetail { id: book_id });
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.message_or("Failed to create note")));
                }
            }
        });
    };

    let book: Book = match book() {
        Some(Some(book)) => book,
        Some(None) => {
            return rsx! {
                div {
                    class: "empty-state",
                    h3 { "Book not found" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(Route::Library {});
                        },
                        "Back to Library"
                    }
                }
            };
        }
        None => {
            return rsx! {
                div { class: "page-status", "Loading..." }
            };
        }
    };

    rsx! {
        div {
            class: "page-stack narrow",

            Button {
                variant: ButtonVariant::Ghost,
                class: "self-start",
                onclick: move |_| {
                    nav.push(Route::BookDetail { id: id_signal() });
                },
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Back to Book"
            }

            Card {
                CardHeader {
                    title: "Add Note",
                    description: format!("{} by {}", book.title, book.author),
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-field",
                            Label { html_for: "content", "Note / Quote / Lesson *" }
                            Textarea {
                                id: "content",
                                placeholder: "What stood out to you?",
                                value: form.read().content.clone(),
                                rows: 6,
                                required: true,
                                oninput: move |evt: FormEvent| form.write().content = evt.value(),
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "emotion", "How did you feel?" }
                            Input {
                                id: "emotion",
                                placeholder: "Inspired, moved, curious...",
                                value: form.read().emotion.clone(),
                                oninput: move |evt: FormEvent| form.write().emotion = evt.value(),
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "page", "Page Number (optional)" }
                            Input {
                                id: "page",
                                r#type: "number",
                                placeholder: "42",
                                value: form.read().page_number.clone(),
                                oninput: move |evt: FormEvent| form.write().page_number = evt.value(),
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "tags", "Tags (optional)" }
                            Input {
                                id: "tags",
                                placeholder: "inspiration, life lessons",
                                value: form.read().tags.clone(),
                                oninput: move |evt: FormEvent| form.write().tags = evt.value(),
                            }
                            p { class: "form-hint", "Separate tags with commas" }
                            if let Some(tags) = suggestions() {
                                if !tags.is_empty() {
                                    div {
                                        class: "tag-list",
                                        for tag in tags {
                                            button {
                                                key: "{tag.id}",
                                                r#type: "button",
                                                class: "tag-chip",
                                                onclick: {
                                                    let name = tag.name.clone();
                                                    move |_| form.write().add_tag(&name)
                                                },
                                                "{tag.name}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if let Some(err) = error() {
                            p { class: "form-error", "{err}" }
                        }

                        div {
                            class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Save Note" }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    nav.push(Route::BookDetail { id: id_signal() });
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
