//! One book: status, deletion, and its notes.

use api::{Book, BookUpdate, Note, NoteInput, STATUS_OPTIONS};
use dioxus::prelude::*;
use ui::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, Textarea, ToastOptions,
};
use ui::icons::{FaArrowLeft, FaBookOpen, FaCalendar, FaPen, FaPlus, FaTag, FaTrash};
use ui::library::{load_book_detail, notes_label};
use ui::views::ConfirmDialog;
use ui::{use_app, Icon};

use super::BookCover;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    Book,
    Note(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Detail {
    Loading,
    Missing,
    Loaded(Book),
}

fn status_option_label(status: &str) -> String {
    match status {
        "reading" => "Reading".to_string(),
        "finished" => "Finished".to_string(),
        "want-to-read" => "Want to Read".to_string(),
        other => other.to_string(),
    }
}

/// The known statuses, plus the current one when the backend sent something else.
fn status_choices(current: &str) -> Vec<String> {
    let mut choices: Vec<String> = STATUS_OPTIONS.iter().map(|s| s.to_string()).collect();
    if !STATUS_OPTIONS.contains(&current) {
        choices.push(current.to_string());
    }
    choices
}

fn tags_label(tags: &[String]) -> String {
    tags.join(", ")
}

#[component]
pub fn BookDetail(id: String) -> Element {
    // Re-run the loader when the route param changes
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let app = use_app();
    let nav = use_navigator();
    let toast = use_toast();
    let mut detail = use_signal(|| Detail::Loading);
    let mut notes = use_signal(Vec::<Note>::new);
    let mut pending_delete = use_signal(|| Option::<PendingDelete>::None);
    // (note id, draft content)
    let mut editing = use_signal(|| Option::<(String, String)>::None);

    let load_app = app.clone();
    let _loader = use_resource(move || {
        let app = load_app.clone();
        let id = id_signal();
        async move {
            detail.set(Detail::Loading);
            match load_book_detail(&app.client, &app.store, &id).await {
                Ok((book, book_notes)) => {
                    notes.set(book_notes);
                    detail.set(Detail::Loaded(book));
                }
                Err(e) => {
                    tracing::error!(book = %id, "failed to load book: {e}");
                    detail.set(Detail::Missing);
                }
            }
        }
    });

    let status_app = app.clone();
    let change_status = move |evt: FormEvent| {
        let app = status_app.clone();
        let status = evt.value();
        spawn(async move {
            let credential = app.credential();
            let update = BookUpdate::status(status);
            match app
                .client
                .update_book(credential.as_ref(), &id_signal(), &update)
                .await
            {
                Ok(book) => detail.set(Detail::Loaded(book)),
                Err(e) => {
                    tracing::error!("failed to update status: {e}");
                    toast.error(e.message_or("Failed to update status"), ToastOptions::new());
                }
            }
        });
    };

    let delete_app = app.clone();
    let confirm_delete = move |_: ()| {
        let Some(target) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let app = delete_app.clone();
        spawn(async move {
            let credential = app.credential();
            match target {
                PendingDelete::Book => {
                    match app.client.delete_book(credential.as_ref(), &id_signal()).await {
                        Ok(_) => {
                            toast.success("Book deleted".to_string(), ToastOptions::new());
                            nav.replace(Route::Library {});
                        }
                        Err(e) => {
                            tracing::error!("failed to delete book: {e}");
                            toast.error(e.message_or("Failed to delete book"), ToastOptions::new());
                        }
                    }
                }
                PendingDelete::Note(note_id) => {
                    match app.client.delete_note(credential.as_ref(), &note_id).await {
                        Ok(_) => notes.write().retain(|n| n.id != note_id),
                        Err(e) => {
                            tracing::error!("failed to delete note: {e}");
                            toast.error(e.message_or("Failed to delete note"), ToastOptions::new());
                        }
                    }
                }
            }
        });
    };

    let save_app = app.clone();
    let save_edit = move |_: MouseEvent| {
        let Some((note_id, content)) = editing() else {
            return;
        };
        if content.trim().is_empty() {
            toast.error("Please enter some content".to_string(), ToastOptions::new());
            return;
        }
        let Some(existing) = notes.peek().iter().find(|n| n.id == note_id).cloned() else {
            editing.set(None);
            return;
        };
        let app = save_app.clone();
        spawn(async move {
            let credential = app.credential();
            let input = NoteInput {
                content: content.trim().to_string(),
                ..NoteInput::from(&existing)
            };
            match app
                .client
                .update_note(credential.as_ref(), &note_id, &input)
                .await
            {
                Ok(updated) => {
                    if let Some(slot) = notes.write().iter_mut().find(|n| n.id == note_id) {
                        *slot = updated;
                    }
                    editing.set(None);
                }
                Err(e) => {
                    tracing::error!("failed to update note: {e}");
                    toast.error(e.message_or("Failed to update note"), ToastOptions::new());
                }
            }
        });
    };

    let book = match detail() {
        Detail::Loading => {
            return rsx! {
                div { class: "page-status", "Loading book details..." }
            };
        }
        Detail::Missing => {
            return rsx! {
                div {
                    class: "empty-state",
                    h3 { "Book not found" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(Route::Library {});
                        },
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        "Back to Library"
                    }
                }
            };
        }
        Detail::Loaded(book) => book,
    };
    let current_status = book.status_label().to_string();
    let note_count = notes_label(notes.read().len());

    rsx! {
        div {
            class: "page-stack",

            Button {
                variant: ButtonVariant::Ghost,
                class: "self-start",
                onclick: move |_| {
                    nav.push(Route::Library {});
                },
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Back to Library"
            }

            Card {
                CardContent {
                    div {
                        class: "detail-header",
                        BookCover {
                            url: book.cover().map(str::to_string),
                            title: book.title.clone(),
                            icon_size: 64,
                        }
                        div {
                            class: "detail-info",
                            h1 { class: "page-title", "{book.title}" }
                            p { class: "book-author", "{book.author}" }
                            div {
                                class: "detail-meta",
                                select {
                                    class: "status-select",
                                    value: "{current_status}",
                                    onchange: change_status,
                                    for status in status_choices(&current_status) {
                                        option {
                                            key: "{status}",
                                            value: "{status}",
                                            selected: current_status == status,
                                            "{status_option_label(&status)}"
                                        }
                                    }
                                }
                                span { class: "muted", "{note_count}" }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: move |_| pending_delete.set(Some(PendingDelete::Book)),
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                    "Delete Book"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "page-toolbar",
                h2 { class: "page-title", "Your Notes" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        nav.push(Route::AddNote { id: id_signal() });
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Note"
                }
            }

            if notes.read().is_empty() {
                div {
                    class: "empty-state",
                    Icon { icon: FaBookOpen, width: 48, height: 48 }
                    p { class: "muted", "No notes yet. Start capturing your insights!" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            nav.push(Route::AddNote { id: id_signal() });
                        },
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "Add Your First Note"
                    }
                }
            } else {
                div {
                    class: "note-list",
                    for note in notes() {
                        Card {
                            key: "{note.id}",
                            CardContent {
                                if let Some((editing_id, draft)) = editing().filter(|(eid, _)| *eid == note.id) {
                                    Textarea {
                                        value: draft,
                                        rows: 4,
                                        oninput: move |evt: FormEvent| {
                                            editing.set(Some((editing_id.clone(), evt.value())));
                                        },
                                    }
                                    div {
                                        class: "form-actions",
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            onclick: save_edit.clone(),
                                            "Save"
                                        }
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            onclick: move |_| editing.set(None),
                                            "Cancel"
                                        }
                                    }
                                } else {
                                    p { class: "note-content", "{note.content}" }
                                }

                                if let Some(emotion) = note.emotion_label() {
                                    p { class: "note-emotion", "Feeling: {emotion}" }
                                }

                                div {
                                    class: "note-meta",
                                    if let Some(date) = note.created_on() {
                                        span {
                                            Icon { icon: FaCalendar, width: 12, height: 12 }
                                            " {date}"
                                        }
                                    }
                                    if let Some(page) = note.page_number {
                                        span {
                                            Icon { icon: FaBookOpen, width: 12, height: 12 }
                                            " Page {page}"
                                        }
                                    }
                                    if !note.tags.is_empty() {
                                        span {
                                            Icon { icon: FaTag, width: 12, height: 12 }
                                            " {tags_label(&note.tags)}"
                                        }
                                    }
                                }

                                div {
                                    class: "note-actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Edit note",
                                        onclick: {
                                            let id = note.id.clone();
                                            let content = note.content.clone();
                                            move |_| editing.set(Some((id.clone(), content.clone())))
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete note",
                                        onclick: {
                                            let id = note.id.clone();
                                            move |_| pending_delete.set(Some(PendingDelete::Note(id.clone())))
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(target) = pending_delete() {
                ConfirmDialog {
                    title: match target {
                        PendingDelete::Book => "Delete Book".to_string(),
                        PendingDelete::Note(_) => "Delete Note".to_string(),
                    },
                    message: match target {
                        PendingDelete::Book => "Are you sure you want to delete this book? All notes will be deleted too.".to_string(),
                        PendingDelete::Note(_) => "Are you sure you want to delete this note?".to_string(),
                    },
                    on_confirm: confirm_delete.clone(),
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_cover_every_option() {
        let labels: Vec<_> = STATUS_OPTIONS.iter().map(|s| status_option_label(s)).collect();
        assert_eq!(labels, ["Reading", "Finished", "Want to Read"]);
        assert_eq!(status_option_label("paused"), "paused");
    }

    #[test]
    fn test_unknown_status_gets_its_own_choice() {
        assert_eq!(status_choices("finished").len(), STATUS_OPTIONS.len());
        let choices = status_choices("paused");
        assert_eq!(choices.len(), STATUS_OPTIONS.len() + 1);
        assert_eq!(choices.last().map(String::as_str), Some("paused"));
    }

    #[test]
    fn test_missing_status_selects_reading() {
        let book: Book = serde_json::from_str(r#"{"id": 1, "title": "Dune"}"#).unwrap();
        let current = book.status_label();
        assert_eq!(current, "reading");
        assert!(status_choices(current).iter().any(|s| s == current));
    }

    #[test]
    fn test_tags_are_comma_separated() {
        assert_eq!(tags_label(&["grief".into(), "hope".into()]), "grief, hope");
        assert_eq!(tags_label(&[]), "");
    }
}
