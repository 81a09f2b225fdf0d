//! Account details, tag management, and logout.

use api::Tag;
use dioxus::prelude::*;
use ui::components::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, Input, Label, ToastOptions,
};
use ui::icons::{FaPlus, FaTag, FaUser};
use ui::submit::submit_tag;
use ui::{use_app, use_auth, Icon, LogoutButton};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let app = use_app();
    let auth = use_auth();
    let nav = use_navigator();
    let toast = use_toast();
    let mut tags = use_signal(Vec::<Tag>::new);
    let mut new_tag = use_signal(String::new);
    let mut creating = use_signal(|| false);

    let load_app = app.clone();
    let _loader = use_resource(move || {
        let app = load_app.clone();
        async move {
            let credential = app.credential();
            match app.client.list_tags(credential.as_ref()).await {
                Ok(list) => tags.set(list),
                Err(e) => tracing::error!("failed to fetch tags: {e}"),
            }
        }
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            creating.set(true);
            match submit_tag(&app.client, &app.store, &new_tag()).await {
                Ok(tag) => {
                    if !tags.peek().iter().any(|t| t.id == tag.id) {
                        tags.write().push(tag);
                    }
                    new_tag.set(String::new());
                }
                Err(e) => {
                    toast.error(e.message_or("Failed to create tag"), ToastOptions::new());
                }
            }
            creating.set(false);
        });
    };

    let state = auth();
    let (email, name) = match &state.user {
        Some(user) => (user.email.clone(), user.display_name().to_string()),
        None => (String::new(), String::new()),
    };

    rsx! {
        div {
            class: "page-stack narrow",

            h1 { class: "page-title", "Profile" }

            Card {
                CardHeader { title: "Account" }
                CardContent {
                    div {
                        class: "detail-header",
                        Icon { icon: FaUser, width: 32, height: 32 }
                        div {
                            p { class: "book-title", "{name}" }
                            p { class: "muted", "{email}" }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    title: "Tags",
                    description: "Tags you can attach to notes",
                }
                CardContent {
                    if tags.read().is_empty() {
                        p { class: "muted", "No tags yet" }
                    } else {
                        div {
                            class: "tag-list",
                            for tag in tags() {
                                span {
                                    key: "{tag.id}",
                                    class: "tag-chip",
                                    Icon { icon: FaTag, width: 10, height: 10 }
                                    " {tag.name}"
                                }
                            }
                        }
                    }

                    form {
                        class: "search-form",
                        onsubmit: handle_create,
                        Label { html_for: "new-tag", "New tag" }
                        Input {
                            id: "new-tag",
                            placeholder: "New tag",
                            value: new_tag(),
                            maxlength: 50,
                            oninput: move |evt: FormEvent| new_tag.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            r#type: "submit",
                            disabled: creating(),
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            "Add Tag"
                        }
                    }
                }
            }

            LogoutButton {
                class: "self-start",
                on_logged_out: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
