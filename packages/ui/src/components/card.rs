use dioxus::prelude::*;

/// Bordered surface. Clickable when `onclick` is set.
#[component]
pub fn Card(
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = if onclick.is_some() { "card-clickable" } else { "" };
    rsx! {
        div {
            class: "card {clickable} {class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn CardHeader(title: String, description: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "card-header",
            h2 { class: "card-title", "{title}" }
            if let Some(description) = description {
                p { class: "card-description", "{description}" }
            }
            {children}
        }
    }
}

#[component]
pub fn CardContent(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-content {class}", {children} }
    }
}
