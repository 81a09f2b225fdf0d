use dioxus::prelude::*;

#[component]
pub fn Textarea(
    id: Option<String>,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: id,
            class: "textarea {class}",
            placeholder: placeholder,
            value: value,
            rows: rows.to_string(),
            required: required,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
