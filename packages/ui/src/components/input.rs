use dioxus::prelude::*;

#[component]
pub fn Input(
    id: Option<String>,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] autofocus: bool,
    maxlength: Option<u32>,
    inputmode: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            disabled: disabled,
            required: required,
            autofocus: autofocus,
            maxlength: maxlength.map(|m| m.to_string()),
            inputmode: inputmode,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
