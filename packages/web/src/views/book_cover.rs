use dioxus::prelude::*;
use ui::icons::FaBookOpen;
use ui::Icon;

/// Cover image, or a book icon when there is none.
#[component]
pub fn BookCover(
    #[props(!optional)] url: Option<String>,
    title: String,
    #[props(default = 48)] icon_size: u32,
) -> Element {
    rsx! {
        div {
            class: "book-cover",
            if let Some(url) = url {
                img { src: "{url}", alt: "{title}" }
            } else {
                Icon { icon: FaBookOpen, width: icon_size, height: icon_size }
            }
        }
    }
}
