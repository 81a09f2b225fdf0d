//! Primitive building blocks shared by every view.
//!
//! `Label` and the toast system come straight from `dioxus-primitives`; the
//! rest are thin styled wrappers over native elements.

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, CardContent, CardHeader};

mod input;
pub use input::Input;

mod textarea;
pub use textarea::Textarea;

pub use dioxus_primitives::label::Label;
pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
