use dioxus::prelude::*;

use ui::AppContext;
use views::{
    AddNote, BookDetail, ForgotPassword, GuardedShell, Library, Login, Profile, ResetPassword,
    Search, Signup, VerifyOtp,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/verify-otp")]
    VerifyOtp {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password")]
    ResetPassword {},
    #[layout(GuardedShell)]
        #[route("/library")]
        Library {},
        #[route("/search")]
        Search {},
        #[route("/books/:id")]
        BookDetail { id: String },
        #[route("/books/:id/notes/new")]
        AddNote { id: String },
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Built once; every view reaches the backend and the store through it
    use_context_provider(AppContext::from_env);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::ThemeProvider {
            ui::SessionProvider {
                ui::components::ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` to `/library`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Library {});
    rsx! {}
}

/// Unknown paths land in the library
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route");
    nav.replace(Route::Library {});
    rsx! {}
}
