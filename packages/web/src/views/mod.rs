mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod verify_otp;
pub use verify_otp::VerifyOtp;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod reset_password;
pub use reset_password::ResetPassword;

mod guarded_shell;
pub use guarded_shell::GuardedShell;

mod library;
pub use library::Library;

mod search;
pub use search::Search;

mod book_detail;
pub use book_detail::BookDetail;

mod add_note;
pub use add_note::AddNote;

mod profile;
pub use profile::Profile;

mod book_cover;
use book_cover::BookCover;
