mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod shell_layout;
pub use shell_layout::ShellLayout;
