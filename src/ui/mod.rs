//! Terminal UI components: sidebar, transcript, compose box, and overlays.

pub mod compose;
pub mod help;
pub mod layout;
pub mod sidebar;
pub mod transcript;

pub use compose::ComposeBox;
pub use help::HelpMenuWidget;
pub use sidebar::Sidebar;
pub use transcript::Transcript;
