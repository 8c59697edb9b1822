mod navbar;
mod page;
mod popup;
mod progress_bar;
mod status_bar;

pub use navbar::NavbarWidget;
pub use page::PageWidget;
pub use popup::{centered_rect, PopupWidget};
pub use progress_bar::ProgressBarWidget;
pub use status_bar::StatusBarWidget;
