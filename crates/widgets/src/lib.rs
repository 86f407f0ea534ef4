//! Menu widgets.  Only the title bar lives here for now.

pub mod host;
pub mod menubar;
pub mod outline;
pub mod text;

pub use host::{MenuFrame, MenuHost};
pub use menubar::{title_contrast, BoxMode, Contrast, MenuBar};
pub use outline::{Outline, TitleFrame};
pub use text::ApproxMetrics;
