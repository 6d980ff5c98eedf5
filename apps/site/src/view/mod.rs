// Page rendering: date labels, show/hide rules, HTML components and the
// full document. Pure functions over an immutable `Cv` snapshot.

pub mod components;
pub mod dates;
pub mod page;
pub mod visibility;

pub use components::RenderContext;
pub use page::render_page;
pub use visibility::Media;
