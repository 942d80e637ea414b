pub mod components;
pub mod pages;
mod render;
pub mod state;
pub mod util;

/// A trait for UI components that enforces a standard rendering interface.
pub use render::Component;
/// A trait for UI pages that enforces a standard rendering interface.
pub use render::Page;
/// Data required to draw a single UI frame.
pub use render::RenderContext;
/// Renders a complete frame: status bar, search field, counts, list, and footer.
pub use render::render;
