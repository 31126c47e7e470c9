//! Renderer themes.
//!
//! Sessions carry a [`ThemeId`](crate::core::ThemeId) but never read it.
//! A renderer resolves the ID here to get colors and fonts.
//!
//! ```
//! use memory_match::core::ThemeId;
//! use memory_match::theme::ThemeRegistry;
//!
//! let themes = ThemeRegistry::new();
//! assert_eq!(themes.resolve(&ThemeId::dark()).background_color, "black");
//! ```

mod registry;

pub use registry::{FontStyle, ThemeRegistry, ThemeStyle};
