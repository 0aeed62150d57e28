pub mod export;
pub mod image_loader;
pub mod palette_session;
pub mod session_store;

pub use export::css_variables;
pub use image_loader::{ImageLoader, ImageSource, LoadError};
pub use palette_session::{PaletteLimits, PaletteSession, SessionError};
pub use session_store::{InMemorySessions, SessionStore};
