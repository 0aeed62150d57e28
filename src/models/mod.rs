pub mod color_state;
pub mod config;

pub use color_state::{AiColor, AiPalette, ColorState, HistoryEntry, SessionId};
pub use config::AppConfig;
