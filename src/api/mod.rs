pub mod colors;
pub mod extract;
pub mod harmony;
pub mod sessions;

pub use colors::{handle_inspect, ColorInfo, HslValue, __path_handle_inspect};
pub use extract::{handle_extract, ExtractResponse, ImageRequest, __path_handle_extract};
pub use harmony::{handle_harmony, HarmonyRequest, HarmonyResponse, __path_handle_harmony};
pub use sessions::*;
