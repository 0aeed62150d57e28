use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use swatch_engine::{name_for, Color};
use utoipa::ToSchema;

/// Session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(format!("{:016x}", rand::thread_rng().gen::<u64>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One palette slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorState {
    /// Canonical `#RRGGBB` value
    #[serde(rename = "hex", with = "hex_color")]
    #[schema(value_type = String, example = "#3A7BD5")]
    pub color: Color,
    /// Display name
    pub name: String,
    /// Locked slots survive regeneration
    pub locked: bool,
    /// Free-form note, set by AI imports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ColorState {
    /// An unlocked slot named after its category.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            name: name_for(color).to_string(),
            locked: false,
            description: None,
        }
    }

    /// Replace the color and recompute the name, keeping the lock.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.name = name_for(color).to_string();
        self.description = None;
    }
}

/// Snapshot of a palette at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoryEntry {
    pub colors: Vec<ColorState>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl HistoryEntry {
    pub fn snapshot(colors: &[ColorState]) -> Self {
        Self {
            colors: colors.to_vec(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Palette suggested by an external AI collaborator
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AiPalette {
    #[serde(default)]
    pub palette_name: Option<String>,
    pub colors: Vec<AiColor>,
}

/// One AI-suggested color; only `hex` is required
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AiColor {
    #[schema(example = "#E07A5F")]
    pub hex: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};
    use swatch_engine::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(color)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_state_serializes_hex() {
        let state = ColorState::new(Color::new(0x3A, 0x7B, 0xD5));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["hex"], "#3A7BD5");
        assert_eq!(json["name"], "Royal Blue");
        assert_eq!(json["locked"], false);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_color_state_deserialize_rejects_bad_hex() {
        let err = serde_json::from_str::<ColorState>(
            r##"{"hex": "#GG0000", "name": "x", "locked": false}"##,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_set_color_keeps_lock() {
        let mut state = ColorState::new(Color::BLACK);
        state.locked = true;
        state.description = Some("ink".to_string());
        state.set_color(Color::WHITE);

        assert!(state.locked);
        assert_eq!(state.name, "Pure White");
        assert_eq!(state.description, None);
    }

    #[test]
    fn test_session_id_generate_is_hex() {
        let id = SessionId::generate();
        assert_eq!(id.as_str().len(), 16);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, SessionId::generate());
    }

    #[test]
    fn test_ai_palette_optional_fields() {
        let palette: AiPalette =
            serde_json::from_str(r##"{"colors": [{"hex": "#112233"}]}"##).unwrap();
        assert!(palette.palette_name.is_none());
        assert_eq!(palette.colors[0].hex, "#112233");
        assert!(palette.colors[0].name.is_none());
    }
}
