//! Palette editing session.
//!
//! A session owns an ordered list of color slots plus a bounded history of
//! snapshots. Structural edits (generate, reorder, resize, restore, import)
//! push a snapshot; fine-tuning a single slot and toggling a lock do not.
//! Undo needs at least two snapshots: it restores the second-to-last and
//! drops the last.

use rand::Rng;
use std::collections::VecDeque;
use swatch_engine::{
    fill_slots, summarize, Color, HarmonyMode, Hsl, PaletteSummary, ParseColorError,
};
use thiserror::Error;

use crate::models::{AiPalette, AppConfig, ColorState, HistoryEntry, SessionId};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Color index {index} out of range (palette has {len} colors)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Palette size {size} outside allowed range [{min}, {max}]")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("Color {0} is locked")]
    Locked(usize),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("History entry {index} not found ({len} entries)")]
    HistoryNotFound { index: usize, len: usize },

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("Imported palette is empty")]
    EmptyImport,
}

/// Size and history bounds applied to every session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLimits {
    pub min_size: usize,
    pub max_size: usize,
    pub history_limit: usize,
    pub harmony_headroom: usize,
}

impl From<&AppConfig> for PaletteLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            min_size: config.min_size,
            max_size: config.max_size,
            history_limit: config.history_limit,
            harmony_headroom: config.harmony_headroom,
        }
    }
}

impl Default for PaletteLimits {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct PaletteSession {
    pub id: SessionId,
    pub created_at: chrono::DateTime<chrono::Utc>,
    colors: Vec<ColorState>,
    history: VecDeque<HistoryEntry>,
    palette_name: Option<String>,
    limits: PaletteLimits,
}

impl PaletteSession {
    /// Start a session with `size` random colors.
    pub fn new<R: Rng + ?Sized>(
        id: SessionId,
        size: usize,
        limits: PaletteLimits,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        check_size(size, &limits)?;
        let colors = (0..size)
            .map(|_| ColorState::new(Color::random(rng)))
            .collect();

        let mut session = Self {
            id,
            created_at: chrono::Utc::now(),
            colors,
            history: VecDeque::new(),
            palette_name: None,
            limits,
        };
        session.push_history();
        Ok(session)
    }

    pub fn colors(&self) -> &[ColorState] {
        &self.colors
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn palette_name(&self) -> Option<&str> {
        self.palette_name.as_deref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() >= 2
    }

    pub fn summary(&self) -> PaletteSummary {
        let colors: Vec<Color> = self.colors.iter().map(|c| c.color).collect();
        summarize(&colors)
    }

    /// Regenerate unlocked slots. Returns `false` when every slot is locked
    /// and nothing changed.
    pub fn generate<R: Rng + ?Sized>(&mut self, mode: HarmonyMode, rng: &mut R) -> bool {
        let unlocked: Vec<usize> = self
            .colors
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.locked)
            .map(|(i, _)| i)
            .collect();
        if unlocked.is_empty() {
            return false;
        }

        let anchor = self.colors.iter().find(|c| c.locked).map(|c| c.color);
        let generated = self.colors.len() + self.limits.harmony_headroom;
        let fresh = fill_slots(anchor, mode, unlocked.len(), generated, rng);

        for (index, color) in unlocked.into_iter().zip(fresh) {
            self.colors[index].set_color(color);
        }
        self.push_history();
        true
    }

    /// Flip the lock on one slot, returning the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, SessionError> {
        let slot = self.slot_mut(index)?;
        slot.locked = !slot.locked;
        Ok(slot.locked)
    }

    /// Replace one slot's color.
    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), SessionError> {
        self.slot_mut(index)?.set_color(color);
        Ok(())
    }

    /// Override any of a slot's HSL components, keeping the others.
    pub fn adjust_hsl(
        &mut self,
        index: usize,
        h: Option<f64>,
        s: Option<f64>,
        l: Option<f64>,
    ) -> Result<Color, SessionError> {
        let slot = self.slot_mut(index)?;
        let current = Hsl::from(slot.color);
        let adjusted = Hsl::new(
            h.unwrap_or(current.h),
            s.unwrap_or(current.s),
            l.unwrap_or(current.l),
        );
        let color = Color::from(adjusted);
        slot.set_color(color);
        Ok(color)
    }

    /// Move the slot at `from` so it ends up at `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), SessionError> {
        let len = self.colors.len();
        if from >= len {
            return Err(SessionError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(SessionError::IndexOutOfRange { index: to, len });
        }
        if self.colors[from].locked {
            return Err(SessionError::Locked(from));
        }

        let moved = self.colors.remove(from);
        self.colors.insert(to, moved);
        self.push_history();
        Ok(())
    }

    /// Grow with random colors or truncate from the end.
    pub fn resize<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        check_size(size, &self.limits)?;
        if size == self.colors.len() {
            return Ok(());
        }

        if size < self.colors.len() {
            self.colors.truncate(size);
        } else {
            while self.colors.len() < size {
                self.colors.push(ColorState::new(Color::random(rng)));
            }
        }
        self.push_history();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<(), SessionError> {
        if !self.can_undo() {
            return Err(SessionError::NothingToUndo);
        }
        self.history.pop_back();
        if let Some(previous) = self.history.back() {
            self.colors = previous.colors.clone();
        }
        Ok(())
    }

    /// Bring back snapshot `index` (oldest first) as a new history entry.
    pub fn restore(&mut self, index: usize) -> Result<(), SessionError> {
        let entry = self
            .history
            .get(index)
            .ok_or(SessionError::HistoryNotFound {
                index,
                len: self.history.len(),
            })?;
        self.colors = entry.colors.clone();
        self.push_history();
        Ok(())
    }

    /// Replace the palette with extracted colors, all unlocked.
    pub fn import_colors(&mut self, colors: &[Color]) -> Result<(), SessionError> {
        if colors.is_empty() {
            return Err(SessionError::EmptyImport);
        }
        self.colors = colors.iter().copied().map(ColorState::new).collect();
        self.palette_name = None;
        self.push_history();
        Ok(())
    }

    /// Replace the palette with an AI suggestion.
    ///
    /// Every hex value is validated before anything changes. Supplied names
    /// are kept; blank or missing ones fall back to the category name.
    pub fn import_ai(&mut self, palette: AiPalette) -> Result<(), SessionError> {
        if palette.colors.is_empty() {
            return Err(SessionError::EmptyImport);
        }

        let mut colors = Vec::with_capacity(palette.colors.len());
        for suggestion in palette.colors {
            let mut state = ColorState::new(suggestion.hex.parse()?);
            if let Some(name) = suggestion.name.filter(|n| !n.trim().is_empty()) {
                state.name = name;
            }
            state.description = suggestion.description;
            colors.push(state);
        }

        self.colors = colors;
        self.palette_name = palette.palette_name;
        self.push_history();
        Ok(())
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut ColorState, SessionError> {
        let len = self.colors.len();
        self.colors
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })
    }

    fn push_history(&mut self) {
        self.history.push_back(HistoryEntry::snapshot(&self.colors));
        while self.history.len() > self.limits.history_limit {
            self.history.pop_front();
        }
    }
}

fn check_size(size: usize, limits: &PaletteLimits) -> Result<(), SessionError> {
    if (limits.min_size..=limits.max_size).contains(&size) {
        Ok(())
    } else {
        Err(SessionError::SizeOutOfRange {
            size,
            min: limits.min_size,
            max: limits.max_size,
        })
    }
}
