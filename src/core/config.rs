//! Session configuration.
//!
//! A `SessionConfig` carries everything `GameSession::start` needs:
//! - Board dimensions (`rows` x `columns`, even product)
//! - Countdown length in whole seconds
//! - An opaque theme identifier for the renderer
//!
//! Optional knobs (settle delay, selection cooldown, surface size) have
//! defaults. Configs can be built in code or loaded from TOML:
//!
//! ```
//! use memory_match::core::SessionConfig;
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     rows = 2
//!     columns = 3
//!     time_limit_secs = 30
//!     theme = "light"
//! "#).unwrap();
//!
//! assert_eq!(config.card_count(), 6);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{GameError, InvalidConfig, Result};

/// Delay between revealing the second card and committing the outcome.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000;

/// Theme identifier. The state machine never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    /// Create a theme ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The built-in light theme.
    #[must_use]
    pub fn light() -> Self {
        Self::new("light")
    }

    /// The built-in dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self::new("dark")
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pixel size of the surface the grid is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of rows (at least 1).
    pub rows: u16,

    /// Number of columns (at least 1).
    pub columns: u16,

    /// Countdown length in whole seconds (at least 1).
    pub time_limit_secs: u32,

    /// Visual theme, passed through to the renderer.
    pub theme: ThemeId,

    /// Delay before a revealed pair is committed as matched or flipped back.
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,

    /// Input lockout after each accepted selection. Zero disables it.
    #[serde(default)]
    pub selection_cooldown_ms: u64,

    /// Renderer hint; the state machine ignores it.
    #[serde(default)]
    pub surface: SurfaceSize,
}

fn default_settle_delay() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

impl Default for SessionConfig {
    /// A 4x4 board, 40 seconds, dark theme.
    fn default() -> Self {
        Self::new(4, 4, 40, ThemeId::dark())
    }
}

impl SessionConfig {
    /// Create a config with default settle delay, no cooldown and an
    /// 800x600 surface.
    pub fn new(rows: u16, columns: u16, time_limit_secs: u32, theme: ThemeId) -> Self {
        Self {
            rows,
            columns,
            time_limit_secs,
            theme,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            selection_cooldown_ms: 0,
            surface: SurfaceSize::default(),
        }
    }

    /// Set the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    /// Set the selection cooldown.
    #[must_use]
    pub fn with_selection_cooldown(mut self, cooldown_ms: u64) -> Self {
        self.selection_cooldown_ms = cooldown_ms;
        self
    }

    /// Set the surface size.
    #[must_use]
    pub fn with_surface(mut self, width: u32, height: u32) -> Self {
        self.surface = SurfaceSize { width, height };
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeId) -> Self {
        self.theme = theme;
        self
    }

    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }

    /// Number of distinct pair values.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    /// Pixel size of one grid cell on the configured surface.
    ///
    /// Returns `(0, 0)` for a zero dimension.
    #[must_use]
    pub fn cell_size(&self) -> (u32, u32) {
        if self.rows == 0 || self.columns == 0 {
            return (0, 0);
        }
        (
            self.surface.width / u32::from(self.columns),
            self.surface.height / u32::from(self.rows),
        )
    }

    /// Check that a full pairing exists and the countdown is positive.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(InvalidConfig::ZeroDimension {
                rows: self.rows,
                columns: self.columns,
            }
            .into());
        }

        if self.card_count() % 2 != 0 {
            return Err(InvalidConfig::OddCardCount {
                rows: self.rows,
                columns: self.columns,
            }
            .into());
        }

        if self.time_limit_secs == 0 {
            return Err(InvalidConfig::ZeroTimeLimit.into());
        }

        Ok(())
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SessionConfig = toml::from_str(content).map_err(|e| GameError::ConfigFile {
            message: format!("failed to parse config: {}", e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| GameError::ConfigFile {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        Self::from_toml_str(&content)
    }
}
