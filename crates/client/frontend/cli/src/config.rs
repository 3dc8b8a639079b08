//! CLI-specific configuration for the terminal frontend.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// CLI terminal configuration.
///
/// This contains settings specific to the terminal interface, separate from
/// the game rules in `GameConfig`.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `QUEST_PACING_MS` - Delay per printed character in ms (default: 50, 0 disables)
    /// - `QUEST_COLOR` - Colored output (default: true)
    /// - `QUEST_CAMPAIGN` - Campaign RON file (default: embedded campaign)
    /// - `QUEST_CONFIG` - Game config TOML file (default: embedded config)
    /// - `QUEST_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `QUEST_SESSION_ID` - Log session name (default: timestamp)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(millis) = lookup("QUEST_PACING_MS").and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.ui.pacing = Duration::from_millis(millis);
        }
        if let Some(color) = lookup("QUEST_COLOR").as_deref().and_then(parse_bool) {
            config.ui.color = color;
        }

        config.content.campaign_path = lookup("QUEST_CAMPAIGN").map(PathBuf::from);
        config.content.config_path = lookup("QUEST_CONFIG").map(PathBuf::from);

        config.logging.dir = lookup("QUEST_LOG_DIR").map(PathBuf::from);
        config.logging.session_id = lookup("QUEST_SESSION_ID");

        config
    }
}

/// Output rendering configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Delay between printed characters of a narration line.
    pub pacing: Duration,
    /// Whether to emit ANSI colors.
    pub color: bool,
}

impl UiConfig {
    pub const DEFAULT_PACING_MS: u64 = 50;

    /// Instant, uncolored output.
    pub fn plain() -> Self {
        Self {
            pacing: Duration::ZERO,
            color: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            pacing: Duration::from_millis(Self::DEFAULT_PACING_MS),
            color: true,
        }
    }
}

/// Optional on-disk overrides for the embedded content.
#[derive(Clone, Debug, Default)]
pub struct ContentConfig {
    pub campaign_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
