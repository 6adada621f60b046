//! Descriptor model - the `.kq` configuration record and its options
//!
//! A `Config` is assembled once per `pack` invocation, serialized, and
//! discarded. It is consumed by an external loader, never read back by kq.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::KqError;

/// Version literal stamped into generated descriptors.
pub const CONFIG_VERSION: &str = "0.1.0";

/// Fallback application name when the first root has no usable base name.
pub const DEFAULT_NAME: &str = "app";

/// Default window title, shared with the webview backend.
pub const DEFAULT_TITLE: &str = "kq Browser";

/// Asset patterns a loader is permitted to serve from the bundle.
pub const ALLOWED_PATTERNS: [&str; 7] = [
    "*.html", "*.css", "*.js", "*.png", "*.pdf", "*.jpg", "*.svg",
];

/// Window dimensions parsed from a WIDTHxHEIGHT literal.
///
/// Dimensions are not range-checked; zero and negative values pass through
/// to the descriptor and the OS webview unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl FromStr for WindowSize {
    type Err = KqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            return Err(KqError::InvalidSize {
                input: s.to_string(),
            });
        }
        let width = parts[0].parse::<i32>().map_err(|_| KqError::InvalidSize {
            input: s.to_string(),
        })?;
        let height = parts[1].parse::<i32>().map_err(|_| KqError::InvalidSize {
            input: s.to_string(),
        })?;
        Ok(WindowSize { width, height })
    }
}

/// The persisted descriptor written by `pack`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    pub version: String,
    pub source: Vec<String>,
    pub allow: Vec<String>,
    pub entry: String,
    pub options: Options,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub window: WindowOptions,
    pub security: SecurityOptions,
    pub debug: DebugOptions,
    pub env: EnvOptions,
    pub ui: UiOptions,
}

/// Window geometry and chrome. Height precedes width in the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOptions {
    pub height: i32,
    pub width: i32,
    pub frameless: bool,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityOptions {
    pub noscript: bool,
    pub local_only: bool,
    pub allow_origin: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugOptions {
    pub devtools: bool,
    pub console: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvOptions {
    pub single_instance: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    pub theme: String,
    pub title: String,
    /// Serialized as JSON null when unset, never omitted.
    pub icon: Option<String>,
}

impl Config {
    /// Assemble a descriptor from resolved inputs.
    ///
    /// Pure construction, no I/O. The entry must already be a member of
    /// `sources`; the entry resolver runs before this.
    pub fn assemble(
        name: impl Into<String>,
        entry: impl Into<String>,
        sources: Vec<String>,
        size: WindowSize,
    ) -> Self {
        Config {
            name: name.into(),
            version: CONFIG_VERSION.to_string(),
            source: sources,
            allow: ALLOWED_PATTERNS.iter().map(|p| p.to_string()).collect(),
            entry: entry.into(),
            options: Options {
                window: WindowOptions {
                    height: size.height,
                    width: size.width,
                    frameless: false,
                    resizable: true,
                },
                security: SecurityOptions {
                    noscript: false,
                    local_only: false,
                    allow_origin: Vec::new(),
                },
                debug: DebugOptions {
                    devtools: false,
                    console: false,
                },
                env: EnvOptions {
                    single_instance: false,
                },
                ui: UiOptions {
                    theme: "light".to_string(),
                    title: DEFAULT_TITLE.to_string(),
                    icon: None,
                },
            },
        }
    }

    /// Render the descriptor as JSON: 2-space indented, or compact when
    /// minified. Field order follows the struct declarations.
    pub fn to_json(&self, minify: bool) -> Result<String, KqError> {
        let rendered = if minify {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config::assemble(
            "site",
            "/bundle/site/index.html",
            vec![
                "/bundle/site/index.html".to_string(),
                "/bundle/site/style.css".to_string(),
            ],
            WindowSize {
                width: 800,
                height: 600,
            },
        )
    }

    #[test]
    fn test_parse_size() {
        let size: WindowSize = "800x600".parse().unwrap();
        assert_eq!(
            size,
            WindowSize {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn test_parse_size_round_trip() {
        for (w, h) in [(1, 1), (900, 600), (1920, 1080)] {
            let size: WindowSize = format!("{}x{}", w, h).parse().unwrap();
            assert_eq!(size.width, w);
            assert_eq!(size.height, h);
        }
    }

    #[test]
    fn test_parse_size_accepts_non_positive() {
        // Documented limitation: no range validation.
        let size: WindowSize = "0x-200".parse().unwrap();
        assert_eq!(size.width, 0);
        assert_eq!(size.height, -200);
    }

    #[test]
    fn test_parse_size_malformed() {
        for input in ["800", "800x600x200", "ax600", "800xb", "x", "", "800X600"] {
            let err = input.parse::<WindowSize>().unwrap_err();
            assert!(
                matches!(err, KqError::InvalidSize { .. }),
                "expected InvalidSize for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_assemble_defaults() {
        let config = sample_config();
        assert_eq!(config.name, "site");
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.allow.len(), 7);
        assert_eq!(config.entry, "/bundle/site/index.html");

        let opts = &config.options;
        assert!(!opts.window.frameless);
        assert!(opts.window.resizable);
        assert_eq!(opts.window.width, 800);
        assert_eq!(opts.window.height, 600);
        assert!(!opts.security.noscript);
        assert!(!opts.security.local_only);
        assert!(opts.security.allow_origin.is_empty());
        assert!(!opts.debug.devtools);
        assert!(!opts.debug.console);
        assert!(!opts.env.single_instance);
        assert_eq!(opts.ui.theme, "light");
        assert_eq!(opts.ui.title, DEFAULT_TITLE);
        assert_eq!(opts.ui.icon, None);
    }

    #[test]
    fn test_json_round_trip_pretty_and_minified() {
        let config = sample_config();

        let pretty = config.to_json(false).unwrap();
        let compact = config.to_json(true).unwrap();
        assert_ne!(pretty, compact);

        let from_pretty: Config = serde_json::from_str(&pretty).unwrap();
        let from_compact: Config = serde_json::from_str(&compact).unwrap();
        assert_eq!(from_pretty, config);
        assert_eq!(from_compact, config);
    }

    #[test]
    fn test_json_wire_keys() {
        let json = sample_config().to_json(true).unwrap();
        assert!(json.contains("\"localOnly\":false"));
        assert!(json.contains("\"allowOrigin\":[]"));
        assert!(json.contains("\"singleInstance\":false"));
        assert!(json.contains("\"noscript\":false"));
        assert!(json.contains("\"icon\":null"));
    }

    #[test]
    fn test_json_field_order_is_stable() {
        let pretty = sample_config().to_json(false).unwrap();
        let order = ["\"name\"", "\"version\"", "\"source\"", "\"allow\"", "\"entry\"", "\"options\""];
        let positions: Vec<usize> = order.iter().map(|k| pretty.find(k).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        // Height precedes width inside the window record.
        assert!(pretty.find("\"height\"").unwrap() < pretty.find("\"width\"").unwrap());
    }
}
