//! Tracing configuration.
//!
//! Type construction logs through `tracing`: one `debug` event per finalized
//! type and per rewrite/dedup pass, `trace` events per member. Nothing is
//! printed unless a subscriber is installed, which [`init_tracing`] does when
//! `STRENUM_LOG` or `RUST_LOG` is set.
//!
//! `STRENUM_LOG_FORMAT` selects the output:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! STRENUM_LOG=trace STRENUM_LOG_FORMAT=tree cargo test
//! STRENUM_LOG="strenum_engine=debug" cargo bench
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `STRENUM_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("STRENUM_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `STRENUM_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("STRENUM_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the global tracing subscriber.
///
/// Does nothing when neither `STRENUM_LOG` nor `RUST_LOG` is set, or when a
/// global subscriber is already installed. Output goes to stderr.
pub fn init_tracing() {
    let has_strenum_log = std::env::var("STRENUM_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_strenum_log && !has_rust_log {
        return;
    }

    if !install(build_filter(), LogFormat::from_env()) {
        tracing::debug!("global subscriber already installed");
    }
}

/// Install a subscriber with `filter` and `format`. Returns `false` when a
/// global subscriber was already in place.
fn install(filter: EnvFilter, format: LogFormat) -> bool {
    let installed = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    installed.is_ok()
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
