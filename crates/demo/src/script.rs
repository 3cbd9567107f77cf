//! Scripted button taps and config files for the demo binary.
//!
//! A script is a JSON object:
//!
//! ```json
//! {
//!   "config": { "retention": "prune", "empty_pop": "error" },
//!   "steps": [
//!     { "action": "push", "page": "second" },
//!     { "action": "open_route", "route": { "item": 4 } },
//!     { "action": "pop" }
//!   ]
//! }
//! ```
//!
//! `config` is optional and falls back to [`ControllerConfig::DEFAULT`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use navigation::ControllerConfig;

use crate::pages::{PageAction, PageKind, Route};

/// Failure to load a script or config file.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected shape.
    #[error("failed to parse {path}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// A sequence of button taps plus the controller configuration to run it with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemoScript {
    /// Controller behaviour.
    #[serde(default)]
    pub config: ControllerConfig,
    /// Taps, applied in order.
    pub steps: Vec<PageAction>,
}

impl DemoScript {
    /// The walkthrough run when no script is given: Home, Second, Third,
    /// back, forward again, pop to root, a stray pop on the empty stack, then
    /// rows 4 and 5 of the standard list and back. Same steps as
    /// `scripts/walkthrough.json`.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            config: ControllerConfig::DEFAULT,
            steps: vec![
                PageAction::Push { page: PageKind::Second },
                PageAction::Push { page: PageKind::Third },
                PageAction::Pop,
                PageAction::Push { page: PageKind::Third },
                PageAction::PopToRoot,
                PageAction::Pop,
                PageAction::OpenRoute { route: Route::for_row(4) },
                PageAction::OpenRoute { route: Route::for_row(5) },
                PageAction::CloseRoute,
            ],
        }
    }

    /// Parse a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the text does not describe a script.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a script file.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Io`] if the file cannot be read and
    /// [`ScriptError::Parse`] if it is not a valid script.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let script: Self = read_json(path)?;
        tracing::debug!(path = %path.display(), steps = script.steps.len(), "script loaded");
        Ok(script)
    }
}

/// Load a standalone [`ControllerConfig`] file.
///
/// # Errors
///
/// Same as [`DemoScript::load`].
pub fn load_config(path: &Path) -> Result<ControllerConfig, ScriptError> {
    read_json(path)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
