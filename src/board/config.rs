//! Board configuration.
//!
//! Names the host document ids the components bind to and the limits used
//! by the input form. Loaded from JSON; every field is optional.
//!
//! ```
//! use project_board::board::BoardConfig;
//!
//! let config = BoardConfig::from_json_str(r#"{ "app_container_id": "root" }"#)
//!     .expect("valid config");
//! assert_eq!(config.app_container_id, "root");
//! assert_eq!(config.item_template_id, "single-project");
//! ```

use crate::project::domain::PeopleCount;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading a board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path does not name a file.
    #[error("config path {0} must include a file name")]
    MissingFileName(Utf8PathBuf),

    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The people limits fall outside the range a project accepts.
    #[error(
        "people limits {min}..={max} must lie within {}..={}",
        PeopleCount::MIN,
        PeopleCount::MAX
    )]
    PeopleLimits {
        /// Configured lower limit.
        min: i64,
        /// Configured upper limit.
        max: i64,
    },
}

/// Limits applied to the input form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    /// Title must be strictly longer than this many characters.
    pub title_min_length: usize,
    /// Description must be strictly longer than this many characters.
    pub description_min_length: usize,
    /// Description must be strictly shorter than this many characters.
    pub description_max_length: usize,
    /// Smallest accepted people count.
    pub people_min: i64,
    /// Largest accepted people count.
    pub people_max: i64,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title_min_length: 3,
            description_min_length: 5,
            description_max_length: 150,
            people_min: 1,
            people_max: 5,
        }
    }
}

/// Host document ids and form limits for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Container every top-level component is attached to.
    pub app_container_id: String,
    /// Template holding the input form.
    pub input_template_id: String,
    /// Id assigned to the mounted form element.
    pub form_element_id: String,
    /// Template holding a status column.
    pub list_template_id: String,
    /// Template holding a single project item.
    pub item_template_id: String,
    /// Input form limits.
    pub form: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            app_container_id: "app".to_owned(),
            input_template_id: "project-input".to_owned(),
            form_element_id: "user-input".to_owned(),
            list_template_id: "project-list".to_owned(),
            item_template_id: "single-project".to_owned(),
            form: FormRules::default(),
        }
    }
}

impl FormRules {
    /// Checks that the people limits lie within the project domain range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PeopleLimits`] when `people_min` exceeds
    /// `people_max` or either falls outside `1..=5`.
    pub fn check(&self) -> Result<(), ConfigError> {
        let domain = i64::from(PeopleCount::MIN)..=i64::from(PeopleCount::MAX);
        if self.people_min > self.people_max
            || !domain.contains(&self.people_min)
            || !domain.contains(&self.people_max)
        {
            return Err(ConfigError::PeopleLimits {
                min: self.people_min,
                max: self.people_max,
            });
        }
        Ok(())
    }
}

impl BoardConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid
    /// configuration JSON and [`ConfigError::PeopleLimits`] when the form
    /// limits admit head counts a project rejects.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.form.check()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be opened, read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::MissingFileName(path.to_path_buf()))?;
        let parent = match path.parent() {
            Some(dir) if !dir.as_str().is_empty() => dir,
            _ => Utf8Path::new("."),
        };
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(file_name).map_err(io_error)?;
        Self::from_json_str(&contents)
    }
}
