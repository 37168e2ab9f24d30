// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Identity of a configuration section: the file it came from and the
/// line number of its section header. A repeated section header opens a
/// new identity of its own.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSection {
    pub filename: String,
    pub line: u32,
}

impl ConfigSection {
    pub fn new(filename: String, line: u32) -> Self {
        Self { filename, line }
    }
}

impl std::fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

/// One `Key=Value` configuration statement with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigStatement {
    pub filename: String,
    /// Line number of this statement, starting from 1.
    pub line: u32,
    /// Name of the section this statement belongs to.
    pub section: String,
    /// Line number of the section header this statement belongs to.
    pub section_line: u32,
    pub key: String,
    pub value: String,
}

impl ConfigStatement {
    pub fn section_id(&self) -> ConfigSection {
        ConfigSection::new(self.filename.clone(), self.section_line)
    }

    /// Log a recoverable configuration problem with source context.
    pub fn log_syntax(&self, level: log::Level, msg: &str) {
        log::log!(
            level,
            "{}:{}: [{}] {msg}",
            self.filename,
            self.line,
            self.section
        );
    }
}
