// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use crate::{ConfigStatement, ErrorKind, NetqosError};

/// Split configuration file content into `Key=Value` statements with
/// source locations. Unparsable lines are logged and skipped, never
/// fatal.
pub fn tokenize(filename: &str, content: &str) -> Vec<ConfigStatement> {
    let mut statements = Vec::new();
    let mut section: Option<(String, u32)> = None;
    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index as u32 + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[') {
            match header.strip_suffix(']') {
                Some(name) if !name.is_empty() => {
                    section = Some((name.to_string(), line_number));
                }
                _ => {
                    log::warn!(
                        "{filename}:{line_number}: invalid section header \
                         '{line}', ignoring section"
                    );
                    section = None;
                }
            }
            continue;
        }
        let (section_name, section_line) = match section.as_ref() {
            Some((name, header_line)) => (name.as_str(), *header_line),
            None => {
                log::warn!(
                    "{filename}:{line_number}: statement '{line}' does not \
                     belong to any section, ignoring"
                );
                continue;
            }
        };
        match line.split_once('=') {
            Some((key, value)) => statements.push(ConfigStatement {
                filename: filename.to_string(),
                line: line_number,
                section: section_name.to_string(),
                section_line,
                key: key.trim_end().to_string(),
                value: value.trim().to_string(),
            }),
            None => log::warn!(
                "{filename}:{line_number}: invalid statement '{line}', \
                 expecting 'Key=Value' format, ignoring"
            ),
        }
    }
    statements
}

/// Read a configuration file and split it into statements. Only an
/// unreadable file is an error.
pub fn load_statements(
    path: &Path,
) -> Result<Vec<ConfigStatement>, NetqosError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        NetqosError::new(
            ErrorKind::InvalidArgument,
            format!("Failed to read config file {}: {e}", path.display()),
        )
    })?;
    Ok(tokenize(&path.to_string_lossy(), &content))
}
