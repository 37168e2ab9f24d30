// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::{
    qdisc::cake, qdisc::fq_pie, ConfigSection, ConfigStatement, ErrorKind,
    NetqosError, Qdisc, QdiscKind, QdiscOptions, QdiscRegistry,
};

/// Queueing discipline configuration of one network, keyed by the
/// configuration section each discipline came from. Holds at most one
/// discipline, of one kind, per section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct Network {
    pub name: String,
    pub filename: String,
    #[serde(serialize_with = "qdiscs_in_order")]
    pub qdiscs: BTreeMap<ConfigSection, Qdisc>,
}

fn qdiscs_in_order<S>(
    qdiscs: &BTreeMap<ConfigSection, Qdisc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(qdiscs.values())
}

impl Network {
    pub fn new(name: String, filename: String) -> Self {
        Self {
            name,
            filename,
            qdiscs: BTreeMap::new(),
        }
    }

    /// Load the queueing discipline configuration of a file. Unparsable
    /// statements are logged and skipped, only an unreadable file fails.
    pub fn load(path: &Path) -> Result<Self, NetqosError> {
        let statements = crate::load_statements(path)?;
        let filename = path.to_string_lossy().to_string();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| filename.clone());
        let mut network = Self::new(name, filename);
        for stmt in &statements {
            network.parse_statement(stmt);
        }
        Ok(network)
    }

    /// Route one configuration statement to the parser of its key. Never
    /// fails the load: problems are logged with source context and the
    /// statement is skipped, leaving earlier state untouched.
    pub fn parse_statement(&mut self, stmt: &ConfigStatement) {
        let result = match (stmt.section.as_str(), stmt.key.as_str()) {
            (fq_pie::SECTION, fq_pie::PACKET_LIMIT_KEY) => {
                fq_pie::parse_packet_limit(self, stmt)
            }
            (cake::SECTION, cake::BANDWIDTH_KEY) => {
                cake::parse_bandwidth(self, stmt)
            }
            (fq_pie::SECTION | cake::SECTION, _) => {
                stmt.log_syntax(
                    log::Level::Warn,
                    &format!("Unknown key {}=, ignoring", stmt.key),
                );
                Ok(())
            }
            _ => {
                log::debug!(
                    "{}:{}: section [{}] holds no queueing discipline \
                     configuration, skipping",
                    stmt.filename,
                    stmt.line,
                    stmt.section
                );
                Ok(())
            }
        };
        if let Err(e) = result {
            stmt.log_syntax(
                log::Level::Warn,
                &format!("Ignoring {}= statement: {e}", stmt.key),
            );
        }
    }

    /// Apply one statement to the discipline object of its section,
    /// creating the object when the section has none yet.
    ///
    /// The edit closure must parse and validate before assigning, so a
    /// failed statement leaves a committed object untouched. A newly
    /// created object is only committed once the edit succeeds, a failed
    /// edit drops it and the section keeps its previous state.
    pub fn update_qdisc<F>(
        &mut self,
        kind: QdiscKind,
        stmt: &ConfigStatement,
        edit: F,
    ) -> Result<(), NetqosError>
    where
        F: FnOnce(&mut QdiscOptions) -> Result<(), NetqosError>,
    {
        let vtable = QdiscRegistry::get().lookup(kind)?;
        let section = stmt.section_id();
        if let Some(existing) = self.qdiscs.get_mut(&section) {
            if existing.kind != kind {
                return Err(NetqosError::new(
                    ErrorKind::ConflictingKind,
                    format!(
                        "Section already holds a {} queueing discipline, \
                         cannot accept {kind} configuration",
                        existing.kind
                    ),
                ));
            }
            return edit(&mut existing.options);
        }
        let mut staged = Qdisc::new(vtable, section.clone());
        edit(&mut staged.options)?;
        self.qdiscs.insert(section, staged);
        Ok(())
    }
}
