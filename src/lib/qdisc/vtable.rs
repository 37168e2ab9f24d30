// SPDX-License-Identifier: Apache-2.0

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::{
    qdisc::cake::CAKE_VTABLE, qdisc::fq_pie::FQ_PIE_VTABLE, ErrorKind, Link,
    NetqosError, Qdisc, QdiscKind, QdiscMessage, QdiscOptions,
};

static REGISTRY: OnceLock<QdiscRegistry> = OnceLock::new();

/// Per-kind behavior record. One static instance per supported kind,
/// resolved through the registry and never copied or mutated.
#[derive(Debug)]
pub struct QdiscVTable {
    pub kind: QdiscKind,
    /// Kernel wire-format identifier placed into `TCA_KIND`.
    pub tca_kind: &'static str,
    /// Fresh, all-unset tunables for a newly created discipline object.
    pub new_options: fn() -> QdiscOptions,
    /// Emit the kind-specific attributes into an open options container.
    /// Unset tunables are skipped so the kernel applies its defaults.
    pub fill_message:
        fn(&Link, &Qdisc, &mut QdiscMessage) -> Result<(), NetqosError>,
}

/// Lookup table from kind tag to its behavior record. Resolved once at
/// startup, read-only afterwards, safe for concurrent lookup.
#[derive(Debug, Default)]
pub struct QdiscRegistry {
    vtables: BTreeMap<QdiscKind, &'static QdiscVTable>,
}

impl QdiscRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding all built-in queueing discipline kinds.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for vtable in [&FQ_PIE_VTABLE, &CAKE_VTABLE] {
            if let Err(e) = registry.register(vtable) {
                log::error!("Bug: duplicate built-in vtable: {e}");
            }
        }
        registry
    }

    pub fn register(
        &mut self,
        vtable: &'static QdiscVTable,
    ) -> Result<(), NetqosError> {
        match self.vtables.entry(vtable.kind) {
            Entry::Occupied(_) => Err(NetqosError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Queueing discipline kind {} already registered",
                    vtable.kind
                ),
            )),
            Entry::Vacant(entry) => {
                entry.insert(vtable);
                Ok(())
            }
        }
    }

    pub fn lookup(
        &self,
        kind: QdiscKind,
    ) -> Result<&'static QdiscVTable, NetqosError> {
        self.vtables.get(&kind).copied().ok_or_else(|| {
            NetqosError::new(
                ErrorKind::UnknownKind,
                format!("No queueing discipline registered for kind {kind}"),
            )
        })
    }

    /// Publish this registry as the process-wide lookup table. Must
    /// happen before any configuration processing. Fails if a registry
    /// was already installed or resolved.
    pub fn install(self) -> Result<(), NetqosError> {
        REGISTRY.set(self).map_err(|_| {
            NetqosError::new(
                ErrorKind::InvalidArgument,
                "Queueing discipline registry already installed".to_string(),
            )
        })
    }

    /// Process-wide registry: the built-in table unless an extended one
    /// was installed at startup.
    pub fn get() -> &'static QdiscRegistry {
        REGISTRY.get_or_init(Self::builtin)
    }
}
