// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::{
    Cake, ConfigSection, ErrorKind, FqPie, NetqosError, QdiscKind,
    QdiscVTable,
};

/// Kind-specific tunables of a queueing discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum QdiscOptions {
    FqPie(FqPie),
    Cake(Cake),
}

impl QdiscOptions {
    pub fn kind(&self) -> QdiscKind {
        match self {
            Self::FqPie(_) => QdiscKind::FqPie,
            Self::Cake(_) => QdiscKind::Cake,
        }
    }

    pub(crate) fn as_fq_pie(&self) -> Result<&FqPie, NetqosError> {
        match self {
            Self::FqPie(options) => Ok(options),
            _ => Err(mismatch_error(QdiscKind::FqPie, self.kind())),
        }
    }

    pub(crate) fn as_fq_pie_mut(
        &mut self,
    ) -> Result<&mut FqPie, NetqosError> {
        match self {
            Self::FqPie(options) => Ok(options),
            _ => Err(mismatch_error(QdiscKind::FqPie, self.kind())),
        }
    }

    pub(crate) fn as_cake(&self) -> Result<&Cake, NetqosError> {
        match self {
            Self::Cake(options) => Ok(options),
            _ => Err(mismatch_error(QdiscKind::Cake, self.kind())),
        }
    }

    pub(crate) fn as_cake_mut(&mut self) -> Result<&mut Cake, NetqosError> {
        match self {
            Self::Cake(options) => Ok(options),
            _ => Err(mismatch_error(QdiscKind::Cake, self.kind())),
        }
    }
}

fn mismatch_error(expected: QdiscKind, got: QdiscKind) -> NetqosError {
    NetqosError::new(
        ErrorKind::Bug,
        format!(
            "Bug: expecting {expected} queueing discipline options, got \
             {got}"
        ),
    )
}

/// One configured queueing discipline of a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct Qdisc {
    pub kind: QdiscKind,
    /// Configuration section this discipline was built from.
    pub section: ConfigSection,
    #[serde(flatten)]
    pub options: QdiscOptions,
}

impl Qdisc {
    /// Fresh discipline object for a section, with all tunables unset.
    /// Not yet part of any network until the creating statement commits.
    pub(crate) fn new(
        vtable: &QdiscVTable,
        section: ConfigSection,
    ) -> Self {
        Self {
            kind: vtable.kind,
            section,
            options: (vtable.new_options)(),
        }
    }
}
