// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetqosError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[non_exhaustive]
#[serde(rename_all = "kebab-case")]
/// Queueing discipline kind
pub enum QdiscKind {
    /// Flow Queue PIE packet scheduler.
    /// Deserialize and serialize from/to 'fq-pie'.
    FqPie,
    /// Common Applications Kept Enhanced packet scheduler.
    /// Deserialize and serialize from/to 'cake'.
    Cake,
}

impl QdiscKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FqPie => "fq-pie",
            Self::Cake => "cake",
        }
    }
}

impl std::fmt::Display for QdiscKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QdiscKind {
    type Err = NetqosError;

    fn from_str(s: &str) -> Result<Self, NetqosError> {
        match s {
            "fq-pie" | "fq_pie" => Ok(Self::FqPie),
            "cake" => Ok(Self::Cake),
            _ => Err(NetqosError::new(
                ErrorKind::UnknownKind,
                format!("Unknown queueing discipline kind {s}"),
            )),
        }
    }
}
