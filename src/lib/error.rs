// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Please report this as bug to upstream
    Bug,
    /// Configuration section already holds a queueing discipline of a
    /// different kind
    ConflictingKind,
    /// Invalid argument
    InvalidArgument,
    /// Configuration value cannot be parsed into the semantic type of
    /// its key
    InvalidValue,
    /// Network link not found
    LinkNotFound,
    /// Netlink request could not be built or was refused by the kernel
    NetlinkFailure,
    /// No queueing discipline registered for the requested kind
    UnknownKind,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::ConflictingKind => "conflicting-kind",
            Self::InvalidArgument => "invalid-argument",
            Self::InvalidValue => "invalid-value",
            Self::LinkNotFound => "link-not-found",
            Self::NetlinkFailure => "netlink-failure",
            Self::UnknownKind => "unknown-kind",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Try not implement From for NetqosError here unless you are sure this
// error should always convert to certain type of ErrorKind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NetqosError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl std::fmt::Display for NetqosError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl NetqosError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::error::Error for NetqosError {}
