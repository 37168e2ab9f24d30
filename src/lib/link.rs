// SPDX-License-Identifier: Apache-2.0

use futures::stream::TryStreamExt;
use netlink_packet_route::link::LinkAttribute;
use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetqosError};

/// Kernel network link, carrying the pieces the queueing discipline
/// pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct Link {
    pub index: u32,
    pub name: String,
}

impl Link {
    pub fn new(index: u32, name: String) -> Self {
        Self { index, name }
    }

    /// Resolve a link by its interface name through rtnetlink.
    pub async fn from_name(
        handle: &rtnetlink::Handle,
        name: &str,
    ) -> Result<Self, NetqosError> {
        let mut links = handle
            .link()
            .get()
            .match_name(name.to_string())
            .execute();
        let link_msg = links
            .try_next()
            .await
            .map_err(|e| {
                NetqosError::new(
                    ErrorKind::LinkNotFound,
                    format!(
                        "Failed to query rtnetlink link subsystem for \
                         {name}: {e}"
                    ),
                )
            })?
            .ok_or_else(|| {
                NetqosError::new(
                    ErrorKind::LinkNotFound,
                    format!("Link {name} not found"),
                )
            })?;
        let kernel_name = link_msg.attributes.iter().find_map(|attr| {
            if let LinkAttribute::IfName(n) = attr {
                Some(n.to_string())
            } else {
                None
            }
        });
        Ok(Self::new(
            link_msg.header.index,
            kernel_name.unwrap_or_else(|| name.to_string()),
        ))
    }
}
