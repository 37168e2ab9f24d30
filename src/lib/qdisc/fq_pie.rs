// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    ConfigStatement, ErrorKind, Link, NetqosError, Network, Qdisc,
    QdiscKind, QdiscMessage, QdiscOptions, QdiscVTable,
};

pub(crate) const SECTION: &str = "FlowQueuePIE";
pub(crate) const PACKET_LIMIT_KEY: &str = "PacketLimit";

const TCA_FQ_PIE_LIMIT: u16 = 1;

pub(crate) static FQ_PIE_VTABLE: QdiscVTable = QdiscVTable {
    kind: QdiscKind::FqPie,
    tca_kind: "fq_pie",
    new_options,
    fill_message,
};

/// Flow Queue PIE tunables. Unset tunables are left to kernel defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct FqPie {
    /// Hard limit on the real queue size, in packets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_limit: Option<u32>,
}

fn new_options() -> QdiscOptions {
    QdiscOptions::FqPie(FqPie::default())
}

fn fill_message(
    _link: &Link,
    qdisc: &Qdisc,
    message: &mut QdiscMessage,
) -> Result<(), NetqosError> {
    let options = qdisc.options.as_fq_pie()?;
    if let Some(limit) = options.packet_limit {
        message.append_u32(TCA_FQ_PIE_LIMIT, limit)?;
    }
    Ok(())
}

pub(crate) fn parse_packet_limit(
    network: &mut Network,
    stmt: &ConfigStatement,
) -> Result<(), NetqosError> {
    network.update_qdisc(QdiscKind::FqPie, stmt, |options| {
        let options = options.as_fq_pie_mut()?;
        if stmt.value.is_empty() {
            options.packet_limit = None;
            return Ok(());
        }
        match stmt.value.parse::<u32>() {
            Ok(limit) => {
                options.packet_limit = Some(limit);
                Ok(())
            }
            Err(e) => Err(NetqosError::new(
                ErrorKind::InvalidValue,
                format!(
                    "Invalid {PACKET_LIMIT_KEY}= value '{}': {e}",
                    stmt.value
                ),
            )),
        }
    })
}
