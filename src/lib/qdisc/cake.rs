// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    ConfigStatement, ErrorKind, Link, NetqosError, Network, Qdisc,
    QdiscKind, QdiscMessage, QdiscOptions, QdiscVTable,
};

pub(crate) const SECTION: &str = "CAKE";
pub(crate) const BANDWIDTH_KEY: &str = "Bandwidth";

const TCA_CAKE_BASE_RATE64: u16 = 2;

pub(crate) static CAKE_VTABLE: QdiscVTable = QdiscVTable {
    kind: QdiscKind::Cake,
    tca_kind: "cake",
    new_options,
    fill_message,
};

/// Common Applications Kept Enhanced tunables. Unset tunables are left
/// to kernel defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct Cake {
    /// Shaper bandwidth in bytes per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u64>,
}

fn new_options() -> QdiscOptions {
    QdiscOptions::Cake(Cake::default())
}

fn fill_message(
    _link: &Link,
    qdisc: &Qdisc,
    message: &mut QdiscMessage,
) -> Result<(), NetqosError> {
    let options = qdisc.options.as_cake()?;
    if let Some(bandwidth) = options.bandwidth {
        message.append_u64(TCA_CAKE_BASE_RATE64, bandwidth)?;
    }
    Ok(())
}

pub(crate) fn parse_bandwidth(
    network: &mut Network,
    stmt: &ConfigStatement,
) -> Result<(), NetqosError> {
    network.update_qdisc(QdiscKind::Cake, stmt, |options| {
        let options = options.as_cake_mut()?;
        if stmt.value.is_empty() {
            options.bandwidth = None;
            return Ok(());
        }
        options.bandwidth = Some(parse_bits_per_second(&stmt.value)? / 8);
        Ok(())
    })
}

/// Parse a bit rate like `10M` into bits per second. The K, M, G and T
/// suffixes are decimal.
fn parse_bits_per_second(value: &str) -> Result<u64, NetqosError> {
    let (number, multiplier) = if let Some(n) = value.strip_suffix('K') {
        (n, 1_000u64)
    } else if let Some(n) = value.strip_suffix('M') {
        (n, 1_000_000)
    } else if let Some(n) = value.strip_suffix('G') {
        (n, 1_000_000_000)
    } else if let Some(n) = value.strip_suffix('T') {
        (n, 1_000_000_000_000)
    } else {
        (value, 1)
    };
    let bits = number.parse::<u64>().map_err(|e| {
        NetqosError::new(
            ErrorKind::InvalidValue,
            format!("Invalid {BANDWIDTH_KEY}= value '{value}': {e}"),
        )
    })?;
    bits.checked_mul(multiplier).ok_or_else(|| {
        NetqosError::new(
            ErrorKind::InvalidValue,
            format!(
                "Invalid {BANDWIDTH_KEY}= value '{value}': bit rate \
                 overflowed"
            ),
        )
    })
}
