// SPDX-License-Identifier: Apache-2.0

mod conf;
mod error;
mod link;
mod qdisc;

pub use self::conf::{
    load_statements, tokenize, ConfigSection, ConfigStatement,
};
pub use self::error::{ErrorKind, NetqosError};
pub use self::link::Link;
pub use self::qdisc::{
    qdisc_apply, Cake, FqPie, Network, Qdisc, QdiscKind, QdiscMessage,
    QdiscOptions, QdiscRegistry, QdiscVTable,
};
