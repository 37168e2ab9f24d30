// SPDX-License-Identifier: Apache-2.0

mod apply;
mod base;
mod cake;
mod fq_pie;
mod kind;
mod message;
mod network;
mod vtable;


pub use self::apply::qdisc_apply;
pub use self::base::{Qdisc, QdiscOptions};
pub use self::cake::Cake;
pub use self::fq_pie::FqPie;
pub use self::kind::QdiscKind;
pub use self::message::QdiscMessage;
pub use self::network::Network;
pub use self::vtable::{QdiscRegistry, QdiscVTable};
