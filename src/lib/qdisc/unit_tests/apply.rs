// SPDX-License-Identifier: Apache-2.0

use netlink_packet_route::tc::{TcAttribute, TcHandle, TcOption};
use netlink_packet_utils::nla::DefaultNla;

use super::super::apply::qdisc_message;
use super::super::{cake, fq_pie};
use crate::{ConfigStatement, Link, Network};

fn new_network() -> Network {
    Network::new("eth0".to_string(), "eth0.qos".to_string())
}

fn new_link() -> Link {
    Link::new(3, "eth0".to_string())
}

fn fq_pie_stmt(value: &str) -> ConfigStatement {
    ConfigStatement {
        filename: "eth0.qos".to_string(),
        line: 2,
        section: fq_pie::SECTION.to_string(),
        section_line: 1,
        key: fq_pie::PACKET_LIMIT_KEY.to_string(),
        value: value.to_string(),
    }
}

fn cake_stmt(value: &str) -> ConfigStatement {
    ConfigStatement {
        filename: "eth0.qos".to_string(),
        line: 2,
        section: cake::SECTION.to_string(),
        section_line: 1,
        key: cake::BANDWIDTH_KEY.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_apply_message_fq_pie() {
    let mut network = new_network();
    network.parse_statement(&fq_pie_stmt("1000"));

    let qdisc = network.qdiscs.values().next().unwrap();
    let tc_message = qdisc_message(&new_link(), qdisc).unwrap();
    assert_eq!(tc_message.header.index, 3);
    assert_eq!(tc_message.header.parent, TcHandle::ROOT);
    assert_eq!(
        tc_message.attributes,
        vec![
            TcAttribute::Kind("fq_pie".to_string()),
            TcAttribute::Options(vec![TcOption::Other(DefaultNla::new(
                1,
                1000u32.to_ne_bytes().to_vec()
            ))]),
        ]
    );
}

#[test]
fn test_apply_message_reset_limit_is_omitted() {
    let mut network = new_network();
    for value in ["1000", "bogus", ""] {
        network.parse_statement(&fq_pie_stmt(value));
    }

    let qdisc = network.qdiscs.values().next().unwrap();
    let tc_message = qdisc_message(&new_link(), qdisc).unwrap();
    assert_eq!(
        tc_message.attributes,
        vec![
            TcAttribute::Kind("fq_pie".to_string()),
            TcAttribute::Options(vec![]),
        ]
    );
}

#[test]
fn test_apply_message_cake() {
    let mut network = new_network();
    network.parse_statement(&cake_stmt("10M"));

    let qdisc = network.qdiscs.values().next().unwrap();
    let tc_message = qdisc_message(&new_link(), qdisc).unwrap();
    assert_eq!(
        tc_message.attributes,
        vec![
            TcAttribute::Kind("cake".to_string()),
            TcAttribute::Options(vec![TcOption::Other(DefaultNla::new(
                2,
                1_250_000u64.to_ne_bytes().to_vec()
            ))]),
        ]
    );
}
