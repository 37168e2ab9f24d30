// SPDX-License-Identifier: Apache-2.0

use netlink_packet_route::tc::{TcAttribute, TcOption};
use netlink_packet_utils::nla::DefaultNla;

use super::super::fq_pie::{self, FQ_PIE_VTABLE};
use crate::{
    Cake, ConfigSection, ConfigStatement, ErrorKind, FqPie, Link, Network,
    Qdisc, QdiscKind, QdiscMessage, QdiscOptions,
};

fn new_network() -> Network {
    Network::new("eth0".to_string(), "eth0.qos".to_string())
}

fn packet_limit_stmt(value: &str) -> ConfigStatement {
    ConfigStatement {
        filename: "eth0.qos".to_string(),
        line: 2,
        section: fq_pie::SECTION.to_string(),
        section_line: 1,
        key: fq_pie::PACKET_LIMIT_KEY.to_string(),
        value: value.to_string(),
    }
}

fn fq_pie_qdisc(packet_limit: Option<u32>) -> Qdisc {
    Qdisc {
        kind: QdiscKind::FqPie,
        section: ConfigSection::new("eth0.qos".to_string(), 1),
        options: QdiscOptions::FqPie(FqPie { packet_limit }),
    }
}

fn fill(qdisc: &Qdisc) -> Result<Vec<TcAttribute>, crate::NetqosError> {
    let link = Link::new(7, "eth0".to_string());
    let mut message = QdiscMessage::new(&link);
    message.open_container(FQ_PIE_VTABLE.tca_kind)?;
    (FQ_PIE_VTABLE.fill_message)(&link, qdisc, &mut message)?;
    message.close_container()?;
    message.into_message().map(|m| m.attributes)
}

#[test]
fn test_fq_pie_parse_packet_limit() {
    let mut network = new_network();
    fq_pie::parse_packet_limit(&mut network, &packet_limit_stmt("1000"))
        .unwrap();

    let qdisc = network.qdiscs.values().next().unwrap();
    assert_eq!(qdisc.kind, QdiscKind::FqPie);
    assert_eq!(
        qdisc.options,
        QdiscOptions::FqPie(FqPie {
            packet_limit: Some(1000)
        })
    );
}

#[test]
fn test_fq_pie_parse_packet_limit_not_a_number() {
    let mut network = new_network();
    let result =
        fq_pie::parse_packet_limit(&mut network, &packet_limit_stmt("bogus"));
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidValue);
    }
    assert!(network.qdiscs.is_empty());
}

#[test]
fn test_fq_pie_parse_packet_limit_too_big() {
    let mut network = new_network();
    let result = fq_pie::parse_packet_limit(
        &mut network,
        &packet_limit_stmt("4294967296"),
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidValue);
    }
}

#[test]
fn test_fq_pie_parse_packet_limit_negative() {
    let mut network = new_network();
    let result =
        fq_pie::parse_packet_limit(&mut network, &packet_limit_stmt("-1"));
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidValue);
    }
}

#[test]
fn test_fq_pie_parse_packet_limit_max() {
    let mut network = new_network();
    fq_pie::parse_packet_limit(
        &mut network,
        &packet_limit_stmt("4294967295"),
    )
    .unwrap();

    let qdisc = network.qdiscs.values().next().unwrap();
    assert_eq!(
        qdisc.options,
        QdiscOptions::FqPie(FqPie {
            packet_limit: Some(u32::MAX)
        })
    );
}

#[test]
fn test_fq_pie_fill_message() {
    let attributes = fill(&fq_pie_qdisc(Some(1000))).unwrap();
    assert_eq!(
        attributes,
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
fn test_fq_pie_fill_message_unset_limit_is_omitted() {
    let attributes = fill(&fq_pie_qdisc(None)).unwrap();
    assert_eq!(
        attributes,
        vec![
            TcAttribute::Kind("fq_pie".to_string()),
            TcAttribute::Options(vec![]),
        ]
    );
}

#[test]
fn test_fq_pie_fill_message_rejects_other_kind_options() {
    let qdisc = Qdisc {
        kind: QdiscKind::FqPie,
        section: ConfigSection::new("eth0.qos".to_string(), 1),
        options: QdiscOptions::Cake(Cake { bandwidth: None }),
    };
    let result = fill(&qdisc);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::Bug);
    }
}
