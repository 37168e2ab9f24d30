// SPDX-License-Identifier: Apache-2.0

use futures::stream::StreamExt;
use netlink_packet_core::{
    NetlinkMessage, NetlinkPayload, NLM_F_ACK, NLM_F_CREATE, NLM_F_REPLACE,
    NLM_F_REQUEST,
};
use netlink_packet_route::tc::TcMessage;
use netlink_packet_route::RouteNetlinkMessage;

use crate::{
    ErrorKind, Link, NetqosError, Network, Qdisc, QdiscMessage,
    QdiscRegistry,
};

/// Install every committed queueing discipline of the network onto the
/// link. One failing discipline does not block the others: the failure
/// is logged, the remaining disciplines are still processed and the
/// first error is returned at the end. On full success, returns the
/// count of installed disciplines.
pub async fn qdisc_apply(
    handle: &rtnetlink::Handle,
    link: &Link,
    network: &Network,
) -> Result<usize, NetqosError> {
    let mut first_error = None;
    let mut applied = 0;
    for qdisc in network.qdiscs.values() {
        match qdisc_install(handle, link, qdisc).await {
            Ok(()) => {
                applied += 1;
                log::debug!(
                    "Installed {} queueing discipline from {} on link {}",
                    qdisc.kind,
                    qdisc.section,
                    link.name
                );
            }
            Err(e) => {
                log::error!(
                    "Failed to install {} queueing discipline from {} on \
                     link {}: {e}",
                    qdisc.kind,
                    qdisc.section,
                    link.name
                );
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(applied),
    }
}

/// Build the RTM_NEWQDISC payload for one discipline: the kind tag, then
/// the kind-specific attributes inside a TCA_OPTIONS container.
pub(crate) fn qdisc_message(
    link: &Link,
    qdisc: &Qdisc,
) -> Result<TcMessage, NetqosError> {
    let vtable = QdiscRegistry::get().lookup(qdisc.kind)?;
    let mut message = QdiscMessage::new(link);
    message.open_container(vtable.tca_kind)?;
    (vtable.fill_message)(link, qdisc, &mut message)?;
    message.close_container()?;
    message.into_message()
}

async fn qdisc_install(
    handle: &rtnetlink::Handle,
    link: &Link,
    qdisc: &Qdisc,
) -> Result<(), NetqosError> {
    let mut request = NetlinkMessage::from(
        RouteNetlinkMessage::NewQueueDiscipline(qdisc_message(link, qdisc)?),
    );
    request.header.flags =
        NLM_F_REQUEST | NLM_F_ACK | NLM_F_CREATE | NLM_F_REPLACE;
    let mut handle = handle.clone();
    let mut responses = handle.request(request).map_err(|e| {
        NetqosError::new(
            ErrorKind::NetlinkFailure,
            format!("Failed to send RTM_NEWQDISC request: {e}"),
        )
    })?;
    while let Some(response) = responses.next().await {
        if let NetlinkPayload::Error(err) = response.payload {
            if let Some(code) = err.code {
                return Err(NetqosError::new(
                    ErrorKind::NetlinkFailure,
                    format!(
                        "Kernel refused {} queueing discipline on link {}: \
                         {}",
                        qdisc.kind,
                        link.name,
                        std::io::Error::from_raw_os_error(-code.get())
                    ),
                ));
            }
        }
    }
    Ok(())
}
