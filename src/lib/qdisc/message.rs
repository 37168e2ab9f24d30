// SPDX-License-Identifier: Apache-2.0

use netlink_packet_route::tc::{
    TcAttribute, TcHandle, TcMessage, TcOption,
};
use netlink_packet_route::AddressFamily;
use netlink_packet_utils::nla::{DefaultNla, Nla};

use crate::{ErrorKind, Link, NetqosError};

/// RTM_NEWQDISC request under construction, replacing the root queueing
/// discipline of a link. Holds at most one open kind-specific options
/// container.
#[derive(Debug)]
pub struct QdiscMessage {
    message: TcMessage,
    options: Option<Vec<TcOption>>,
}

impl QdiscMessage {
    pub fn new(link: &Link) -> Self {
        let mut message = TcMessage::default();
        message.header.family = AddressFamily::Unspec;
        message.header.index = link.index as i32;
        message.header.handle = TcHandle::UNSPEC;
        message.header.parent = TcHandle::ROOT;
        Self {
            message,
            options: None,
        }
    }

    /// Start the TCA_OPTIONS container of a queueing discipline, tagging
    /// the message with the kernel kind identifier.
    pub fn open_container(
        &mut self,
        tca_kind: &str,
    ) -> Result<(), NetqosError> {
        if self.options.is_some() {
            return Err(NetqosError::new(
                ErrorKind::NetlinkFailure,
                format!(
                    "Cannot open options container for {tca_kind}: another \
                     container is still open"
                ),
            ));
        }
        self.message
            .attributes
            .push(TcAttribute::Kind(tca_kind.to_string()));
        self.options = Some(Vec::new());
        Ok(())
    }

    pub fn append_u32(
        &mut self,
        attr_type: u16,
        value: u32,
    ) -> Result<(), NetqosError> {
        self.append(DefaultNla::new(attr_type, value.to_ne_bytes().to_vec()))
    }

    pub fn append_u64(
        &mut self,
        attr_type: u16,
        value: u64,
    ) -> Result<(), NetqosError> {
        self.append(DefaultNla::new(attr_type, value.to_ne_bytes().to_vec()))
    }

    /// Append a NULL terminated string attribute.
    pub fn append_string(
        &mut self,
        attr_type: u16,
        value: &str,
    ) -> Result<(), NetqosError> {
        let mut payload = value.as_bytes().to_vec();
        payload.push(0);
        self.append(DefaultNla::new(attr_type, payload))
    }

    fn append(&mut self, nla: DefaultNla) -> Result<(), NetqosError> {
        match self.options.as_mut() {
            Some(options) => {
                options.push(TcOption::Other(nla));
                Ok(())
            }
            None => Err(NetqosError::new(
                ErrorKind::NetlinkFailure,
                format!(
                    "Cannot append attribute type {}: no open options \
                     container",
                    nla.kind()
                ),
            )),
        }
    }

    /// Seal the open container into the message as TCA_OPTIONS.
    pub fn close_container(&mut self) -> Result<(), NetqosError> {
        match self.options.take() {
            Some(options) => {
                self.message
                    .attributes
                    .push(TcAttribute::Options(options));
                Ok(())
            }
            None => Err(NetqosError::new(
                ErrorKind::NetlinkFailure,
                "Cannot close options container: none is open".to_string(),
            )),
        }
    }

    pub fn into_message(self) -> Result<TcMessage, NetqosError> {
        if self.options.is_some() {
            return Err(NetqosError::new(
                ErrorKind::NetlinkFailure,
                "Cannot finish request: options container left open"
                    .to_string(),
            ));
        }
        Ok(self.message)
    }
}
