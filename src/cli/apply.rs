// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use netqos::{qdisc_apply, Link, Network};

use crate::CliError;

pub(crate) struct ApplyCommand;

impl ApplyCommand {
    pub(crate) const NAME: &str = "apply";

    pub(crate) fn gen_command() -> clap::Command {
        clap::Command::new("apply")
            .alias("a")
            .about("Apply queueing discipline configuration to a link")
            .arg(
                clap::Arg::new("CONFIG_FILE")
                    .required(true)
                    .index(1)
                    .help("Queueing discipline configuration file"),
            )
            .arg(
                clap::Arg::new("LINK")
                    .required(true)
                    .index(2)
                    .help("Network link name"),
            )
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        // It is safe to unwrap because clap `required(true)` has confirmed
        // so.
        let file_path = matches.get_one::<String>("CONFIG_FILE").unwrap();
        let link_name = matches.get_one::<String>("LINK").unwrap();

        let network = Network::load(Path::new(file_path))?;

        let (connection, handle, _) = rtnetlink::new_connection()?;
        tokio::spawn(connection);

        let link = Link::from_name(&handle, link_name).await?;
        let applied = qdisc_apply(&handle, &link, &network).await?;
        println!(
            "Applied {applied} queueing discipline(s) from {} to link {}",
            network.filename, link.name
        );
        Ok(())
    }
}
