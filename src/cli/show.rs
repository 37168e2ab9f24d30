// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use netqos::Network;

use crate::CliError;

pub(crate) struct ShowCommand;

impl ShowCommand {
    pub(crate) const NAME: &str = "show";

    pub(crate) fn gen_command() -> clap::Command {
        clap::Command::new("show")
            .alias("s")
            .about("Show parsed queueing discipline configuration")
            .arg(
                clap::Arg::new("CONFIG_FILE")
                    .required(true)
                    .index(1)
                    .help("Queueing discipline configuration file"),
            )
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        // It is safe to unwrap because clap `required(true)` has confirmed
        // so.
        let file_path = matches.get_one::<String>("CONFIG_FILE").unwrap();
        let network = Network::load(Path::new(file_path))?;
        println!("{}", serde_yaml::to_string(&network)?);
        Ok(())
    }
}
