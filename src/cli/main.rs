// SPDX-License-Identifier: Apache-2.0

mod apply;
mod error;
mod show;

pub(crate) use self::error::CliError;
use self::{apply::ApplyCommand, show::ShowCommand};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let mut cli_cmd = clap::Command::new("nqc")
        .about("netqos CLI")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Increase verbose level")
                .global(true),
        )
        .subcommand(ShowCommand::gen_command())
        .subcommand(ApplyCommand::gen_command());

    let matches = cli_cmd.get_matches_mut();

    let (log_groups, log_level) = match matches.get_count("verbose") {
        0 => (vec!["nqc", "netqos"], log::LevelFilter::Info),
        1 => (vec!["nqc", "netqos"], log::LevelFilter::Debug),
        2 => (vec!["nqc", "netqos"], log::LevelFilter::Trace),
        _ => (vec![], log::LevelFilter::Trace),
    };

    if !matches.get_flag("quiet") {
        let mut log_builder = env_logger::Builder::new();
        if log_groups.is_empty() {
            log_builder.filter(None, log_level);
        } else {
            for log_group in log_groups {
                log_builder.filter(Some(log_group), log_level);
            }
        }
        log_builder.init();
    }

    log::info!("nqc version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = call_subcommand(&matches).await {
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn call_subcommand(matches: &clap::ArgMatches) -> Result<(), CliError> {
    if let Some(matches) = matches.subcommand_matches(ShowCommand::NAME) {
        ShowCommand::handle(matches).await
    } else if let Some(matches) =
        matches.subcommand_matches(ApplyCommand::NAME)
    {
        ApplyCommand::handle(matches).await
    } else {
        Err(CliError::from("Unknown command"))
    }
}
