use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{
    adapt::AdaptArg, configure::ConfigureArg, profiles::ProfilesArg, report::ReportArg,
    simulate::SimulateArg,
};

mod adapt;
mod configure;
mod profiles;
mod report;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List opponent profiles
    Profiles(#[clap(flatten)] ProfilesArg),
    /// Derive engine settings and UCI commands for an opponent
    Configure(#[clap(flatten)] ConfigureArg),
    /// Feed match outcomes to the adaptive rating controller
    Adapt(#[clap(flatten)] AdaptArg),
    /// Generate a training report from a progress snapshot
    Report(#[clap(flatten)] ReportArg),
    /// Simulate an adaptive training session against an opponent
    Simulate(#[clap(flatten)] SimulateArg),
}

/// Where opponent profiles come from.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    /// Opponent catalog JSON file (built-in profiles when omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Profiles(arg) => profiles::run(&arg)?,
        Mode::Configure(arg) => configure::run(&arg)?,
        Mode::Adapt(arg) => adapt::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
