use std::path::PathBuf;

use sparring_analysis::generate_report;

use crate::{schema::Envelope, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Progress snapshot JSON file
    #[arg(long)]
    progress: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg { progress, output } = arg;

    eprintln!("Loading progress from {}...", progress.display());
    let progress = util::read_progress_file(progress)?;
    let report = generate_report(&progress);
    eprintln!(
        "Report: {} weaknesses, {} recommendations",
        report.weaknesses.as_slice().len(),
        report.recommendations.len()
    );

    util::save_json(&Envelope::now(report), output.as_deref())
}
