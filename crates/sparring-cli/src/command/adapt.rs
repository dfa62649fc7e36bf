use std::path::PathBuf;

use anyhow::Context as _;
use sparring_adaptive::{AdaptiveController, AdaptiveState};
use sparring_core::MatchOutcome;

use crate::{
    schema::{AdaptResult, Envelope, OutcomeEvent},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AdaptArg {
    /// Outcomes in the order the games finished, e.g. `win,loss,draw`
    #[arg(value_delimiter = ',', required = true)]
    pub(crate) outcomes: Vec<MatchOutcome>,
    /// Adaptive state JSON file to resume from (a fresh session when omitted)
    #[arg(long)]
    state: Option<PathBuf>,
    /// Adaptive settings JSON file (overrides the settings stored in the state)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Start a new session before recording
    #[arg(long)]
    reset: bool,
    /// Also write the bare updated state to this file
    #[arg(long)]
    state_output: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AdaptArg) -> anyhow::Result<()> {
    let AdaptArg {
        outcomes,
        state,
        settings,
        reset,
        state_output,
        output,
    } = arg;

    let settings = settings
        .as_ref()
        .map(util::read_settings_file)
        .transpose()?;
    let state = match state {
        Some(path) => {
            let mut state = util::read_state_file(path)?;
            if let Some(settings) = settings {
                state.settings = settings;
            }
            state
        }
        None => AdaptiveState::new(settings.unwrap_or_default()),
    };
    let mut controller =
        AdaptiveController::from_state(state).context("Invalid adaptive settings")?;
    if *reset {
        controller.reset_session();
    }

    let start = controller.rating();
    let events = outcomes
        .iter()
        .map(|&outcome| {
            let update = controller.record_outcome(outcome);
            OutcomeEvent {
                outcome,
                rating: controller.rating(),
                update,
            }
        })
        .collect::<Vec<_>>();
    eprintln!(
        "Recorded {} outcomes: rating {start} -> {}",
        events.len(),
        controller.rating()
    );

    let state = controller.into_state();
    if let Some(path) = state_output {
        util::save_json(&state, Some(path.as_path()))?;
    }
    let result = AdaptResult {
        events,
        stability: state.window.stability(),
        state,
    };
    util::save_json(&Envelope::now(result), output.as_deref())
}

