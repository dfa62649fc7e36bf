use std::path::PathBuf;

use anyhow::Context as _;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;
use sparring_adaptive::{AdaptiveController, AdaptiveSettings, optimal_rating_range};
use sparring_core::{GamePhase, MatchOutcome, Rating};
use sparring_tuning::mapper;

use crate::{
    command::CatalogArg,
    schema::{Envelope, SimulatedGame, Simulation},
    util,
};

/// Share of the expected score that turns into draws between evenly matched players.
const DRAW_SHARE: f32 = 0.2;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    catalog: CatalogArg,
    /// Opponent profile id
    #[arg(long)]
    profile: String,
    /// True playing strength of the simulated learner
    #[arg(long)]
    learner_rating: Rating,
    /// Number of games to play
    #[arg(long, default_value_t = 30)]
    games: usize,
    /// Random seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Adaptive settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Learner's expected score against an opponent under the Elo model.
fn expected_score(learner: Rating, opponent: Rating) -> f32 {
    #[expect(clippy::cast_precision_loss)]
    let diff = opponent.saturating_sub(learner) as f32;
    1.0 / (1.0 + 10f32.powf(diff / 400.0))
}

/// Draws an outcome whose mean score equals `expected`.
fn sample_outcome<R>(rng: &mut R, expected: f32) -> MatchOutcome
where
    R: Rng,
{
    let draw = DRAW_SHARE * (1.0 - (2.0 * expected - 1.0).abs());
    let win = expected - draw / 2.0;
    let roll = rng.random::<f32>();
    if roll < win {
        MatchOutcome::Win
    } else if roll < win + draw {
        MatchOutcome::Draw
    } else {
        MatchOutcome::Loss
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        catalog,
        profile,
        learner_rating,
        games,
        seed,
        settings,
        output,
    } = arg;

    let catalog = util::load_catalog(catalog.catalog.as_deref())?;
    let profile = catalog.get(profile)?;
    let mut settings = match settings {
        Some(path) => util::read_settings_file(path)?,
        None => AdaptiveSettings::default(),
    };
    settings.min_rating = settings.min_rating.max(profile.rating_range.min());
    settings.max_rating = settings.max_rating.min(profile.rating_range.max());
    settings.base_rating = profile.target_rating(Some(settings.base_rating));
    let mut controller = AdaptiveController::new(settings)
        .context("Adaptive settings do not fit the opponent's rating range")?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg32::seed_from_u64(seed);
    eprintln!(
        "Simulating {games} games of a {learner_rating} learner against {} (seed {seed})",
        profile.display_name
    );

    let mut record = [0_u32; 3];
    let mut adjustments = 0;
    let mut trace = Vec::with_capacity(*games);
    for game in 1..=*games {
        let opponent_rating = controller.rating();
        let config =
            mapper::config_for_profile(profile, Some(opponent_rating), GamePhase::Middlegame);
        let expected = expected_score(*learner_rating, opponent_rating);
        let outcome = sample_outcome(&mut rng, expected);
        let update = controller.record_outcome(outcome);

        record[match outcome {
            MatchOutcome::Win => 0,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 2,
        }] += 1;
        if update.is_adjusted() {
            adjustments += 1;
        }
        trace.push(SimulatedGame {
            game,
            opponent_rating,
            skill_level: config.skill_level(),
            expected_score: expected,
            outcome,
            update,
        });
    }

    let final_rating = controller.rating();
    let [won, drawn, lost] = record;
    eprintln!(
        "Finished at rating {final_rating} after {adjustments} adjustments ({won}-{drawn}-{lost})"
    );
    let simulation = Simulation {
        profile_id: profile.id.clone(),
        learner_rating: *learner_rating,
        seed,
        final_rating,
        adjustments,
        record: format!("{won}-{drawn}-{lost}"),
        stability: controller.window().stability(),
        optimal_range: optimal_rating_range(final_rating, won + drawn + lost, won),
        games: trace,
    };
    util::save_json(&Envelope::now(simulation), output.as_deref())
}
