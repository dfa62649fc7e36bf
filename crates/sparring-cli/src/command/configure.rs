use std::path::PathBuf;

use anyhow::Context as _;
use clap::ArgGroup;
use sparring_core::{GamePhase, Rating, StyleVector};
use sparring_tuning::{mapper, uci};

use crate::{
    command::CatalogArg,
    schema::{Configuration, Envelope},
    util,
};

#[derive(Debug, Clone, clap::Args)]
#[command(group(ArgGroup::new("opponent").required(true).args(["profile", "style"])))]
pub(crate) struct ConfigureArg {
    #[clap(flatten)]
    catalog: CatalogArg,
    /// Opponent profile id, e.g. `magnus_carlsen`
    #[arg(long)]
    profile: Option<String>,
    /// Style weights `positional,tactical,risk,attack,endgame`
    #[arg(long, value_parser = parse_style, requires = "rating")]
    style: Option<StyleVector>,
    /// Target rating (defaults to the profile's nominal rating)
    #[arg(long)]
    rating: Option<Rating>,
    /// Game phase
    #[arg(long, default_value_t = GamePhase::Middlegame, conflicts_with = "fen")]
    phase: GamePhase,
    /// Detect the game phase from a FEN position
    #[arg(long)]
    fen: Option<String>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_style(s: &str) -> Result<StyleVector, String> {
    let weights = s
        .split(',')
        .map(|w| {
            w.trim()
                .parse::<f32>()
                .map_err(|e| format!("invalid weight `{w}`: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let [positional, tactical, risk, attack, endgame] = weights[..] else {
        return Err(format!("expected 5 weights, got {}", weights.len()));
    };
    Ok(StyleVector::new(positional, tactical, risk, attack, endgame))
}

pub(crate) fn run(arg: &ConfigureArg) -> anyhow::Result<()> {
    let ConfigureArg {
        catalog,
        profile,
        style,
        rating,
        phase,
        fen,
        output,
    } = arg;

    let phase = match fen {
        Some(fen) => GamePhase::from_fen(fen).context("Failed to detect game phase")?,
        None => *phase,
    };

    let configuration = if let Some(id) = profile {
        let catalog = util::load_catalog(catalog.catalog.as_deref())?;
        let profile = catalog.get(id)?;
        let target = profile.target_rating(*rating);
        let config = mapper::config_for_profile(profile, *rating, phase);
        Configuration {
            profile_id: Some(profile.id.clone()),
            rating: target,
            phase,
            config,
            commands: uci::encode(&config),
        }
    } else {
        let style = (*style).context("Either --profile or --style is required")?;
        let rating = (*rating).context("--style requires --rating")?;
        let config = mapper::map_config(&style, rating, phase);
        Configuration {
            profile_id: None,
            rating,
            phase,
            config,
            commands: uci::encode(&config),
        }
    };
    eprintln!(
        "Configured skill level {} at rating {} for the {}",
        configuration.config.skill_level(),
        configuration.rating,
        configuration.phase
    );

    util::save_json(&Envelope::now(configuration), output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style() {
        let style = parse_style("0.8, 0.2,0.3,0.4,1.5").unwrap();
        assert_eq!(style.endgame(), 1.0);
        assert!(parse_style("0.8,0.2").is_err());
        assert!(parse_style("a,b,c,d,e").is_err());
    }
}
