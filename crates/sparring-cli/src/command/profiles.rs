use std::path::PathBuf;

use sparring_core::{Rating, StyleId};

use crate::{
    command::CatalogArg,
    schema::{Envelope, ProfileEntry, ProfileList},
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ProfilesArg {
    #[clap(flatten)]
    catalog: CatalogArg,
    /// Only list opponents that can be tuned to this rating
    #[arg(long)]
    rating: Option<Rating>,
    /// Prefer opponents of this style (requires --rating)
    #[arg(long, requires = "rating")]
    style: Option<StyleId>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ProfilesArg) -> anyhow::Result<()> {
    let ProfilesArg {
        catalog,
        rating,
        style,
        output,
    } = arg;

    let catalog = util::load_catalog(catalog.catalog.as_deref())?;
    let profiles = match rating {
        Some(rating) => catalog.recommended(*rating, *style),
        None => catalog.profiles().iter().collect(),
    };
    if profiles.is_empty() {
        eprintln!("No opponent supports the requested rating");
    }

    let list = ProfileList {
        profiles: profiles
            .into_iter()
            .map(|profile| ProfileEntry {
                profile,
                style_summary: profile.style_vector.describe(),
            })
            .collect(),
    };
    util::save_json(&Envelope::now(list), output.as_deref())
}
