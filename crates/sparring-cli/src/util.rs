use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};
use sparring_adaptive::{AdaptiveSettings, AdaptiveState};
use sparring_analysis::ProgressSnapshot;
use sparring_core::ProfileCatalog;

/// Writes `value` as pretty JSON to `output_path`, or to stdout when none is given.
pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize,
{
    let Some(path) = output_path else {
        return write_json(io::stdout().lock(), value, "stdout");
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json(BufWriter::new(file), value, &path.display().to_string())?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn write_json<W, T>(mut writer: W, value: &T, target: &str) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {target}"))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to finish writing {target}"))
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Loads the opponent catalog from `path`, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<ProfileCatalog> {
    match path {
        Some(path) => {
            let catalog: ProfileCatalog = read_json_file("catalog", path)?;
            eprintln!(
                "Loaded {} profiles from {}",
                catalog.profiles().len(),
                path.display()
            );
            Ok(catalog)
        }
        None => Ok(ProfileCatalog::builtin()),
    }
}

pub fn read_settings_file<P>(path: P) -> anyhow::Result<AdaptiveSettings>
where
    P: AsRef<Path>,
{
    read_json_file("adaptive settings", path)
}

pub fn read_state_file<P>(path: P) -> anyhow::Result<AdaptiveState>
where
    P: AsRef<Path>,
{
    read_json_file("adaptive state", path)
}

pub fn read_progress_file<P>(path: P) -> anyhow::Result<ProgressSnapshot>
where
    P: AsRef<Path>,
{
    read_json_file("progress", path)
}
