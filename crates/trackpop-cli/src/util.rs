use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::{Context, bail};
use trackpop_analysis::dataset::TrackCollection;

/// Read and deserialize a JSON file, labelling errors with the file kind.
pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a track dataset from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed, or if the
/// dataset contains no tracks.
pub fn read_tracks_file<P>(path: P) -> anyhow::Result<TrackCollection>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let collection: TrackCollection = read_json_file("tracks", path)?;
    if collection.tracks.is_empty() {
        bail!("{} contains no tracks", path.display());
    }
    Ok(collection)
}

/// Serialize a value as pretty JSON to a file, or to stdout when no path
/// is given.
pub fn save_json<T>(value: &T, output: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
            writeln!(writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to flush output to {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value)
                .context("Failed to write JSON to stdout")?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
