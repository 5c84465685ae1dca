use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;
use teamgen_engine::{BalanceOptions, Player};

use crate::schema::roster::RosterFile;

/// Where a command writes its JSON document: a generated roster, a
/// [`BalanceRecord`] or a [`SimulationReport`].
///
/// Without `--output` the document goes to stdout so it can be piped into the
/// next command; human-readable summaries always go to stderr.
///
/// [`BalanceRecord`]: crate::schema::record::BalanceRecord
/// [`SimulationReport`]: crate::schema::record::SimulationReport
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File { writer: BufWriter<File>, path: PathBuf },
}

impl Output {
    /// Writes `record` as pretty JSON to `output_path`, or to stdout when no
    /// path is given.
    pub fn save_json<T>(record: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let output = match output_path {
            Some(path) => Output::create(path)?,
            None => Output::Stdout(io::stdout().lock()),
        };
        output.write_record(record)
    }

    fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn destination(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Output::Stdout(writer) => writer,
            Output::File { writer, .. } => writer,
        }
    }

    /// Serializes one record followed by a newline and flushes the sink.
    fn write_record<T>(mut self, record: &T) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let destination = self.destination();
        let writer = self.writer();
        serde_json::to_writer_pretty(&mut *writer, record)
            .with_context(|| format!("Failed to write JSON to {destination}"))?;
        writeln!(writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to finish writing {destination}"))?;
        tracing::debug!(%destination, "wrote JSON record");
        Ok(())
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Reads a roster, either a bare player array or `{ "players": [...] }`.
pub fn read_roster_file<P>(path: P) -> anyhow::Result<Vec<Player>>
where
    P: AsRef<Path>,
{
    let roster: RosterFile = read_json_file("roster", &path)?;
    let players = roster.into_players();
    tracing::info!(
        path = %path.as_ref().display(),
        players = players.len(),
        "loaded roster"
    );
    Ok(players)
}

/// Reads balancing options, falling back to defaults when no file is given.
pub fn read_options_file(path: Option<&Path>) -> anyhow::Result<BalanceOptions> {
    match path {
        Some(path) => read_json_file("options", path),
        None => Ok(BalanceOptions::default()),
    }
}
