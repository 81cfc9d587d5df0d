use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::selector::{ActionSelector, DecisionRule, Evaluation};

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Export a selector's figures as JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `evaluations.jsonl` — one [`Evaluation`] per act, in insertion order
/// - `rankings.jsonl` — the winning act under each decision rule
pub fn flush_to_jsonl(selector: &ActionSelector, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("evaluations.jsonl"),
        selector.evaluations().into_iter(),
    )?;

    let rankings = [DecisionRule::Utilitarian, DecisionRule::NegativeUtilitarian]
        .into_iter()
        .map(|rule| selector.best(rule))
        .collect::<Result<Vec<_>>>()?;
    write_jsonl(&output_dir.join("rankings.jsonl"), rankings.iter())?;

    Ok(())
}

/// Read back an `evaluations.jsonl` file.
pub fn read_evaluations(path: &Path) -> Result<Vec<Evaluation>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        rows.push(serde_json::from_str(&line)?);
    }
    Ok(rows)
}
