use crate::{
    error::{KeyboardError, Result},
    geometry::KeyPlacement,
};
use chrono::Local;
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const CSV_HEADER: [&str; 8] = ["Index", "Row", "Label", "X", "Y", "Z", "Angle", "Yaw"];

/// Placement with the label the key currently shows
#[derive(Debug, Serialize)]
pub struct LabeledPlacement<'a> {
    pub label: &'a str,
    #[serde(flatten)]
    pub placement: &'a KeyPlacement,
}

pub fn labeled<'a>(
    placements: &'a [KeyPlacement],
    labels: &'a [String],
) -> Vec<LabeledPlacement<'a>> {
    placements
        .iter()
        .map(|placement| LabeledPlacement {
            label: labels.get(placement.index).map_or("", String::as_str),
            placement,
        })
        .collect()
}

pub fn write_placements_csv<W: Write>(
    writer: W,
    placements: &[KeyPlacement],
    labels: &[String],
) -> Result<()> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }
    let mut wtr = builder.from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for row in labeled(placements, labels) {
        let p = row.placement;
        wtr.write_record([
            p.index.to_string(),
            p.row.to_string(),
            row.label.to_string(),
            format!("{:.6}", p.position.x),
            format!("{:.6}", p.position.y),
            format!("{:.6}", p.position.z),
            format!("{:.4}", p.angle_deg),
            format!("{:.4}", p.yaw_deg),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_placements_to_csv(
    placements: &[KeyPlacement],
    labels: &[String],
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("layout_{timestamp}.csv");

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| KeyboardError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| KeyboardError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;

    write_placements_csv(BufWriter::new(file), placements, labels)?;
    Ok(file_path)
}

pub fn placements_to_json(placements: &[KeyPlacement], labels: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&labeled(placements, labels))?)
}
