// src/services/frame_export.rs
//
// Writes frame snapshots (grid + curve polyline) to disk as JSON.
// Files are numbered in export order: frame_00001.json, frame_00002.json, ...

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CurvevisError, CurvevisResult};
use crate::models::RenderOutput;

pub struct FrameExporter {
    output_dir: PathBuf,
    export_count: u32,
}

impl FrameExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            export_count: 0,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export_count(&self) -> u32 {
        self.export_count
    }

    /// Writes one snapshot and returns its path.
    /// The output directory is created on first use. A frame holding NaN or
    /// infinite values is refused before anything touches the disk.
    pub fn export(&mut self, output: &RenderOutput) -> CurvevisResult<PathBuf> {
        if let Some(field) = output.first_non_finite() {
            return Err(CurvevisError::export(format!(
                "frame {} has a non-finite {}",
                output.frame, field
            )));
        }

        create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("frame_{:05}.json", self.export_count + 1));
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, output)
            .map_err(|e| CurvevisError::export(format!("{}: {}", path.display(), e)))?;
        writer.flush()?;

        self.export_count += 1;
        tracing::info!(
            frame = output.frame,
            points = output.curve.len(),
            "exported frame to {}",
            path.display()
        );
        Ok(path)
    }
}
