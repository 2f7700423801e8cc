/// Export batch results to CSV format for spreadsheet analysis
use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::simulation::{Histogram, SampleRecord};

/// Streaming writer for the per-interval record rows. Rows hit the disk as
/// the run progresses, so a full run is never buffered in memory and a write
/// failure aborts the run at the step that hit it.
pub struct RecordWriter {
    file: File,
    pub filename: String,
}

impl RecordWriter {
    /// Create `collision_records.csv` under `output_dir` and write the
    /// header row.
    pub fn create(output_dir: &str) -> Result<Self> {
        std::fs::create_dir_all(output_dir)?;
        let filename = format!("{}/collision_records.csv", output_dir);
        let mut file = File::create(&filename)?;
        writeln!(
            file,
            "Time (s),Particle Collisions,Wall Collisions,Total Collisions,Collision Ratio (%)"
        )?;
        Ok(Self { file, filename })
    }

    pub fn append(&mut self, record: &SampleRecord) -> Result<()> {
        writeln!(self.file, "{}", format_record(record))?;
        Ok(())
    }
}

pub fn format_record(record: &SampleRecord) -> String {
    format!(
        "{:.2},{},{},{},{:.2}",
        record.time,
        record.particle_collisions,
        record.wall_collisions,
        record.total_collisions,
        record.ratio_percent
    )
}

/// Write the complete distribution to `collision_histogram.csv`, empty
/// buckets included, one row per possible simultaneous-collision count.
pub fn export_histogram(histogram: &Histogram, output_dir: &str) -> Result<String> {
    std::fs::create_dir_all(output_dir)?;
    let filename = format!("{}/collision_histogram.csv", output_dir);
    let mut file = File::create(&filename)?;
    writeln!(file, "Collisions,Steps")?;
    for (collisions, steps) in histogram.buckets().iter().enumerate() {
        writeln!(file, "{},{}", collisions, steps)?;
    }
    println!("✓ Exported histogram to {}", filename);
    Ok(filename)
}
