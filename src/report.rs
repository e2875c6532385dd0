use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::descent::simulation::LandingRecord;
use crate::errors::SimulationError;

/// Destination for per-run landing records. The integrator never writes
/// output itself; the runner hands it a sink.
pub trait ReportSink {
    fn record(&mut self, record: &LandingRecord) -> Result<(), SimulationError>;
}

/// Append-only CSV file, one `x,y` displacement per line, no header.
pub struct CsvFileSink {
    file: File,
}

impl CsvFileSink {
    pub fn append(path: &Path) -> Result<Self, SimulationError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(CsvFileSink { file })
    }
}

impl ReportSink for CsvFileSink {
    fn record(&mut self, record: &LandingRecord) -> Result<(), SimulationError> {
        writeln!(
            self.file,
            "{},{}",
            record.displacement.x, record.displacement.y
        )?;
        Ok(())
    }
}

/// Keeps records in memory; useful in tests and for post-processing.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<LandingRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }
}

impl ReportSink for MemorySink {
    fn record(&mut self, record: &LandingRecord) -> Result<(), SimulationError> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::vector2d::Vector2D;

    fn test_record(x: f64, y: f64) -> LandingRecord {
        LandingRecord {
            displacement: Vector2D::new(x, y),
            horizontal_velocity: Vector2D::zero(),
            elapsed_time: 100.0,
            deployment: None,
        }
    }

    #[test]
    fn test_memory_sink_collects_records() {
        let mut sink = MemorySink::new();
        sink.record(&test_record(1.0, 2.0)).unwrap();
        sink.record(&test_record(3.0, 4.0)).unwrap();

        assert_eq!(sink.records.len(), 2);
        assert_eq!(sink.records[1].displacement, Vector2D::new(3.0, 4.0));
    }

    #[test]
    fn test_csv_sink_appends_headerless_lines() {
        let path = std::env::temp_dir().join(format!(
            "descent_sim_sink_test_{}.csv",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        {
            let mut sink = CsvFileSink::append(&path).unwrap();
            sink.record(&test_record(-120.5, 88.25)).unwrap();
        }
        {
            let mut sink = CsvFileSink::append(&path).unwrap();
            sink.record(&test_record(7.0, -3.5)).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "-120.5,88.25\n7,-3.5\n");

        std::fs::remove_file(&path).unwrap();
    }
}
