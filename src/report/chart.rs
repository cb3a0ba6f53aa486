use std::{fs::File, io, path::Path};

use csv::Writer;
use tracing::debug;

use crate::{points::PointSet, search::SearchOutcome, ReportError};

/// Straight segment drawn over the scatter, given by its two end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Everything a chart backend needs: the scatter and an optional fitted line.
#[derive(Debug, Clone)]
pub struct ChartRequest<'a> {
    pub points: &'a PointSet,
    pub overlay: Option<LineSegment>,
}

impl<'a> ChartRequest<'a> {
    /// Scatter plus the best candidate evaluated at `x = 0` and `x = 1`.
    pub fn best_fit(outcome: &'a SearchOutcome) -> Self {
        let line = outcome.best().candidate;
        Self {
            points: outcome.points(),
            overlay: Some(LineSegment {
                start: (0.0, line.predict_single(0.0)),
                end: (1.0, line.predict_single(1.0)),
            }),
        }
    }
}

pub trait ChartSink {
    fn render(&mut self, request: &ChartRequest<'_>) -> Result<(), ReportError>;
}

/// Writes the scatter and the overlay line as two `x,y` CSV tables.
pub struct CsvChartWriter<W: io::Write> {
    points: Writer<W>,
    line: Writer<W>,
}

impl CsvChartWriter<File> {
    /// Creates `points.csv` and `best_line.csv` inside `dir`.
    pub fn create_in(dir: &Path) -> Result<Self, ReportError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            points: Writer::from_path(dir.join("points.csv"))?,
            line: Writer::from_path(dir.join("best_line.csv"))?,
        })
    }
}

impl<W: io::Write> CsvChartWriter<W> {
    pub fn from_writers(points: W, line: W) -> Self {
        Self {
            points: Writer::from_writer(points),
            line: Writer::from_writer(line),
        }
    }

    pub fn into_inner(self) -> Result<(W, W), ReportError> {
        let points = self.points.into_inner().map_err(|e| e.into_error())?;
        let line = self.line.into_inner().map_err(|e| e.into_error())?;
        Ok((points, line))
    }
}

impl<W: io::Write> ChartSink for CsvChartWriter<W> {
    fn render(&mut self, request: &ChartRequest<'_>) -> Result<(), ReportError> {
        debug!(
            n = request.points.len(),
            overlay = request.overlay.is_some(),
            "writing chart data"
        );

        self.points.write_record(["x", "y"])?;
        for p in request.points.iter() {
            self.points
                .write_record([p.x.to_string(), p.y.to_string()])?;
        }
        self.points.flush()?;

        self.line.write_record(["x", "y"])?;
        if let Some(LineSegment { start, end }) = request.overlay {
            for (x, y) in [start, end] {
                self.line.write_record([x.to_string(), y.to_string()])?;
            }
        }
        self.line.flush()?;
        Ok(())
    }
}
