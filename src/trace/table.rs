use std::io::Write;

use colored::Colorize;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Weight, WeightMatrix};
use crate::trace::{RoundEvent, TraceSink};
use crate::{Error, Result};

/// Presentation settings for [`TableSink`]
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Prefix put before vertex ids in the header and in parent references
    pub vertex_prefix: String,
    /// Text shown for an infinite distance
    pub infinity_label: String,
    /// Render the settled cell of each round in bold italics
    pub highlight_settled: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            vertex_prefix: "v".to_string(),
            infinity_label: "Infinity".to_string(),
            highlight_settled: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Cell {
    text: String,
    settled: bool,
}

/// Renders the trace as a table with one row per round and one column per vertex.
///
/// The settled vertex shows `distance/<prefix><parent>`, vertices still in the
/// fringe show their tentative distance, and vertices settled in earlier rounds
/// are left blank.
#[derive(Debug, Clone)]
pub struct TableSink {
    vertex_count: usize,
    config: ReportConfig,
    rows: Vec<Vec<Cell>>,
}

impl TableSink {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_config(vertex_count, ReportConfig::default())
    }

    pub fn with_config(vertex_count: usize, config: ReportConfig) -> Self {
        TableSink {
            vertex_count,
            config,
            rows: Vec::new(),
        }
    }

    /// Number of rounds recorded so far
    pub fn round_count(&self) -> usize {
        self.rows.len()
    }

    /// Renders the header and every recorded round, one line each
    pub fn render(&self) -> String {
        let header: Vec<Cell> = std::iter::once(Cell::default())
            .chain((0..self.vertex_count).map(|v| Cell {
                text: format!("{}{}", self.config.vertex_prefix, v),
                settled: false,
            }))
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|cell| cell.text.len()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.text.len());
            }
        }

        let mut out = String::new();
        for row in std::iter::once(&header).chain(&self.rows) {
            // Blank cells at the end of a row are dropped along with their separators
            let used = row
                .iter()
                .rposition(|cell| !cell.text.is_empty())
                .map_or(0, |last| last + 1);
            let line: Vec<String> = row[..used]
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| {
                    let padded = format!("{:<width$}", cell.text, width = width);
                    if cell.settled && self.config.highlight_settled {
                        padded.bold().italic().to_string()
                    } else {
                        padded
                    }
                })
                .collect();
            out.push_str(line.join(" | ").trim_end());
            out.push('\n');
        }
        out
    }

    /// Writes the rendered table
    pub fn write_to<Wr: Write>(&self, mut writer: Wr) -> Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn distance_label<W: Weight>(&self, distance: W) -> String {
        if distance == W::infinity() {
            self.config.infinity_label.clone()
        } else {
            distance.to_string()
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.vertex_count {
            return Err(Error::InvalidArgument(format!(
                "vertex {} out of range for a {}-column table",
                vertex, self.vertex_count
            )));
        }
        Ok(())
    }
}

impl<W> TraceSink<W> for TableSink
where
    W: Weight,
{
    fn on_round(&mut self, event: &RoundEvent<W>) -> Result<()> {
        let mut row = vec![Cell::default(); self.vertex_count + 1];
        row[0].text = event.round.to_string();

        let settled = &event.settled;
        self.check_vertex(settled.vertex)?;
        row[settled.vertex + 1] = Cell {
            text: format!(
                "{}/{}{}",
                self.distance_label(settled.distance),
                self.config.vertex_prefix,
                settled.parent
            ),
            settled: true,
        };

        for &(vertex, distance) in &event.fringe {
            self.check_vertex(vertex)?;
            row[vertex + 1].text = self.distance_label(distance);
        }

        self.rows.push(row);
        Ok(())
    }
}

/// Writes one line per vertex with its final distance and path from the source
pub fn write_summary<W, Wr>(result: &ShortestPathResult<W>, mut writer: Wr) -> Result<()>
where
    W: Weight,
    Wr: Write,
{
    let dijkstra = Dijkstra::new();
    for v in 0..result.vertex_count() {
        let path = <Dijkstra as ShortestPathAlgorithm<W, WeightMatrix<W>>>::get_path(
            &dijkstra, result, v,
        );
        match (result.distance(v), path) {
            (Some(dist), Some(path)) => {
                writeln!(writer, "v{}: distance = {}, path = {:?}", v, dist, path)?
            }
            _ => writeln!(writer, "v{}: unreachable", v)?,
        }
    }
    writer.flush()?;
    Ok(())
}
