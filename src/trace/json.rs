use std::io::Write;

use serde::Serialize;

use crate::trace::{RoundEvent, TraceSink};
use crate::Result;

/// Writes each round as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<Wr: Write> {
    writer: Wr,
}

impl<Wr: Write> JsonLinesSink<Wr> {
    pub fn new(writer: Wr) -> Self {
        JsonLinesSink { writer }
    }

    /// Flushes and hands back the underlying writer
    pub fn into_inner(mut self) -> Result<Wr> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W, Wr> TraceSink<W> for JsonLinesSink<Wr>
where
    W: Serialize,
    Wr: Write,
{
    fn on_round(&mut self, event: &RoundEvent<W>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
