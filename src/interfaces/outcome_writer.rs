use crate::application::outcome::OutcomeView;
use crate::error::Result;
use std::io::Write;

/// Writes outcome views to any `Write` sink (e.g. stdout), as plain text or
/// as a single JSON document.
pub struct OutcomeWriter<W: Write> {
    writer: W,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_text(&mut self, view: &OutcomeView) -> Result<()> {
        writeln!(self.writer, "{}", view.title)?;
        for message in &view.messages {
            writeln!(self.writer, "  {}", message)?;
        }
        if let Some(amount) = view.amount {
            writeln!(self.writer, "amount: {}", amount)?;
        }
        if let Some(transaction_id) = &view.transaction_id {
            writeln!(self.writer, "transaction: {}", transaction_id)?;
        }
        let actions: Vec<String> = view.actions.iter().map(|a| a.to_string()).collect();
        writeln!(self.writer, "next: {}", actions.join(" | "))?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, view: &OutcomeView) -> Result<()> {
        serde_json::to_writer(&mut self.writer, view)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
