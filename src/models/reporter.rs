use crate::models::Error;
use crate::types::RankedEntry;
use crate::utils::ranked_entry_limit;
use std::io::Write;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `{rank}. {word} ({count})`, one entry per line.
    #[default]
    Plain,
    /// `rank,word,count` header followed by one record per entry.
    Csv,
}

/// Renders ranked entries for display.
#[derive(Clone, Debug, Default)]
pub struct Reporter {
    pub format: ReportFormat,
    /// Name of the document, shown in the title line of plain reports.
    pub source_name: Option<String>,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            source_name: None,
        }
    }

    pub fn with_source_name<S: Into<String>>(mut self, source_name: S) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    /// Writes at most `top_n` of `entries` to `writer`. Ranks start at 1.
    pub fn write_report<W: Write>(
        &self,
        writer: W,
        entries: &[RankedEntry],
        top_n: i64,
    ) -> Result<(), Error> {
        let entries = &entries[..ranked_entry_limit(top_n).min(entries.len())];

        match self.format {
            ReportFormat::Plain => self.write_plain(writer, entries, top_n),
            ReportFormat::Csv => self.write_csv(writer, entries),
        }
    }

    /// Same as [`Reporter::write_report`], collected into a `String`.
    pub fn render(&self, entries: &[RankedEntry], top_n: i64) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.write_report(&mut buffer, entries, top_n)?;

        String::from_utf8(buffer).map_err(|err| Error::Other(err.to_string()))
    }

    fn write_plain<W: Write>(
        &self,
        mut writer: W,
        entries: &[RankedEntry],
        top_n: i64,
    ) -> Result<(), Error> {
        if let Some(source_name) = &self.source_name {
            writeln!(
                writer,
                "Top {} Most Frequent Words in {}",
                top_n.max(0),
                source_name
            )?;
        }

        for (index, (token, frequency)) in entries.iter().enumerate() {
            writeln!(writer, "{}. {} ({})", index + 1, token, frequency)?;
        }

        writer.flush()?;

        Ok(())
    }

    fn write_csv<W: Write>(&self, writer: W, entries: &[RankedEntry]) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["rank", "word", "count"])?;

        for (index, (token, frequency)) in entries.iter().enumerate() {
            csv_writer.write_record([
                (index + 1).to_string(),
                token.to_owned(),
                frequency.to_string(),
            ])?;
        }

        csv_writer.flush()?;

        Ok(())
    }
}
