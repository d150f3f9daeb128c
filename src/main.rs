use clap::{Parser, ValueEnum};
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;
use wordrank::{
    rank_words_in_text_with_custom_config, read_text_from_path, read_text_from_reader,
    DocumentStats, Error, Normalizer, ReportFormat, Reporter, SortStrategy, WordRankConfig,
    DEFAULT_TOP_N,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Stable sort by word, then by count
    TwoPass,
    /// Single comparator over count, then word
    Comparator,
}

/// Prints the most frequent words of each FILE (or standard input)
#[derive(Parser, Debug)]
#[command(name = "wordrank-cli", version, about)]
struct CliArgs {
    /// Files to read; names ending in .gz are decompressed. Reads stdin if omitted
    files: Vec<PathBuf>,

    /// Number of words to report
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N, allow_negative_numbers = true)]
    top: i64,

    /// Emit CSV instead of a numbered list
    #[arg(long)]
    csv: bool,

    /// Also print line, word, and character counts
    #[arg(long)]
    stats: bool,

    /// Skip common English stop words
    #[arg(long)]
    stop_words: bool,

    /// Skip words shorter than N letters
    #[arg(long, value_name = "N", default_value_t = 1)]
    min_length: usize,

    /// Ordering strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::TwoPass)]
    strategy: StrategyArg,

    /// Count words on N threads
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    threads: u64,
}

impl CliArgs {
    fn config(&self) -> WordRankConfig {
        WordRankConfig {
            top_n: self.top,
            sort_strategy: match self.strategy {
                StrategyArg::TwoPass => SortStrategy::TwoPassStable,
                StrategyArg::Comparator => SortStrategy::SingleComparator,
            },
            normalizer: Normalizer {
                filter_stop_words: self.stop_words,
                min_token_length: self.min_length,
            },
            shard_count: usize::try_from(self.threads).unwrap_or(usize::MAX),
        }
    }

    fn format(&self) -> ReportFormat {
        if self.csv {
            ReportFormat::Csv
        } else {
            ReportFormat::Plain
        }
    }
}

/// A document to report on. `name` is `None` for standard input.
struct Document {
    name: Option<String>,
    text: String,
}

fn report_document<W: Write>(
    out: &mut W,
    cli_args: &CliArgs,
    document: &Document,
) -> Result<DocumentStats, Error> {
    let config = cli_args.config();
    let ranked = rank_words_in_text_with_custom_config(&config, &document.text);

    let mut reporter = Reporter::new(cli_args.format());
    if let Some(name) = &document.name {
        reporter = reporter.with_source_name(name.as_str());
    }
    reporter.write_report(&mut *out, &ranked, config.top_n)?;

    let stats = DocumentStats::from_text(&document.text);
    if cli_args.stats {
        match &document.name {
            Some(name) => writeln!(out, "{} {}", stats, name)?,
            None => writeln!(out, "{}", stats)?,
        }
    }

    Ok(stats)
}

/// Reports each document in turn, separated by blank lines. With `--stats`
/// and more than one document a `total` line follows.
fn write_reports<W: Write>(
    out: &mut W,
    cli_args: &CliArgs,
    documents: &[Document],
) -> Result<(), Error> {
    let mut all_stats = Vec::with_capacity(documents.len());

    for (index, document) in documents.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        all_stats.push(report_document(out, cli_args, document)?);
    }

    if cli_args.stats && all_stats.len() > 1 {
        let total: DocumentStats = all_stats.into_iter().sum();
        writeln!(out, "{} total", total)?;
    }

    Ok(())
}

fn read_documents(cli_args: &CliArgs) -> Result<Vec<Document>, Error> {
    // Read the input text from stdin
    if cli_args.files.is_empty() {
        let text = read_text_from_reader(io::stdin().lock())?;
        return Ok(vec![Document { name: None, text }]);
    }

    cli_args
        .files
        .iter()
        .map(|file| {
            info!("Processing {}", file.display());
            Ok(Document {
                name: Some(file.display().to_string()),
                text: read_text_from_path(file)?,
            })
        })
        .collect()
}

fn run(cli_args: &CliArgs) -> Result<(), Error> {
    let documents = read_documents(cli_args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_reports(&mut out, cli_args, &documents)
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli_args = CliArgs::parse();

    if let Err(e) = run(&cli_args) {
        error!("Error ranking words: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wordrank::DEFAULT_WORD_RANK_CONFIG;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("wordrank-cli").chain(args.iter().copied()))
    }

    fn document(name: &str, text: &str) -> Document {
        Document {
            name: Some(name.to_string()),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_command_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli_args = parse(&[]).unwrap();

        assert_eq!(cli_args.config(), DEFAULT_WORD_RANK_CONFIG);
        assert_eq!(cli_args.format(), ReportFormat::Plain);
        assert!(cli_args.files.is_empty());
        assert!(!cli_args.stats);
    }

    #[test]
    fn test_parses_all_options() {
        let cli_args = parse(&[
            "--top",
            "3",
            "--csv",
            "--stats",
            "--stop-words",
            "--min-length",
            "4",
            "--strategy",
            "comparator",
            "--threads",
            "4",
            "a.txt",
            "b.txt.gz",
        ])
        .unwrap();

        let config = cli_args.config();
        assert_eq!(config.top_n, 3);
        assert_eq!(cli_args.format(), ReportFormat::Csv);
        assert!(cli_args.stats);
        assert!(config.normalizer.filter_stop_words);
        assert_eq!(config.normalizer.min_token_length, 4);
        assert_eq!(config.sort_strategy, SortStrategy::SingleComparator);
        assert_eq!(config.shard_count, 4);
        assert_eq!(
            cli_args.files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt.gz")]
        );
    }

    #[test]
    fn test_negative_top_is_accepted() {
        let cli_args = parse(&["-n", "-5"]).unwrap();
        assert_eq!(cli_args.config().top_n, -5);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["--top"]).is_err());
        assert!(parse(&["--top", "ten"]).is_err());
        assert!(parse(&["--strategy", "bubble"]).is_err());
        assert!(parse(&["--threads", "0"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }

    #[test]
    fn test_single_document_with_stats() {
        let cli_args = parse(&["--stats", "-n", "2"]).unwrap();

        let mut out = Vec::new();
        write_reports(&mut out, &cli_args, &[document("short.txt", "a b a\n")]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Top 2 Most Frequent Words in short.txt\n1. a (2)\n2. b (1)\n1 3 6 short.txt\n"
        );
    }

    #[test]
    fn test_multiple_documents_with_total() {
        let cli_args = parse(&["--stats", "-n", "1"]).unwrap();

        let mut out = Vec::new();
        write_reports(
            &mut out,
            &cli_args,
            &[document("one.txt", "a b a\n"), document("two.txt", "c\nc\n")],
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Top 1 Most Frequent Words in one.txt\n1. a (2)\n1 3 6 one.txt\n\
             \n\
             Top 1 Most Frequent Words in two.txt\n1. c (2)\n2 2 4 two.txt\n\
             3 5 10 total\n"
        );
    }

    #[test]
    fn test_multiple_documents_without_stats() {
        let cli_args = parse(&["-n", "1"]).unwrap();

        let mut out = Vec::new();
        write_reports(
            &mut out,
            &cli_args,
            &[document("one.txt", "x"), document("two.txt", "y")],
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Top 1 Most Frequent Words in one.txt\n1. x (1)\n\
             \n\
             Top 1 Most Frequent Words in two.txt\n1. y (1)\n"
        );
    }

    #[test]
    fn test_stdin_document_has_no_title() {
        let cli_args = parse(&["--stats"]).unwrap();

        let mut out = Vec::new();
        write_reports(
            &mut out,
            &cli_args,
            &[Document {
                name: None,
                text: "z z".to_string(),
            }],
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1. z (2)\n0 2 3\n");
    }
}
