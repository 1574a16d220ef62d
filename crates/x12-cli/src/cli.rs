use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

use x12_sdk::LineOfBusiness;

#[derive(Parser)]
#[command(
    name = "x12gen",
    about = "Generate structurally valid ANSI X12 EDI documents for testing",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with generator settings; flags override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate one document
    Generate(GenerateArgs),
    /// Generate one sample file per transaction type
    Batch(BatchArgs),
    /// List supported transaction types
    Types,
    /// Check the envelope and HL structure of a document
    Verify(VerifyArgs),
}

/// Settings shared by `generate` and `batch`.
#[derive(Args, Debug, Default)]
pub struct GenerationArgs {
    /// Number of repeating items (line items, claims or subscribers)
    #[arg(short = 'n', long)]
    pub items: Option<usize>,
    /// Put each segment on its own line
    #[arg(short, long)]
    pub pretty: bool,
    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Generation instant, e.g. 2024-01-02T13:45:00
    #[arg(long, value_parser = parse_instant)]
    pub at: Option<NaiveDateTime>,
    /// Restrict healthcare payers to one line of business
    #[arg(long)]
    pub lob: Option<LineOfBusiness>,
    /// Reject element values that contain a delimiter
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Transaction type key
    #[arg(short = 't', long = "type", default_value = "850")]
    pub transaction: String,
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub generation: GenerationArgs,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Directory for the sample_<type>.edi files
    #[arg(short = 'd', long, default_value = ".")]
    pub output_dir: PathBuf,
    /// Keep going when one transaction type fails
    #[arg(long)]
    pub skip_errors: bool,
    #[command(flatten)]
    pub generation: GenerationArgs,
}

#[derive(Args)]
pub struct VerifyArgs {
    pub file: PathBuf,
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::try_parse_from(["x12gen", "generate"]).unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.transaction, "850");
            assert!(args.output.is_none());
            assert!(args.generation.items.is_none());
            assert!(!args.generation.pretty);
        } else {
            panic!("wrong command");
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "x12gen", "generate", "-t", "837", "-n", "3", "--pretty", "--seed", "42", "--at",
            "2024-01-02T13:45:00", "--lob", "medicaid", "--strict", "-o", "out/claim.edi",
        ])
        .unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.transaction, "837");
            assert_eq!(args.output, Some(PathBuf::from("out/claim.edi")));
            let g = args.generation;
            assert_eq!(g.items, Some(3));
            assert!(g.pretty);
            assert_eq!(g.seed, Some(42));
            assert_eq!(
                g.at,
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(13, 45, 0)
            );
            assert_eq!(g.lob, Some(LineOfBusiness::Medicaid));
            assert!(g.strict);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn bad_instant_is_rejected() {
        assert!(Cli::try_parse_from(["x12gen", "generate", "--at", "yesterday"]).is_err());
    }

    #[test]
    fn bad_lob_is_rejected() {
        assert!(Cli::try_parse_from(["x12gen", "generate", "--lob", "dental"]).is_err());
    }

    #[test]
    fn parse_batch() {
        let cli =
            Cli::try_parse_from(["x12gen", "batch", "-d", "samples", "--skip-errors", "-n", "2"])
                .unwrap();
        if let Command::Batch(args) = cli.command {
            assert_eq!(args.output_dir, PathBuf::from("samples"));
            assert!(args.skip_errors);
            assert_eq!(args.generation.items, Some(2));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "x12gen", "types", "--format", "json", "--verbose", "--config", "x12gen.toml",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Types));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x12gen.toml")));
    }

    #[test]
    fn parse_verify() {
        let cli = Cli::try_parse_from(["x12gen", "verify", "sample_850.edi"]).unwrap();
        if let Command::Verify(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("sample_850.edi"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn verify_requires_a_file() {
        assert!(Cli::try_parse_from(["x12gen", "verify"]).is_err());
    }
}
