use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use x12_sdk::{
    write_document, BatchMode, EnvelopeReport, EnvelopeSpec, Generator, GeneratorConfig,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => {
            let config = load_config(cli.config.as_deref(), &args.generation)?;
            cmd_generate(args, config, &cli.format)
        }
        Command::Batch(args) => {
            let config = load_config(cli.config.as_deref(), &args.generation)?;
            cmd_batch(args, config, &cli.format)
        }
        Command::Types => cmd_types(&cli.format),
        Command::Verify(args) => cmd_verify(args, &cli.format),
    }
}

/// Config file (or defaults) with command-line flags layered on top.
fn load_config(path: Option<&Path>, flags: &GenerationArgs) -> anyhow::Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    config.pretty |= flags.pretty;
    config.strict_delimiters |= flags.strict;
    if flags.seed.is_some() {
        config.seed = flags.seed;
    }
    if flags.at.is_some() {
        config.timestamp = flags.at;
    }
    if flags.lob.is_some() {
        config.line_of_business = flags.lob;
    }
    Ok(config)
}

fn cmd_generate(
    args: GenerateArgs,
    config: GeneratorConfig,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let pretty = config.pretty;
    let mut generator = Generator::new(config);
    let doc = generator.generate_key(&args.transaction, args.generation.items)?;

    match &args.output {
        Some(path) => {
            write_document(path, &doc.text, pretty)?;
            match format {
                OutputFormat::Json => {
                    let mut value = serde_json::to_value(&doc)?;
                    value["path"] = json!(path);
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Text => println!(
                    "{} Generated {} ({}): {}",
                    "✓".green().bold(),
                    doc.transaction.key().yellow(),
                    doc.description,
                    path.display()
                ),
            }
        }
        None => match format {
            OutputFormat::Json => {
                let mut value = serde_json::to_value(&doc)?;
                value["document"] = json!(doc.text);
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => println!("{}", doc.text),
        },
    }
    Ok(())
}

fn cmd_batch(args: BatchArgs, config: GeneratorConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let mode = if args.skip_errors {
        BatchMode::Skip
    } else {
        BatchMode::Abort
    };
    let mut generator = Generator::new(config);
    let report = generator
        .generate_batch(&args.output_dir, args.generation.items, mode)
        .with_context(|| format!("generating samples into {}", args.output_dir.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for file in &report.written {
                println!(
                    "{} Generated {} ({}): {}",
                    "✓".green().bold(),
                    file.transaction.key().yellow(),
                    file.description,
                    file.path.display()
                );
            }
            for skipped in &report.skipped {
                println!(
                    "{} Skipped {}: {}",
                    "✗".red().bold(),
                    skipped.transaction.key().yellow(),
                    skipped.error
                );
            }
        }
    }
    Ok(())
}

fn cmd_types(format: &OutputFormat) -> anyhow::Result<()> {
    let table = EnvelopeSpec::table();
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = table
                .iter()
                .map(|spec| {
                    json!({
                        "key": spec.transaction.key(),
                        "description": spec.transaction.description(),
                        "functional_id": spec.functional_id,
                        "version": spec.version,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            for spec in &table {
                println!(
                    "  {}  {:<34} {}  {}",
                    spec.transaction.key().yellow().bold(),
                    spec.transaction.description(),
                    spec.functional_id.cyan(),
                    spec.version.dimmed()
                );
            }
        }
    }
    Ok(())
}

fn cmd_verify(args: VerifyArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let report = EnvelopeReport::inspect(&text)
        .with_context(|| format!("parsing {}", args.file.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }

    if !report.is_valid() {
        anyhow::bail!(
            "{} failed verification with {} violation(s)",
            args.file.display(),
            report.violations.len()
        );
    }
    Ok(())
}

fn print_report(report: &EnvelopeReport) {
    let d = report.delimiters;
    println!(
        "Delimiters: element {} segment {} sub-element {}",
        d.element.to_string().cyan(),
        d.segment.to_string().cyan(),
        d.sub_element.to_string().cyan()
    );
    println!("Segments: {}", report.segment_count.to_string().bold());
    println!("Interchange control: {}", report.interchange_control.yellow());
    for set in &report.transaction_sets {
        println!(
            "  ST {} control {}: {} segments, {} HL levels",
            set.set_id.yellow(),
            set.control,
            set.segment_count,
            set.hl_levels
        );
    }
    if report.is_valid() {
        println!("{} Structure verified", "✓".green().bold());
    } else {
        for v in &report.violations {
            println!(
                "  {} segment {}: {:?}: {}",
                "✗".red().bold(),
                v.segment_index,
                v.kind,
                v.description
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x12gen.toml");
        std::fs::write(&path, "seed = 1\nline_of_business = \"medicare\"\n").unwrap();
        let flags = GenerationArgs {
            seed: Some(9),
            pretty: true,
            ..GenerationArgs::default()
        };
        let config = load_config(Some(path.as_path()), &flags).unwrap();
        assert_eq!(config.seed, Some(9));
        assert!(config.pretty);
        assert_eq!(config.line_of_business, Some(x12_sdk::LineOfBusiness::Medicare));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/x12gen.toml")), &GenerationArgs::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("loading config"));
    }

    #[test]
    fn generate_then_verify_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("po.edi");
        let out_arg = out.to_str().unwrap();
        let cli = Cli::try_parse_from([
            "x12gen", "generate", "-t", "810", "--seed", "3", "--pretty", "-o", out_arg,
        ])
        .unwrap();
        run_command(cli).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.ends_with("~\n"));

        let cli = Cli::try_parse_from(["x12gen", "verify", out_arg]).unwrap();
        run_command(cli).unwrap();
    }

    #[test]
    fn verify_rejects_tampered_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ack.edi");
        let out_arg = out.to_str().unwrap();
        let cli =
            Cli::try_parse_from(["x12gen", "generate", "-t", "997", "--seed", "4", "-o", out_arg])
                .unwrap();
        run_command(cli).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let tampered = text.replacen("SE*6*", "SE*7*", 1);
        assert_ne!(text, tampered);
        std::fs::write(&out, tampered).unwrap();

        let cli = Cli::try_parse_from(["x12gen", "verify", out_arg]).unwrap();
        assert!(run_command(cli).is_err());
    }

    #[test]
    fn unknown_type_fails() {
        let cli = Cli::try_parse_from(["x12gen", "generate", "-t", "123"]).unwrap();
        let err = run_command(cli).unwrap_err();
        assert!(err.to_string().contains("Supported"));
    }

    #[test]
    fn batch_writes_every_type() {
        let dir = tempfile::tempdir().unwrap();
        let dir_arg = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["x12gen", "batch", "-d", dir_arg, "--seed", "5"]).unwrap();
        run_command(cli).unwrap();
        for key in ["850", "810", "856", "997", "837", "835", "270"] {
            assert!(dir.path().join(format!("sample_{key}.edi")).exists());
        }
    }
}
