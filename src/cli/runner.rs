use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use platesim::generate::{generate_pairs, pairs_to_text};
use platesim::io::prompt_valid_string;
use platesim::io::writers::json::{batch_to_json, comparison_to_json};
use platesim::io::writers::text::{render_batch, render_comparison};
use platesim::io::writers::write_output;
use platesim::{ComparisonParams, OutputFormat, compare, compare_pairs_file, compare_validated};

use super::args::CliArgs;
use super::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Interactive,
    Single { first: String, second: String },
    Batch(PathBuf),
    Generate { count: usize, seed: Option<u64> },
}

fn select_mode(args: &CliArgs) -> Result<Mode, AppError> {
    let mut modes = Vec::new();
    if args.first.is_some() || args.second.is_some() {
        modes.push("--first/--second");
    }
    if args.pairs.is_some() {
        modes.push("--pairs");
    }
    if args.generate.is_some() {
        modes.push("--generate");
    }
    if modes.len() > 1 {
        return Err(AppError::ConflictingModes {
            modes: modes.join(", "),
        });
    }

    if let Some(path) = &args.pairs {
        return Ok(Mode::Batch(path.clone()));
    }
    if let Some(count) = args.generate {
        if count == 0 {
            return Err(AppError::ZeroCount);
        }
        return Ok(Mode::Generate {
            count,
            seed: args.seed,
        });
    }
    match (&args.first, &args.second) {
        (Some(first), Some(second)) => Ok(Mode::Single {
            first: first.clone(),
            second: second.clone(),
        }),
        (Some(_), None) => Err(AppError::MissingArgument {
            arg: "--second".to_string(),
        }),
        (None, Some(_)) => Err(AppError::MissingArgument {
            arg: "--first".to_string(),
        }),
        (None, None) => Ok(Mode::Interactive),
    }
}

fn resolve_params(args: &CliArgs) -> Result<ComparisonParams, AppError> {
    let mut params = match &args.config {
        Some(path) => ComparisonParams::from_json_file(path)?,
        None => ComparisonParams::default(),
    };
    if let Some(threshold) = args.threshold {
        params.threshold = threshold;
    }
    if let Some(min_len) = args.min_len {
        params.min_len = min_len;
    }
    if let Some(max_len) = args.max_len {
        params.max_len = max_len;
    }
    params.validate()?;
    Ok(params)
}

fn render_single(
    first: &str,
    second: &str,
    params: &ComparisonParams,
    format: OutputFormat,
    comparison: &platesim::Comparison,
) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => render_comparison(comparison),
        OutputFormat::Json => {
            let mut json = comparison_to_json(first, second, comparison, params.threshold)?;
            json.push('\n');
            json
        }
    })
}

fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    params: &ComparisonParams,
    format: OutputFormat,
    destination: Option<&Path>,
) -> Result<(), AppError> {
    writeln!(
        output,
        "String Similarity Checker ({}-{} characters)",
        params.min_len, params.max_len
    )?;
    let first = prompt_valid_string(
        input,
        output,
        "Enter first string: ",
        params.min_len,
        params.max_len,
    )?;
    let second = prompt_valid_string(
        input,
        output,
        "Enter second string: ",
        params.min_len,
        params.max_len,
    )?;

    let comparison = compare(&first, &second, params)?;
    let rendered = render_single(&first, &second, params, format, &comparison)?;
    match destination {
        Some(path) => write_output(Some(path), &rendered)?,
        None => {
            writeln!(output)?;
            output.write_all(rendered.as_bytes())?;
            output.flush()?;
        }
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let mode = select_mode(&args)?;
    let params = resolve_params(&args)?;
    let destination = args.output.as_deref();

    match mode {
        Mode::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(
                &mut stdin.lock(),
                &mut stdout.lock(),
                &params,
                args.format,
                destination,
            )?;
        }
        Mode::Single { first, second } => {
            let comparison = compare_validated(&first, &second, &params)?;
            let rendered = render_single(
                first.trim(),
                second.trim(),
                &params,
                args.format,
                &comparison,
            )?;
            write_output(destination, &rendered)?;
        }
        Mode::Batch(path) => {
            let report = compare_pairs_file(&path, &params, args.continue_on_error)?;
            let rendered = match args.format {
                OutputFormat::Text => render_batch(&report),
                OutputFormat::Json => {
                    let mut json = batch_to_json(&report)?;
                    json.push('\n');
                    json
                }
            };
            write_output(destination, &rendered)?;
            info!("Successfully compared pairs from {:?}", path);
        }
        Mode::Generate { count, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let pairs = generate_pairs(&mut rng, count);
            write_output(destination, &pairs_to_text(&pairs))?;
            info!("Generated {} pairs", pairs.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("platesim").chain(argv.iter().copied()))
    }

    #[test]
    fn mode_selection() {
        assert_eq!(select_mode(&parse(&[])).unwrap(), Mode::Interactive);
        assert_eq!(
            select_mode(&parse(&["-a", "ABCDEF", "-b", "ABCDEX"])).unwrap(),
            Mode::Single {
                first: "ABCDEF".to_string(),
                second: "ABCDEX".to_string()
            }
        );
        assert_eq!(
            select_mode(&parse(&["--generate", "3", "--seed", "9"])).unwrap(),
            Mode::Generate {
                count: 3,
                seed: Some(9)
            }
        );
        assert!(matches!(
            select_mode(&parse(&["--first", "ABCDEF"])),
            Err(AppError::MissingArgument { .. })
        ));
        assert!(matches!(
            select_mode(&parse(&["--pairs", "p.csv", "--generate", "2"])),
            Err(AppError::ConflictingModes { .. })
        ));
        assert!(matches!(
            select_mode(&parse(&["--generate", "0"])),
            Err(AppError::ZeroCount)
        ));
    }

    #[test]
    fn seed_requires_generate() {
        let err = CliArgs::try_parse_from(["platesim", "--seed", "9"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(CliArgs::try_parse_from(["platesim", "--generate", "2", "--seed", "9"]).is_ok());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{"threshold": 90.0, "min_len": 4}"#).unwrap();
        let config = path.to_str().unwrap();

        let params = resolve_params(&parse(&["--config", config, "--threshold", "60"])).unwrap();
        assert_eq!(params.threshold, 60.0);
        assert_eq!(params.min_len, 4);
        assert_eq!(params.max_len, 10);

        assert!(resolve_params(&parse(&["--min-len", "12"])).is_err());
    }

    #[test]
    fn interactive_session() {
        let mut input = Cursor::new("short\nABCDEF\nABCDEX\n");
        let mut output = Vec::new();
        run_interactive(
            &mut input,
            &mut output,
            &ComparisonParams::default(),
            OutputFormat::Text,
            None,
        )
        .unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("String Similarity Checker (6-10 characters)\n"));
        assert!(printed.contains("Error: Enter a string between 6 and 10 characters."));
        assert!(printed.contains("Match    : *****x\n"));
        assert!(printed.contains("Matches  : 5 / 6\n"));
        assert!(printed.ends_with("Similarity: 83.33%\n"));
    }
}
