use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use radix_converter::domain::{validate_base, ConverterConfig, DEFAULT_SCALE, MAX_FRACTION_DIGITS};
use radix_converter::interfaces::LoggingEventHandler;
use radix_converter::numeric::DECIMAL128_PRECISION;
use radix_converter::prelude::*;

/// radix-converter converts numbers between bases 0 to 36, exactly.
///
/// Without a number it starts the interactive calculator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base of NUMBER (one-shot mode).
    #[arg(long, requires_all = ["to", "number"])]
    from: Option<i64>,

    /// Base to convert NUMBER to (one-shot mode).
    #[arg(long, requires_all = ["from", "number"])]
    to: Option<i64>,

    /// Number to convert, e.g. `ff` or `1010.01`.
    #[arg(requires_all = ["from", "to"])]
    number: Option<String>,

    /// Fractional digits shown in results (truncated or zero-padded).
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: usize,

    /// Show results exactly as converted, without fixing the fractional width.
    #[arg(long, conflicts_with = "scale")]
    raw: bool,

    /// Maximum fractional digits produced for non-terminating expansions.
    #[arg(long, default_value_t = MAX_FRACTION_DIGITS)]
    max_fraction_digits: usize,

    /// Significant digits used for fractional digits when converting to decimal.
    #[arg(long, default_value_t = DECIMAL128_PRECISION)]
    precision: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Converter configuration assembled from the display and precision flags.
    fn config(&self) -> anyhow::Result<ConverterConfig> {
        let config = ConverterConfig::interactive()
            .with_max_fraction_digits(self.max_fraction_digits)
            .with_division_precision(self.precision);
        let config = if self.raw {
            config.without_rounding()
        } else {
            config.with_scale(self.scale)
        };
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbosity: u8) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// One-shot conversion when a number is given, otherwise the interactive
/// calculator over `input`.
fn run<R: BufRead, W: Write>(args: Args, input: R, mut output: W) -> anyhow::Result<()> {
    let converter = Converter::new(args.config()?, Arc::new(LoggingEventHandler));

    match (args.from, args.to, args.number) {
        (Some(from), Some(to), Some(number)) => {
            let (source_base, target_base) = (validate_base(from)?, validate_base(to)?);
            let result = convert_numeral(&converter, &number, source_base, target_base)
                .with_context(|| {
                    format!("failed to convert '{number}' from base {from} to base {to}")
                })?;
            writeln!(output, "{result}")?;
        },
        (None, None, None) => {
            tracing::debug!("Starting interactive session");
            Session::new(input, output, converter).run()?;
        },
        _ => anyhow::bail!("one-shot conversion needs --from, --to and a number"),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    #[cfg(feature = "logging")]
    init_logging(args.verbose);

    run(args, io::stdin().lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_converter::domain::MAX_DIVISION_PRECISION;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("radix-converter").chain(args.iter().copied()))
    }

    fn run_with(args: &[&str], input: &str) -> anyhow::Result<String> {
        let mut output = Vec::new();
        run(parse(args)?, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output)?)
    }

    #[test]
    fn test_one_shot_conversion() {
        assert_eq!(run_with(&["--from", "16", "--to", "10", "FF"], "").unwrap(), "255\n");
        assert_eq!(run_with(&["--from", "2", "--to", "10", "0.1"], "").unwrap(), "0.50000\n");
        assert_eq!(
            run_with(&["--raw", "--from", "2", "--to", "10", "0.1"], "").unwrap(),
            "0.5\n"
        );
    }

    #[test]
    fn test_display_flags() {
        let config = parse(&[]).unwrap().config().unwrap();
        assert_eq!(config, ConverterConfig::interactive());

        let config = parse(&["--scale", "2"]).unwrap().config().unwrap();
        assert_eq!(config.scale, Some(2));

        let config = parse(&["--raw"]).unwrap().config().unwrap();
        assert_eq!(config.scale, None);

        let config = parse(&["--max-fraction-digits", "8", "--precision", "50"])
            .unwrap()
            .config()
            .unwrap();
        assert_eq!(config.max_fraction_digits, 8);
        assert_eq!(config.division_precision, 50);

        assert!(parse(&["--raw", "--scale", "2"]).is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse(&["--precision", "0"]).unwrap().config().is_err());
        assert!(parse(&["--precision", "4294967295"]).unwrap().config().is_err());
        let limit = MAX_DIVISION_PRECISION.to_string();
        assert!(parse(&["--precision", limit.as_str()]).unwrap().config().is_ok());
        assert!(parse(&["--max-fraction-digits", "0"]).unwrap().config().is_err());
    }

    #[test]
    fn test_bases_out_of_range() {
        let error = run_with(&["--from", "40", "--to", "10", "1"], "").unwrap_err();
        assert!(error.to_string().contains("40"));
        assert!(run_with(&["--from", "10", "--to", "-1", "1"], "").is_err());
    }

    #[test]
    fn test_conversion_errors_carry_context() {
        let error = run_with(&["--from", "2", "--to", "10", "12"], "").unwrap_err();
        assert_eq!(error.to_string(), "failed to convert '12' from base 2 to base 10");
    }

    #[test]
    fn test_partial_one_shot_arguments() {
        assert!(parse(&["--from", "16"]).is_err());
        assert!(parse(&["--from", "16", "--to", "10"]).is_err());
        assert!(parse(&["FF"]).is_err());

        // Assembled without the parser's argument checks
        let mut args = parse(&[]).unwrap();
        args.from = Some(16);
        let error = run(args, "".as_bytes(), Vec::new()).unwrap_err();
        assert_eq!(error.to_string(), "one-shot conversion needs --from, --to and a number");
    }

    #[test]
    fn test_interactive_mode_reads_input() {
        let transcript = run_with(&[], "16 10\nFF\n/exit\n").unwrap();
        assert!(transcript.contains("Conversion result: 255"));
    }
}
