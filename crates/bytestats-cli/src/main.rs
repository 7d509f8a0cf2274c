use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bytestats::prelude::*;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Data set analyzed when no values are given.
const SAMPLE: [u8; 40] = [
    34, 201, 190, 154, 8, 194, 2, 6, 114, 88, 45, 76, 123, 87, 25, 23, 200, 122, 150, 90, 92, 87,
    177, 244, 201, 6, 12, 60, 8, 2, 5, 67, 7, 87, 250, 230, 99, 3, 100, 90,
];

/// bytestats — print an array, sort it, and summarize its statistics.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Values in 0..=255, separated by spaces or commas (default: built-in sample)
    #[arg(value_name = "VALUES", value_delimiter = ',', conflicts_with = "file")]
    values: Vec<u8>,

    /// Read values from a file (whitespace or comma separated)
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Values per listing line
    #[arg(long, default_value_t = 10)]
    columns: usize,

    /// Field width of each listed value
    #[arg(long, default_value_t = 3)]
    width: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let values = load_values(&cli)?;
    print!("{}", render(&cli, values)?);
    Ok(())
}

/// Resolve the data set from the file, the positional values, or the sample.
fn load_values(cli: &Cli) -> Result<Vec<u8>> {
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let values = parse_values(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!(path = %path.display(), count = values.len(), "loaded values from file");
        return Ok(values);
    }

    if cli.values.is_empty() {
        debug!(count = SAMPLE.len(), "using built-in sample");
        return Ok(SAMPLE.to_vec());
    }

    Ok(cli.values.clone())
}

/// Parse whitespace or comma separated byte values.
fn parse_values(text: &str) -> Result<Vec<u8>> {
    let values = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<u8>()
                .with_context(|| format!("value #{} ({token:?}) is not in 0..=255", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        bail!("no values found");
    }
    Ok(values)
}

/// Original listing, sorted listing, and statistics report.
fn render(cli: &Cli, mut data: Vec<u8>) -> Result<String> {
    let stats = ArrayStats::new()
        .columns(cli.columns)
        .width(cli.width)
        .build()
        .context("invalid listing options")?;

    info!(count = data.len(), "analyzing values");

    let mut out = String::new();
    writeln!(out, "Original Array:\n")?;
    writeln!(out, "{}", stats.listing(&data))?;
    writeln!(out, "\n")?;

    let outcome = stats.sort(&mut data);
    debug!(passes = outcome.passes, swaps = outcome.swaps, "sorted values");

    writeln!(out, "Sorted Array:\n")?;
    writeln!(out, "{}", stats.listing(&data))?;
    writeln!(out, "\n")?;

    let report = stats
        .summarize(&mut data)
        .context("failed to summarize values")?;
    write!(out, "{report}")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["bytestats"]);
        assert!(cli.values.is_empty());
        assert!(cli.file.is_none());
        assert_eq!(cli.columns, 10);
        assert_eq!(cli.width, 3);
    }

    #[test]
    fn cli_parses_comma_separated_values() {
        let cli = Cli::parse_from(["bytestats", "1,2,3", "4"]);
        assert_eq!(cli.values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn cli_rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["bytestats", "256"]).is_err());
    }

    #[test]
    fn cli_rejects_values_with_file() {
        assert!(Cli::try_parse_from(["bytestats", "1", "--file", "data.txt"]).is_err());
    }

    #[test]
    fn defaults_to_sample() {
        let cli = Cli::parse_from(["bytestats"]);
        assert_eq!(load_values(&cli).unwrap(), SAMPLE.to_vec());
    }

    #[test]
    fn parses_mixed_separators() {
        assert_eq!(parse_values("1, 2\n3\t4,,5").unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_bad_tokens() {
        let err = parse_values("1 2 300").unwrap_err();
        assert!(format!("{err:#}").contains("value #3"));
        assert!(parse_values(" , \n").is_err());
    }

    #[test]
    fn renders_sample_like_the_classic_program() {
        let cli = Cli::parse_from(["bytestats"]);
        let out = render(&cli, SAMPLE.to_vec()).unwrap();

        let expected = "Original Array:\n\n\
            [ 34, 201, 190, 154,   8, 194,   2,   6, 114,  88, \n  \
            45,  76, 123,  87,  25,  23, 200, 122, 150,  90, \n  \
            92,  87, 177, 244, 201,   6,  12,  60,   8,   2, \n   \
            5,  67,   7,  87, 250, 230,  99,   3, 100,  90]\n\n\n\
            Sorted Array:\n\n\
            [250, 244, 230, 201, 201, 200, 194, 190, 177, 154, \n \
            150, 123, 122, 114, 100,  99,  92,  90,  90,  88, \n  \
            87,  87,  87,  76,  67,  60,  45,  34,  25,  23, \n  \
            12,   8,   8,   7,   6,   6,   5,   3,   2,   2]\n\n\n\
            Here is a summary of statistics for the array:\n\
            Mean:    94\n\
            Median:  88\n\
            Maximum: 250\n\
            Minimum: 2\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn renders_custom_layout() {
        let cli = Cli::parse_from(["bytestats", "--columns", "2", "--width", "1", "3,1,2"]);
        let out = render(&cli, cli.values.clone()).unwrap();

        assert!(out.contains("[3, 1, \n 2]"));
        assert!(out.contains("[3, 2, \n 1]"));
        assert!(out.contains("Median:  2\n"));
    }

    #[test]
    fn rejects_invalid_layout() {
        let cli = Cli::parse_from(["bytestats", "--columns", "0"]);
        let err = render(&cli, SAMPLE.to_vec()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid columns"));
    }
}
