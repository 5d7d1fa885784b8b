use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "treefill",
    about = "Populate a directory tree with a deterministic storage workload"
)]
pub struct Cli {
    /// Total bytes to write, with an optional k/m/g/t suffix (powers of 1024)
    #[arg(value_name = "SIZE", value_parser = parse_size)]
    pub size: u64,

    /// Destination directory (created if missing)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the resolved configuration without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse a size argument: a decimal byte count, optionally followed by a
/// case-insensitive `k`, `m`, `g` or `t` suffix multiplying by 1024^1..4.
pub fn parse_size(arg: &str) -> Result<u64, String> {
    let split = arg
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(arg.len());
    let (digits, suffix) = arg.split_at(split);

    let base: u64 = digits
        .parse()
        .map_err(|_| format!("unsupported size: \"{arg}\""))?;

    let multiplier: u64 = match suffix.to_ascii_lowercase().as_str() {
        "" => 1,
        "k" => 1 << 10,
        "m" => 1 << 20,
        "g" => 1 << 30,
        "t" => 1 << 40,
        _ => return Err(format!("unsupported size: \"{arg}\"")),
    };

    base.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: \"{arg}\""))
}

#[cfg(test)]
mod tests {
    use super::parse_size;

    #[test]
    fn plain_byte_counts() {
        assert_eq!(parse_size("0"), Ok(0));
        assert_eq!(parse_size("123"), Ok(123));
        assert_eq!(parse_size("3145728"), Ok(3 * 1024 * 1024));
    }

    #[test]
    fn suffixes_multiply_by_powers_of_1024() {
        assert_eq!(parse_size("10k"), Ok(10 * 1024));
        assert_eq!(parse_size("2m"), Ok(2 * 1024 * 1024));
        assert_eq!(parse_size("1g"), Ok(1024 * 1024 * 1024));
        assert_eq!(parse_size("1t"), Ok(1u64 << 40));
    }

    #[test]
    fn suffixes_are_case_insensitive() {
        assert_eq!(parse_size("10K"), parse_size("10k"));
        assert_eq!(parse_size("1G"), parse_size("1g"));
        assert_eq!(parse_size("1T"), parse_size("1t"));
    }

    #[test]
    fn malformed_sizes_are_rejected() {
        assert!(parse_size("").is_err());
        assert!(parse_size("k").is_err());
        assert!(parse_size("10q").is_err());
        assert!(parse_size("10kb").is_err());
        assert!(parse_size("-1").is_err());
        assert!(parse_size("1.5g").is_err());
    }

    #[test]
    fn overflow_is_a_usage_error() {
        assert!(parse_size("99999999999t").is_err());
        assert!(parse_size("18446744073709551616").is_err());
    }
}
