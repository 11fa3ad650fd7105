use anyhow::{Context, Result, ensure};

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Resolves a human-entered size such as `"700M"` or `"4700000"` into a byte
/// count. Recognized suffixes: K, M, G (case-insensitive, powers of 1024).
pub fn parse_size(input: &str) -> Result<u64> {
    let input = input.trim();
    let (digits, multiplier) = match input.chars().last() {
        Some('k') | Some('K') => (&input[..input.len() - 1], KB),
        Some('m') | Some('M') => (&input[..input.len() - 1], MB),
        Some('g') | Some('G') => (&input[..input.len() - 1], GB),
        _ => (input, 1),
    };
    let value: u64 = digits
        .parse()
        .with_context(|| format!("invalid size: '{input}'"))?;
    let bytes = value
        .checked_mul(multiplier)
        .with_context(|| format!("size out of range: '{input}'"))?;
    ensure!(bytes > 0, "size must be positive: '{input}'");
    Ok(bytes)
}

/// Renders a byte count for human consumption, e.g. `"1.50K"`, `"700.00M"`.
/// Plain bytes are printed without decimals.
pub fn num_to_human(num: u64) -> String {
    if num > GB {
        format!("{:.2}G", num as f64 / GB as f64)
    } else if num > MB {
        format!("{:.2}M", num as f64 / MB as f64)
    } else if num > KB {
        format!("{:.2}K", num as f64 / KB as f64)
    } else {
        format!("{num}B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("500", 500; "plain bytes")]
    #[test_case("2K", 2048; "kilobytes")]
    #[test_case("2k", 2048; "lowercase kilobytes")]
    #[test_case("3M", 3 * 1024 * 1024; "megabytes")]
    #[test_case("1G", 1024 * 1024 * 1024; "gigabytes")]
    #[test_case(" 700m ", 700 * 1024 * 1024; "whitespace and lowercase")]
    fn parse_size_resolves_suffixes(input: &str, expected: u64) {
        assert_eq!(parse_size(input).unwrap(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("abc"; "not a number")]
    #[test_case("0"; "zero")]
    #[test_case("0K"; "zero with suffix")]
    #[test_case("12T"; "unknown suffix")]
    #[test_case("99999999999999999999G"; "out of range")]
    fn parse_size_rejects_invalid_input(input: &str) {
        assert!(parse_size(input).is_err());
    }

    #[test_case(0, "0B")]
    #[test_case(512, "512B")]
    #[test_case(1024, "1024B"; "exactly one kilobyte stays in bytes")]
    #[test_case(1536, "1.50K")]
    #[test_case(5 * 1024 * 1024, "5.00M")]
    #[test_case(3 * 1024 * 1024 * 1024 / 2, "1.50G")]
    fn num_to_human_formats(num: u64, expected: &str) {
        assert_eq!(num_to_human(num), expected);
    }
}
