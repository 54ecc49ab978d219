//! # morse_cli Statistics Query
//!
//! Reads integer statistics from the plain-text output of
//! `morse_cli -i <iface> stats -u`, which prints one `key: value` pair per
//! line. The caller lists the keys it wants as [`StatSlot`]s and each slot
//! receives the value of the matching line.
//!
//! Only flat integer statistics are supported; nested JSON stats are not
//! visible in the plain-text output.

use log::debug;
use nom::{
    character::complete::{digit1, multispace0, one_of},
    combinator::{opt, recognize},
    sequence::{pair, preceded},
    IResult,
};

use crate::config::HostConfig;
use crate::error::HalowError;

/// A requested statistic and the value found for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSlot<'a> {
    pub key: &'a str,
    pub value: Option<i64>,
}

impl<'a> StatSlot<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { key, value: None }
    }
}

/// Split a `key: value` line.
///
/// Leading colons are skipped, the key runs to the next colon, and the
/// value is everything after it up to the end of the line. Lines without a
/// key or a value yield `None`.
pub fn parse_stat_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start_matches(|c: char| c == ':' || c == '\n');
    let key_end = rest.find(|c: char| c == ':' || c == '\n').unwrap_or(rest.len());
    let key = &rest[..key_end];
    if key.is_empty() {
        return None;
    }

    let after = rest.get(key_end + 1..).unwrap_or("").trim_start_matches('\n');
    let value = after.split('\n').next().unwrap_or("");
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn int_prefix(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize(pair(opt(one_of("+-")), digit1)))(input)
}

/// Leading decimal integer of `s`, or 0 if there is none.
pub fn parse_int_prefix(s: &str) -> i64 {
    int_prefix(s)
        .ok()
        .and_then(|(_, digits)| digits.parse().ok())
        .unwrap_or(0)
}

/// Fill `slots` from `morse_cli` stats output.
///
/// Each line updates the first slot whose key matches exactly. Returns the
/// number of values assigned.
pub fn apply_stats(output: &str, slots: &mut [StatSlot<'_>]) -> usize {
    let mut found = 0;
    for line in output.lines() {
        let Some((key, value)) = parse_stat_line(line) else {
            continue;
        };
        if let Some(slot) = slots.iter_mut().find(|slot| slot.key == key) {
            slot.value = Some(parse_int_prefix(value));
            found += 1;
        }
    }
    found
}

/// Runs `morse_cli` against an interface
#[derive(Debug, Clone)]
pub struct MorseCli {
    program: String,
}

impl MorseCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self::new(config.morse_cli.clone())
    }

    /// Query statistics for `ifname`, filling `slots`.
    ///
    /// Returns the number of values found. The exit status of the tool is
    /// not checked; whatever it printed is parsed.
    pub async fn query(&self, ifname: &str, slots: &mut [StatSlot<'_>]) -> Result<usize, HalowError> {
        let output = tokio::process::Command::new(&self.program)
            .args(["-i", ifname, "stats", "-u"])
            .output()
            .await
            .map_err(|e| HalowError::CommandFailed(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            debug!("{} exited with {}", self.program, output.status);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(apply_stats(&stdout, slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stat_line() {
        assert_eq!(parse_stat_line("noise: -92"), Some(("noise", " -92")));
        assert_eq!(parse_stat_line("noise:-92\n"), Some(("noise", "-92")));
        assert_eq!(parse_stat_line("::rx_frames: 10"), Some(("rx_frames", " 10")));
        assert_eq!(parse_stat_line("a: b: c"), Some(("a", " b: c")));
        assert_eq!(parse_stat_line("header"), None);
        assert_eq!(parse_stat_line("key:"), None);
        assert_eq!(parse_stat_line(":"), None);
        assert_eq!(parse_stat_line(""), None);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix(" -92"), -92);
        assert_eq!(parse_int_prefix("+7 dB"), 7);
        assert_eq!(parse_int_prefix("42abc"), 42);
        assert_eq!(parse_int_prefix("abc"), 0);
        assert_eq!(parse_int_prefix(""), 0);
        assert_eq!(parse_int_prefix("- 5"), 0);
    }

    #[test]
    fn test_apply_stats() {
        let output = "PHY stats\nnoise: -95\nrx_frames: 1200\ntx_frames: 800\nbogus line\n";
        let mut slots = [StatSlot::new("noise"), StatSlot::new("tx_frames"), StatSlot::new("missing")];
        assert_eq!(apply_stats(output, &mut slots), 2);
        assert_eq!(slots[0].value, Some(-95));
        assert_eq!(slots[1].value, Some(800));
        assert_eq!(slots[2].value, None);
    }

    #[test]
    fn test_apply_stats_repeated_key_counts_each() {
        let output = "noise: -90\nnoise: -91\n";
        let mut slots = [StatSlot::new("noise")];
        assert_eq!(apply_stats(output, &mut slots), 2);
        assert_eq!(slots[0].value, Some(-91));
    }

    #[tokio::test]
    async fn test_query_missing_program() {
        let cli = MorseCli::new("/nonexistent/bin/morse_cli");
        let mut slots = [StatSlot::new("noise")];
        let err = cli.query("wlan0", &mut slots).await.unwrap_err();
        assert!(matches!(err, HalowError::CommandFailed(_)));
        assert_eq!(slots[0].value, None);
    }
}
