//! Parsing of the engine's periodic status block.
//!
//! Status lines look like `Progress.......: 1200/5000 (24.00%)`: a dotted
//! label, a colon, then the value.

/// A recognised status line.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    /// `Status.........: Running`
    Status(String),
    /// `Progress.......: done/total (percent%)`
    Progress { done: u64, total: u64, percent: f64 },
    /// `Speed.#1.......: 1234.5 MH/s` in hashes per second.
    Speed { device: String, hashes_per_sec: u64 },
    /// `Recovered......: done/total (percent%) Digests`
    Recovered { done: u64, total: u64 },
    /// `Restore.Point..: current/total (percent%)`
    RestorePoint { current: u64, total: u64 },
}

/// Parse one polled stdout line.
pub fn parse_status_line(line: &str) -> Option<StatusLine> {
    let (label, value) = line.trim().split_once(':')?;
    let label = label.trim().trim_end_matches('.');
    let value = value.trim();

    match label {
        "Status" => Some(StatusLine::Status(value.to_string())),
        "Progress" => {
            let (done, total) = parse_fraction(value)?;
            Some(StatusLine::Progress {
                done,
                total,
                percent: parse_percent(value).unwrap_or(0.0),
            })
        }
        "Recovered" => {
            let (done, total) = parse_fraction(value)?;
            Some(StatusLine::Recovered { done, total })
        }
        "Restore.Point" => {
            let (current, total) = parse_fraction(value)?;
            Some(StatusLine::RestorePoint { current, total })
        }
        speed if speed.starts_with("Speed.") => Some(StatusLine::Speed {
            device: speed.trim_start_matches("Speed.").to_string(),
            hashes_per_sec: parse_speed(value)?,
        }),
        _ => None,
    }
}

fn parse_u64_clean(value: &str) -> Option<u64> {
    value.trim().replace(',', "").parse().ok()
}

fn parse_fraction(value: &str) -> Option<(u64, u64)> {
    let counts = value.split_whitespace().next()?;
    let (done, total) = counts.split_once('/')?;
    Some((parse_u64_clean(done)?, parse_u64_clean(total)?))
}

fn parse_percent(value: &str) -> Option<f64> {
    let start = value.find('(')? + 1;
    let end = value[start..].find('%')? + start;
    value[start..end].trim().parse().ok()
}

fn parse_speed(value: &str) -> Option<u64> {
    let mut parts = value.split_whitespace();
    let number: f64 = parts.next()?.parse().ok()?;
    let unit = parts.next().unwrap_or("H/s");
    let multiplier = match unit.chars().next() {
        Some('k') | Some('K') => 1_000.0,
        Some('M') => 1_000_000.0,
        Some('G') => 1_000_000_000.0,
        Some('T') => 1_000_000_000_000.0,
        _ => 1.0,
    };
    Some((number * multiplier).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_progress_with_percent() {
        assert_eq!(
            parse_status_line("Progress.......: 1,200/5,000 (24.00%)"),
            Some(StatusLine::Progress {
                done: 1200,
                total: 5000,
                percent: 24.0
            })
        );
    }

    #[test]
    fn parses_speed_units() {
        assert_eq!(
            parse_status_line("Speed.#1.........:  1234.5 MH/s (12.34ms)"),
            Some(StatusLine::Speed {
                device: "#1".into(),
                hashes_per_sec: 1_234_500_000
            })
        );
        assert_eq!(
            parse_status_line("Speed.GPU.#2...:   950 H/s"),
            Some(StatusLine::Speed {
                device: "GPU.#2".into(),
                hashes_per_sec: 950
            })
        );
    }

    #[test]
    fn parses_status_and_recovered() {
        assert_eq!(
            parse_status_line("Status.........: Exhausted"),
            Some(StatusLine::Status("Exhausted".into()))
        );
        assert_eq!(
            parse_status_line("Recovered......: 1/3 (33.33%) Digests"),
            Some(StatusLine::Recovered { done: 1, total: 3 })
        );
        assert_eq!(
            parse_status_line("Restore.Point..: 40/100 (40.00%)"),
            Some(StatusLine::RestorePoint {
                current: 40,
                total: 100
            })
        );
    }

    #[test]
    fn ignores_unrelated_lines() {
        assert_eq!(parse_status_line("Initializing device kernels"), None);
        assert_eq!(parse_status_line("Hash.Target....: hashes.txt"), None);
    }
}
