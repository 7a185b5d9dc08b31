//! Touchstone v1 data reader.

use std::fmt;
use std::path::Path;

use num_complex::Complex64;
use serde::Serialize;
use snp_model::NetworkPoint;

use crate::discovery::snp_port_count;
use crate::error::{IngestError, Result};

use super::options::{OptionLine, ParameterType};

/// Header information gathered while reading a Touchstone file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TouchstoneHeader {
    pub ports: usize,
    pub options: OptionLine,
    /// `!` comment lines, without the leading marker.
    pub comments: Vec<String>,
}

/// One-line summary in option-line order, e.g. `2-port GHz S MA R 50`.
impl fmt::Display for TouchstoneHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = &self.options;
        write!(
            f,
            "{}-port {} {:?} {} R {}",
            self.ports, options.unit, options.parameter, options.format, options.impedance
        )
    }
}

/// A parsed Touchstone file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Touchstone {
    pub header: TouchstoneHeader,
    pub points: Vec<NetworkPoint>,
    /// Data lines (or partial points) that were dropped as malformed.
    pub skipped_lines: usize,
}

impl Touchstone {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest frequency in MHz.
    pub fn frequency_span(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.frequency_mhz;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (lo.min(p.frequency_mhz), hi.max(p.frequency_mhz))
        }))
    }
}

/// Read a Touchstone file from disk.
///
/// The port count comes from the file extension. A file with no usable data
/// point is an error.
pub fn read_touchstone(path: &Path) -> Result<Touchstone> {
    let ports = snp_port_count(path)?;
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let contents = String::from_utf8_lossy(&bytes);
    let touchstone = parse_touchstone(&contents, ports);

    if touchstone.is_empty() {
        return Err(IngestError::NoDataRows {
            path: path.to_path_buf(),
            skipped: touchstone.skipped_lines,
        });
    }

    tracing::debug!(
        path = %path.display(),
        ports,
        points = touchstone.len(),
        skipped = touchstone.skipped_lines,
        unit = %touchstone.header.options.unit,
        format = %touchstone.header.options.format,
        "read touchstone file"
    );

    Ok(touchstone)
}

/// Parse Touchstone text for a network with `ports` ports.
///
/// Malformed data is counted in `skipped_lines` and never aborts parsing.
pub fn parse_touchstone(contents: &str, ports: usize) -> Touchstone {
    let expected = 1 + 2 * ports * ports;
    let mut options: Option<OptionLine> = None;
    let mut comments = Vec::new();
    let mut points = Vec::new();
    let mut skipped_lines = 0;
    let mut pending: Vec<f64> = Vec::with_capacity(expected);

    for raw in contents.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(comment) = trimmed.strip_prefix('!') {
            comments.push(comment.trim().to_string());
            continue;
        }
        if trimmed.starts_with('[') {
            if trimmed.to_ascii_lowercase().starts_with("[end]") {
                break;
            }
            continue;
        }

        let line = strip_inline_comment(trimmed);
        if line.starts_with('#') {
            if options.is_some() {
                tracing::warn!(line = %line, "ignoring repeated option line");
                continue;
            }
            let (parsed, unrecognized) = OptionLine::parse(line);
            if !unrecognized.is_empty() {
                tracing::warn!(tokens = ?unrecognized, "unrecognized option line tokens, using defaults");
            }
            if parsed.parameter != ParameterType::S {
                tracing::warn!(parameter = ?parsed.parameter, "non S-parameter data treated as S-parameters");
            }
            options = Some(parsed);
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let Some(values) = parse_numbers(line) else {
            skipped_lines += 1;
            pending.clear();
            continue;
        };

        if ports <= 2 {
            if values.len() == expected {
                points.push(build_point(&values, ports, options.unwrap_or_default()));
            } else {
                skipped_lines += 1;
            }
            continue;
        }

        // Frequency plus value pairs makes a point's first line odd; wrapped
        // lines carry whole pairs only.
        let starts_point = values.len() % 2 == 1;
        if starts_point && !pending.is_empty() {
            skipped_lines += 1;
            pending.clear();
        } else if !starts_point && pending.is_empty() {
            skipped_lines += 1;
            continue;
        }

        pending.extend(values);
        if pending.len() == expected {
            points.push(build_point(&pending, ports, options.unwrap_or_default()));
            pending.clear();
        } else if pending.len() > expected {
            skipped_lines += 1;
            pending.clear();
        }
    }

    if !pending.is_empty() {
        skipped_lines += 1;
    }

    Touchstone {
        header: TouchstoneHeader {
            ports,
            options: options.unwrap_or_default(),
            comments,
        },
        points,
        skipped_lines,
    }
}

fn strip_inline_comment(line: &str) -> &str {
    match line.find('!') {
        Some(index) => line[..index].trim_end(),
        None => line,
    }
}

fn parse_numbers(line: &str) -> Option<Vec<f64>> {
    line.split_whitespace()
        .map(|token| token.parse::<f64>().ok())
        .collect()
}

/// `values` holds the frequency followed by `ports²` value pairs.
fn build_point(values: &[f64], ports: usize, options: OptionLine) -> NetworkPoint {
    let pairs: Vec<Complex64> = values[1..]
        .chunks_exact(2)
        .map(|pair| options.format.to_complex(pair[0], pair[1]))
        .collect();

    // Two-port files list S11 S21 S12 S22; store row-major.
    let matrix = if ports == 2 {
        vec![pairs[0], pairs[2], pairs[1], pairs[3]]
    } else {
        pairs
    };

    NetworkPoint::new(options.unit.to_mhz(values[0]), ports, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::touchstone::{DataFormat, FrequencyUnit};

    const TWO_PORT_RI: &str = "\
! measured on bench 3
# GHz S RI R 50
1.0 0.1 0.0 1.0 0.0 0.01 0.0 0.2 0.0
2.0 0.1 0.0 0.5 0.5 0.01 0.0 0.2 0.0 ! trailing comment
2.5 bad 0.0 0.5 0.5 0.01 0.0 0.2 0.0
3.0 0.1 0.0 0.5
";

    #[test]
    fn parses_two_port_and_drops_malformed_lines() {
        let ts = parse_touchstone(TWO_PORT_RI, 2);
        assert_eq!(ts.len(), 2);
        assert_eq!(ts.skipped_lines, 2);
        assert_eq!(ts.header.comments, vec!["measured on bench 3"]);
        assert_eq!(ts.header.options.unit, FrequencyUnit::GHz);

        let first = ts.points[0].as_two_port().expect("two-port");
        assert_eq!(first.frequency_mhz, 1000.0);
        assert_eq!(first.s21, Complex64::new(1.0, 0.0));
        assert_eq!(first.s12, Complex64::new(0.01, 0.0));
        assert_eq!(ts.frequency_span(), Some((1000.0, 2000.0)));
    }

    #[test]
    fn missing_option_line_uses_hz_and_ri() {
        let ts = parse_touchstone("1000000 0.5 0.0\n", 1);
        assert_eq!(ts.header.options, OptionLine::default());
        assert_eq!(ts.points[0].frequency_mhz, 1.0);
        assert_eq!(ts.points[0].s(1, 1), Some(Complex64::new(0.5, 0.0)));
    }

    #[test]
    fn second_option_line_is_ignored() {
        let ts = parse_touchstone("# MHz S DB\n# GHz S RI\n100 0 0\n", 1);
        assert_eq!(ts.header.options.unit, FrequencyUnit::MHz);
        assert_eq!(ts.header.options.format, DataFormat::DbAngle);
        assert!((ts.points[0].values[0].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn three_port_points_may_wrap_lines() {
        let text = "\
# MHz S RI
100 1 0 2 0 3 0
    4 0 5 0 6 0
    7 0 8 0 9 0
200 1 0 2 0 3 0
    x
    4 0 5 0 6 0
";
        let ts = parse_touchstone(text, 3);
        assert_eq!(ts.len(), 1);
        let point = &ts.points[0];
        assert_eq!(point.s(1, 2), Some(Complex64::new(2.0, 0.0)));
        assert_eq!(point.s(2, 1), Some(Complex64::new(4.0, 0.0)));
        assert_eq!(point.s(3, 3), Some(Complex64::new(9.0, 0.0)));
        assert!(ts.skipped_lines >= 2);
    }

    #[test]
    fn malformed_line_drops_rest_of_wrapped_point() {
        let text = "\
# MHz S RI
100 1 0 2 0 3 0
    x
    7 0 8 0 9 0
    7 0 8 0 9 0
200 1 0 2 0 3 0
    4 0 5 0 6 0
    7 0 8 0 9 0
";
        let ts = parse_touchstone(text, 3);
        let freqs: Vec<f64> = ts.points.iter().map(|p| p.frequency_mhz).collect();
        assert_eq!(freqs, vec![200.0]);
        assert_eq!(ts.skipped_lines, 3);
    }

    #[test]
    fn truncated_wrapped_point_is_dropped() {
        let text = "\
# MHz S RI
100 1 0 2 0 3 0
    4 0 5 0 6 0
200 1 0 2 0 3 0
    4 0 5 0 6 0
    7 0 8 0 9 0
";
        let ts = parse_touchstone(text, 3);
        assert_eq!(ts.len(), 1);
        assert_eq!(ts.points[0].frequency_mhz, 200.0);
        assert_eq!(ts.skipped_lines, 1);
    }

    #[test]
    fn stops_at_end_keyword() {
        let text = "# MHz S RI\n[Number of Ports] 1\n100 1 0\n[End]\n200 1 0\n";
        let ts = parse_touchstone(text, 1);
        assert_eq!(ts.len(), 1);
    }
}
