//! End-to-end batch conversion over scratch files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use snp_core::{CancelFlag, Cancellable, ConversionService, NoProgress, OUTPUT_ERROR_LABEL};
use snp_map::NotationMapper;
use snp_model::{ConversionOptions, LinkDirection, OUTPUT_COLUMNS};
use tempfile::TempDir;

/// B1 sweep across the downlink edges (2110-2170 MHz).
const B1_SWEEP: &str = "\
! bench sweep
# MHz S RI R 50
2100 0.1 0.0 1.0 0.0 0.01 0.0 0.2 0.0
2110 0.1 0.0 1.0 0.0 0.01 0.0 0.2 0.0
2140 0.1 0.0 2.0 0.0 0.01 0.0 0.2 0.0
2170 0.1 0.0 0.0 0.0 0.01 0.0 0.2 0.0
2180 0.1 0.0 1.0 0.0 0.01 0.0 0.2 0.0
";

const B41_SWEEP: &str = "\
# MHz S MA R 50
2496 0.1 0 1.0 0 0.01 0 0.2 0
2600 0.1 0 1.0 45 0.01 0 0.2 0
";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn read_records(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, OUTPUT_COLUMNS.map(String::from).to_vec());
    reader.records().map(Result::unwrap).collect()
}

#[test]
fn middle_failure_is_isolated() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(dir.path(), "X_ANT1_B1@1_(G0H).s2p", B1_SWEEP),
        write(dir.path(), "X_ANT1_B3@1_(G0H).s2p", "# MHz S RI\nnot data\n"),
        write(dir.path(), "X_ANT2_B41[CN]@3_(G1L).s2p", B41_SWEEP),
    ];
    let output = dir.path().join("out").join("result.csv");

    let mut progress = Vec::new();
    let result = ConversionService::default().convert(
        &files,
        &output,
        ConversionOptions::default(),
        None,
        &mut |current: usize, total: usize, name: &str| {
            progress.push((current, total, name.to_string()));
        },
    );

    assert!(result.success);
    assert!(!result.cancelled);
    assert_eq!(result.files_processed, 2);
    assert_eq!(result.total_files, 3);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].file, "X_ANT1_B3@1_(G0H).s2p");
    assert!(result.errors[0].error.contains("no valid data rows"));
    assert!((result.success_rate() - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(result.records.len(), 3);
    assert!(!result.records[1].success);

    assert_eq!(progress.len(), 3);
    assert_eq!(progress[1], (2, 3, "X_ANT1_B3@1_(G0H).s2p".to_string()));

    // B1 keeps 2110..=2170 (3 rows); B41 keeps both points.
    assert_eq!(result.rows_generated, 5);
    assert_eq!(result.output_path.as_deref(), Some(output.as_path()));
    assert_eq!(result.output_size, std::fs::metadata(&output).unwrap().len());

    let records = read_records(&output);
    assert_eq!(records.len(), 5);
    let freqs: Vec<f64> = records
        .iter()
        .map(|r| r.get(4).unwrap().parse().unwrap())
        .collect();
    assert_eq!(freqs, vec![2110.0, 2140.0, 2170.0, 2496.0, 2600.0]);

    let first = &records[0];
    assert_eq!(first.get(2), Some("B1"));
    assert_eq!(first.get(5), Some("S0706"));
    assert_eq!(first.get(10), Some("G0_H"));
    assert_eq!(first.get(14), Some(""));

    // |S21| = 0 at 2170 MHz leaves the gain cell empty.
    assert_eq!(records[2].get(6), Some(""));

    let b41 = &records[3];
    assert_eq!(b41.get(5), Some("S0808"));
    assert_eq!(b41.get(12), Some("RXOUT3"));
    assert_eq!(b41.get(13), Some("B41[CN]"));
}

#[test]
fn mapper_fills_nplexer_bank() {
    let dir = TempDir::new().unwrap();
    let files = vec![write(dir.path(), "X_ANT2_B41[CN]@3_(G1L).s2p", B41_SWEEP)];
    let output = dir.path().join("mapped.csv");

    let mut mapper = NotationMapper::new();
    mapper.set_mappings(BTreeMap::from([(
        "B41[CN]".to_string(),
        "34_39+41".to_string(),
    )]));

    let result = ConversionService::default().convert(
        &files,
        &output,
        ConversionOptions::default(),
        Some(&mapper),
        &mut NoProgress,
    );
    assert!(result.success);
    let records = read_records(&output);
    assert!(records.iter().all(|r| r.get(14) == Some("34_39+41")));
}

#[test]
fn full_sweep_keeps_every_row() {
    let dir = TempDir::new().unwrap();
    let files = vec![write(dir.path(), "X_ANT1_B1@1_(G0H).s2p", B1_SWEEP)];
    let output = dir.path().join("full.csv");

    let result = ConversionService::default().convert(
        &files,
        &output,
        ConversionOptions::full_sweep(),
        None,
        &mut NoProgress,
    );
    assert_eq!(result.rows_generated, 5);
}

#[test]
fn tx_direction_filters_to_uplink() {
    let dir = TempDir::new().unwrap();
    let files = vec![write(dir.path(), "X_ANT1_B1@1_(G0H).s2p", B1_SWEEP)];
    let output = dir.path().join("tx.csv");

    let result = ConversionService::default().convert(
        &files,
        &output,
        ConversionOptions::default().with_direction(LinkDirection::Tx),
        None,
        &mut NoProgress,
    );
    assert!(!result.success);
    assert_eq!(result.files_processed, 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].file, OUTPUT_ERROR_LABEL);
    assert!(!output.exists());
}

#[test]
fn all_files_failing_reports_output_error() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(dir.path(), "a.s2p", "garbage\n"),
        dir.path().join("missing.s2p"),
        write(dir.path(), "three.s3p", "# MHz S RI\n100 1 0\n"),
    ];
    let output = dir.path().join("none.csv");

    let result = ConversionService::default().convert(
        &files,
        &output,
        ConversionOptions::default(),
        None,
        &mut NoProgress,
    );
    assert!(!result.success);
    assert_eq!(result.files_processed, 0);
    assert_eq!(result.errors.len(), 4);
    assert_eq!(result.errors[3].file, OUTPUT_ERROR_LABEL);
    assert!(result.errors[1].error.contains("file not found"));
}

#[test]
fn two_port_check_rejects_one_port_files() {
    let dir = TempDir::new().unwrap();
    let files = vec![write(dir.path(), "X_ANT1_B1.s1p", "# MHz S RI\n2140 0.5 0\n")];
    let output = dir.path().join("one.csv");

    let result = ConversionService::default().convert(
        &files,
        &output,
        ConversionOptions::default(),
        None,
        &mut NoProgress,
    );
    assert_eq!(result.files_processed, 0);
    assert!(result.errors[0].error.contains("unsupported port count 1"));
}

#[test]
fn cancelled_batch_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(dir.path(), "X_ANT1_B1@1_(G0H).s2p", B1_SWEEP),
        write(dir.path(), "X_ANT2_B41[CN]@3_(G1L).s2p", B41_SWEEP),
    ];
    let output = dir.path().join("cancelled.csv");

    let flag = CancelFlag::new();
    let trigger = flag.clone();
    let mut observer = Cancellable::new(
        move |current: usize, _: usize, _: &str| {
            if current == 1 {
                trigger.cancel();
            }
        },
        flag,
    );

    let result = ConversionService::default().convert(
        &files,
        &output,
        ConversionOptions::default(),
        None,
        &mut observer,
    );
    assert!(result.cancelled);
    assert!(!result.success);
    assert_eq!(result.files_processed, 1);
    assert_eq!(result.rows_generated, 0);
    assert!(!output.exists());
}

#[test]
fn validate_sorts_files_into_valid_and_invalid() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "a.s2p", "12345");
    let other = write(dir.path(), "b.s4p", "123");
    let wrong = write(dir.path(), "notes.txt", "x");
    let missing = dir.path().join("missing.s2p");

    let report = ConversionService::default().validate(&[good.clone(), wrong, missing, other]);
    assert_eq!(report.file_count(), 2);
    assert_eq!(report.valid[0], good);
    assert_eq!(report.total_size, 8);
    assert_eq!(report.invalid.len(), 2);
    assert_eq!(report.invalid[0].file, "notes.txt");
    assert_eq!(report.invalid[0].reason, "Invalid SnP file extension");
    assert_eq!(report.invalid[1].reason, "File does not exist");
    assert!(!report.is_clean());
}
