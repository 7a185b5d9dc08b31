//! Terminal tables for command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use snp_cli::history::HistoryEntry;
use snp_map::{LoadReport, NotationMapper};
use snp_model::{ConversionResult, ValidationReport};
use snp_standards::BandTable;

pub fn print_conversion_summary(result: &ConversionResult) {
    if let Some(path) = &result.output_path {
        println!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);

    for record in &result.records {
        let status = if record.success {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new("failed")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        };
        let rows = if record.success {
            Cell::new(record.rows)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![Cell::new(&record.file), status, rows]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{}/{} ({:.1}%)",
            result.files_processed,
            result.total_files,
            result.success_rate()
        ))
        .add_attribute(Attribute::Bold),
        Cell::new(result.rows_generated).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let status = if result.cancelled {
        "CANCELLED"
    } else if result.success {
        "SUCCESS"
    } else {
        "FAILED"
    };
    println!(
        "{status}: {} rows, {:.1} KB written",
        result.rows_generated,
        result.output_size_kb()
    );

    if result.has_errors() {
        eprintln!();
        eprintln!("Errors:");
        for issue in &result.errors {
            eprintln!("- {}: {}", issue.file, issue.error);
        }
    }
}

pub fn print_validation(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Status")]);
    apply_table_style(&mut table);

    for path in &report.valid {
        table.add_row(vec![
            Cell::new(path.display()),
            Cell::new("valid").fg(Color::Green),
        ]);
    }
    for invalid in &report.invalid {
        table.add_row(vec![
            Cell::new(&invalid.file),
            Cell::new(&invalid.reason).fg(Color::Red),
        ]);
    }
    println!("{table}");
    println!(
        "{} valid, {} invalid, {:.2} MB total",
        report.file_count(),
        report.invalid.len(),
        report.total_size_mb()
    );
}

pub fn print_bands(bands: &BandTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Band"),
        header_cell("Duplex"),
        header_cell("Uplink"),
        header_cell("Downlink"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);

    for band in bands.all() {
        let uplink = match band.uplink {
            Some(range) => Cell::new(range),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&band.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(band.duplex),
            uplink,
            Cell::new(band.downlink),
        ]);
    }
    println!("{table}");
    println!("{} bands", bands.len());
}

pub fn print_mapping(report: &LoadReport, mapper: &NotationMapper) {
    println!("{report}");
    if let Some(warning) = &report.version_warning {
        eprintln!("warning: {warning}");
    }
    let metadata = mapper.metadata();
    if !metadata.project.is_empty() {
        println!("Project: {}", metadata.project);
    }
    if !metadata.description.is_empty() {
        println!("Description: {}", metadata.description);
    }
    if !metadata.created_date.is_empty() {
        println!("Created: {}", metadata.created_date);
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Original"), header_cell("Mapped")]);
    apply_table_style(&mut table);
    for (original, mapped) in mapper.mappings() {
        table.add_row(vec![Cell::new(original), Cell::new(mapped)]);
    }
    println!("{table}");
}

pub fn print_history<'a>(entries: impl Iterator<Item = &'a HistoryEntry>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Time (UTC)"),
        header_cell("Status"),
        header_cell("Files"),
        header_cell("Rows"),
        header_cell("Size (KB)"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut shown = 0usize;
    for entry in entries {
        shown += 1;
        let status = if entry.success {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new("failed").fg(Color::Red)
        };
        let output = match &entry.output_path {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(entry.timestamp.format("%Y-%m-%d %H:%M:%S")),
            status,
            Cell::new(format!("{}/{}", entry.files_processed, entry.total_files)),
            Cell::new(entry.rows_generated),
            Cell::new(format!("{:.1}", entry.output_size_kb)),
            output,
        ]);
    }

    if shown == 0 {
        println!("No conversions recorded.");
    } else {
        println!("{table}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
