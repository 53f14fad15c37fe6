use campus_core::RenderEntry;
use campus_model::{CostResult, FieldId, Slide, ValidationResult};
use campus_page::format_amount;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CountdownReport, SimulationReport, ValidateReport};

pub fn print_validation(report: &ValidateReport) {
    println!("{}", validation_table(&report.result));
    if report.result.pass {
        println!("Application is valid.");
    } else {
        eprintln!(
            "Application rejected: {} field(s) need attention.",
            report.result.error_count()
        );
    }
}

pub fn print_cost(result: &CostResult) {
    println!("{}", cost_table(result));
}

pub fn print_countdown(report: &CountdownReport) {
    println!("Deadline: {}", report.deadline.format("%Y-%m-%d %H:%M:%S"));
    println!("Now:      {}", report.now.format("%Y-%m-%d %H:%M:%S"));
    println!("Days remaining: {}", report.days);
}

pub fn print_slides(slides: &[Slide]) {
    println!("{}", slides_table(slides));
}

pub fn print_simulation(report: &SimulationReport) {
    println!("{}", render_log_table(&report.log));
    println!(
        "Ran {} ms, {} render operations, slide {} showing.",
        report.duration_ms,
        report.log.len(),
        report.final_slide
    );
    if !report.rejected.is_empty() {
        eprintln!("Rejected events:");
        for rejected in &report.rejected {
            eprintln!("- at {} ms: {}", rejected.at_ms, rejected.error);
        }
    }
}

pub fn validation_table(result: &ValidationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for field in FieldId::ALL {
        let message = result.error(field);
        table.add_row(vec![
            Cell::new(field.label()),
            status_cell(message.is_none()),
            match message {
                Some(message) => Cell::new(message),
                None => dim_cell("-"),
            },
        ]);
    }
    table
}

pub fn cost_table(result: &CostResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Amount")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Annual tuition", result.annual_tuition),
        ("Scholarship reduction", result.scholarship_reduction),
        ("Registration fee", result.registration_fee),
        ("Materials fee", result.materials_fee),
    ];
    for (label, amount) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(format_amount(amount))]);
    }
    table.add_row(vec![
        Cell::new("Total")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format_amount(result.total)).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn slides_table(slides: &[Slide]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Title"),
        header_cell("Image"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, slide) in slides.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&slide.title),
            Cell::new(&slide.image),
        ]);
    }
    table
}

pub fn render_log_table(log: &[RenderEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("At (ms)"), header_cell("Operation")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in log {
        table.add_row(vec![Cell::new(entry.at_ms), Cell::new(entry.op.to_string())]);
    }
    table
}

/// One `"<ms> ms <operation>"` line per entry.
pub fn render_log_lines(log: &[RenderEntry]) -> Vec<String> {
    log.iter()
        .map(|entry| format!("{} ms {}", entry.at_ms, entry.op))
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("error")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
