use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use seatforge::api::SeatedTable;
use seatforge::problem::Problem;
use seatforge::scorer::ScoreSummary;

pub fn print_headline(summary: &ScoreSummary) {
    println!(
        "Found a solution where {} people are given a preference (i.e. {} people have not been allocated at least one of their preferences). {} preferences are given in total",
        summary.satisfied_people, summary.unsatisfied_people, summary.satisfied_preferences
    );
    if summary.companion_violations > 0 {
        println!(
            "⚠️  {} people are not seated with their companion.",
            summary.companion_violations
        );
    }
}

pub fn print_tables(tables: &[SeatedTable]) {
    for t in tables {
        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Seat").add_attribute(Attribute::Bold),
            Cell::new(format!("Table {} (capacity {})", t.index, t.capacity))
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
        ]);
        if let Some(col) = table.column_mut(0) {
            col.set_cell_alignment(CellAlignment::Right);
        }
        for (seat, name) in t.people.iter().enumerate() {
            table.add_row(vec![Cell::new(seat), Cell::new(name)]);
        }
        println!("\n{}", table);
    }
}

pub fn print_problem_overview(problem: &Problem) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("People").add_attribute(Attribute::Bold),
        Cell::new(problem.headcount()),
    ]);
    table.add_row(vec![
        Cell::new("Tables").add_attribute(Attribute::Bold),
        Cell::new(problem.tables.len()),
    ]);
    table.add_row(vec![
        Cell::new("Seats").add_attribute(Attribute::Bold),
        Cell::new(problem.total_capacity()),
    ]);
    table.add_row(vec![
        Cell::new("Preferences").add_attribute(Attribute::Bold),
        Cell::new(problem.total_preferences()),
    ]);
    table.add_row(vec![
        Cell::new("Companion pairs").add_attribute(Attribute::Bold),
        Cell::new(problem.companions.len()),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}
