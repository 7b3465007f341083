use comfy_table::{Attribute, Cell, Color, Row, Table};

#[derive(Debug, Clone)]
pub struct ViewDirective {
    pub source: String,
    pub letter: char,
    pub repeat: usize,
    pub renderer: String,
    pub is_literal: bool,
}

#[derive(Debug, Clone)]
pub struct ViewZone {
    pub name: String,
    pub offset: String,
    pub local_time: String,
}

pub fn display_directives(directives: &[ViewDirective]) {
    if directives.is_empty() {
        println!("Empty pattern: nothing will be rendered.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Run", "Letter", "Repeat", "Renders as"]);

    for (index, directive) in directives.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));
        row.add_cell(Cell::new(format!("{:?}", directive.source)));
        row.add_cell(Cell::new(directive.letter));
        row.add_cell(Cell::new(directive.repeat));

        let renderer_cell = if directive.is_literal {
            Cell::new(&directive.renderer).fg(Color::DarkGrey)
        } else {
            Cell::new(&directive.renderer)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        };
        row.add_cell(renderer_cell);

        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_zones(zones: &[ViewZone]) {
    if zones.is_empty() {
        println!("No time zones found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Zone", "Offset", "Local time"]);

    for zone in zones {
        let offset_color = if zone.offset == "Z" {
            Color::Cyan
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(&zone.name),
            Cell::new(&zone.offset).fg(offset_color),
            Cell::new(&zone.local_time),
        ]);
    }

    println!("{table}");
}
