mod data;
mod error;
mod term;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{hit_header, render, Event, Key, RenderResult, SortMarker, Table};
use tablesort::Sorter;

use crate::error::AppError;
use crate::term::Terminal;

const HELP: &str = "Click a header to sort; click it again to reverse. Press q to quit.";

fn main() {
    let log_file = File::create("tablesort-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

fn run() -> Result<(), AppError> {
    let planets = data::load_planets()?;
    let mut sorter = Sorter::bind(data::planet_table(&planets)).with_initial_column(0);
    mark_active(&mut sorter, SortMarker::Ascending);

    let mut terminal = Terminal::new()?;
    let mut view = draw(&mut terminal, &sorter)?;

    loop {
        for raw in terminal.poll(None)? {
            let Some(event) = Event::from_crossterm(raw) else {
                continue;
            };

            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => {
                    return Ok(());
                }
                Event::Click { x, y, .. } => {
                    let Some(id) = hit_header(&view.regions, x, y) else {
                        continue;
                    };
                    if let Some(outcome) = sorter.trigger(&id) {
                        mark_active(&mut sorter, outcome.direction.into());
                        view = draw(&mut terminal, &sorter)?;
                    }
                }
                Event::Resize { .. } => {
                    view = draw(&mut terminal, &sorter)?;
                }
                _ => {}
            }
        }
    }
}

/// Put the direction marker on the active column's header, clearing the
/// others.
fn mark_active(sorter: &mut Sorter<Table>, marker: SortMarker) {
    let Some(column) = sorter.active_column() else {
        return;
    };
    let Some(id) = sorter.header_at(column).map(|header| header.id.clone()) else {
        return;
    };
    if let Some(table) = sorter.table_mut() {
        table.set_marker(&id, marker);
    }
}

fn draw(terminal: &mut Terminal, sorter: &Sorter<Table>) -> Result<RenderResult, AppError> {
    let view = sorter.table().map(render).unwrap_or_default();

    let mut lines = view.lines.clone();
    lines.push(String::new());
    lines.push(HELP.to_string());
    terminal.draw(&lines)?;

    Ok(view)
}
