use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{render, Element, HeaderCell, SortMarker, Table};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("render_table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut table = sample_table();

    println!("unsorted:");
    for line in &render(&table).lines {
        println!("{line}");
    }

    // Reorder by hand and mark the first column ascending.
    table.exchange(0, 1);
    table.exchange(1, 2);
    let first = table.headers[0].element.id.clone();
    table.set_marker(&first, SortMarker::Ascending);
    log::debug!("[demo] marked header {first}");

    println!();
    println!("by name:");
    let result = render(&table);
    for line in &result.lines {
        println!("{line}");
    }

    for region in &result.regions {
        log::debug!("[demo] header {} at {:?}", region.id, region.rect);
    }

    Ok(())
}

fn sample_table() -> Table {
    Table::new()
        .header(HeaderCell::new(Element::text("Name").id("name")))
        .header(HeaderCell::new(Element::text("Diameter (km)").id("diameter")))
        .header(HeaderCell::new(Element::text("Moons").id("moons")))
        .row(planet("Neptune", "49244", "14"))
        .row(planet("Earth", "12742", "1"))
        .row(planet("Mars", "6779", "2"))
}

fn planet(name: &str, diameter: &str, moons: &str) -> Element {
    Element::node()
        .child(Element::text(name))
        .child(Element::text(diameter))
        .child(Element::text(moons))
}
