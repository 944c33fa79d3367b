//! Embedded sample dataset and demo table construction.

use serde::Deserialize;
use tabledom::{Element, HeaderCell, Table};
use tablesort::KIND_ATTR;

const PLANETS_JSON: &str = r#"[
  {"name": "Neptune", "diameter_km": 49244, "moons": 16, "info": "facts/neptune"},
  {"name": "Mercury", "diameter_km": 4879, "moons": 0, "info": "facts/mercury"},
  {"name": "Saturn", "diameter_km": 116460, "moons": 146, "info": "facts/saturn"},
  {"name": "Earth", "diameter_km": 12742, "moons": 1, "info": "facts/earth"},
  {"name": "Jupiter", "diameter_km": 139820, "moons": 95, "info": "facts/jupiter"},
  {"name": "Venus", "diameter_km": 12104, "moons": 0, "info": "facts/venus"},
  {"name": "Mars", "diameter_km": 6779, "moons": 2, "info": "facts/mars"},
  {"name": "Uranus", "diameter_km": 50724, "moons": 28, "info": "facts/uranus"}
]"#;

#[derive(Debug, Clone, Deserialize)]
pub struct Planet {
    pub name: String,
    pub diameter_km: u32,
    pub moons: u32,
    pub info: String,
}

pub fn load_planets() -> Result<Vec<Planet>, serde_json::Error> {
    serde_json::from_str(PLANETS_JSON)
}

/// Build the demo table: a text column, a declared-numeric column, a column
/// left to inference, and a link column.
pub fn planet_table(planets: &[Planet]) -> Table {
    let mut table = Table::new()
        .header(HeaderCell::new(Element::text("Planet").id("planet")))
        .header(HeaderCell::new(
            Element::text("Diameter (km)")
                .id("diameter")
                .data(KIND_ATTR, "numeric"),
        ))
        .header(HeaderCell::new(Element::text("Moons").id("moons")))
        .header(HeaderCell::new(
            Element::text("Info").id("info").data(KIND_ATTR, "link"),
        ));

    for planet in planets {
        table = table.row(
            Element::node()
                .child(Element::text(planet.name.as_str()))
                .child(Element::text(planet.diameter_km.to_string()))
                .child(Element::text(planet.moons.to_string()))
                .child(Element::node().child(Element::text(planet.info.as_str()))),
        );
    }

    table
}
