use tabledom::render::column_widths;
use tabledom::{render, Element, HeaderCell, Rect, SortMarker, Table};

fn text_row(cells: &[&str]) -> Element {
    let mut row = Element::node();
    for cell in cells {
        row = row.child(Element::text(*cell));
    }
    row
}

fn two_column_table() -> Table {
    Table::new()
        .header(HeaderCell::new(Element::text("Name").id("name")))
        .header(HeaderCell::new(Element::text("Size").id("size")))
        .row(text_row(&["Ant", "10"]))
        .row(text_row(&["Bee", "2"]))
}

// ============================================================================
// Column widths
// ============================================================================

#[test]
fn test_widths_fit_widest_cell() {
    let table = Table::new()
        .header(HeaderCell::new(Element::text("N").id("n")))
        .row(text_row(&["longer"]))
        .row(text_row(&["x"]));

    assert_eq!(column_widths(&table), vec![6]);
}

#[test]
fn test_widths_cover_header_label() {
    let table = two_column_table();
    // Both labels are wider than any cell below them.
    assert_eq!(column_widths(&table), vec![4, 4]);
}

#[test]
fn test_widths_account_for_marker_suffix() {
    let mut table = two_column_table();
    table.set_marker("size", SortMarker::Descending);

    // "Size ▼" is six columns wide.
    assert_eq!(column_widths(&table), vec![4, 6]);
}

#[test]
fn test_spanned_header_widens_last_column() {
    let table = Table::new()
        .header(HeaderCell::new(Element::text("A very long heading").id("wide")).span(2))
        .row(text_row(&["a", "b"]));

    let widths = column_widths(&table);
    // 19 columns of label across two 1-wide columns and one separator.
    assert_eq!(widths[0], 1);
    assert_eq!(widths[0] + widths[1] + 3, 19);
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn test_render_line_shape() {
    let result = render(&two_column_table());

    assert_eq!(result.lines.len(), 4);
    assert_eq!(result.lines[0], "Name \u{2502} Size");
    assert_eq!(result.lines[1], "\u{2500}".repeat(11));
    assert_eq!(result.lines[2], "Ant  \u{2502} 10  ");
    assert_eq!(result.lines[3], "Bee  \u{2502} 2   ");
}

#[test]
fn test_render_includes_marker_suffix() {
    let mut table = two_column_table();
    table.set_marker("name", SortMarker::Ascending);

    let result = render(&table);
    assert!(result.lines[0].starts_with("Name \u{25b2}"));
}

#[test]
fn test_input_cell_rendered_bracketed() {
    let table = Table::new()
        .header(HeaderCell::new(Element::text("Qty").id("qty")))
        .row(Element::node().child(Element::input("7")));

    let result = render(&table);
    assert_eq!(result.lines[2].trim_end(), "[7]");
}

#[test]
fn test_link_cell_renders_nested_text() {
    let table = Table::new()
        .header(HeaderCell::new(Element::text("More").id("more")))
        .row(Element::node().child(Element::node().child(Element::text("wiki"))));

    let result = render(&table);
    assert_eq!(result.lines[2].trim_end(), "wiki");
}

#[test]
fn test_render_empty_table() {
    let result = render(&Table::new());
    assert_eq!(result.lines.len(), 2);
    assert!(result.regions.is_empty());
}

// ============================================================================
// Header regions
// ============================================================================

#[test]
fn test_regions_cover_header_line() {
    let result = render(&two_column_table());

    assert_eq!(result.regions.len(), 2);
    assert_eq!(result.regions[0].id, "name");
    assert_eq!(result.regions[0].rect, Rect::new(0, 0, 4, 1));
    assert_eq!(result.regions[1].id, "size");
    assert_eq!(result.regions[1].rect, Rect::new(7, 0, 4, 1));
}

#[test]
fn test_region_rect_bounds() {
    let rect = Rect::new(7, 0, 4, 1);

    assert_eq!(rect.left(), 7);
    assert_eq!(rect.right(), 11);
    assert_eq!(rect.top(), 0);
    assert_eq!(rect.bottom(), 1);
    assert!(!rect.is_empty());
    assert!(Rect::new(0, 0, 0, 1).is_empty());
}

#[test]
fn test_spanned_header_region_covers_span() {
    let table = Table::new()
        .header(HeaderCell::new(Element::text("Planet").id("planet")).span(2))
        .header(HeaderCell::new(Element::text("Moons").id("moons")))
        .row(text_row(&["Mercury", "4879", "0"]));

    let result = render(&table);
    // Columns 7 and 4 wide joined by a separator.
    assert_eq!(result.regions[0].rect, Rect::new(0, 0, 14, 1));
    assert_eq!(result.regions[1].rect.x, 17);
}
