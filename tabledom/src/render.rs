use crate::element::{Content, Element};
use crate::layout::Rect;
use crate::table::Table;
use crate::text::{display_width, pad_to_width};

const SEPARATOR: &str = " \u{2502} ";

/// Screen area covered by one rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRegion {
    pub id: String,
    pub rect: Rect,
}

/// Rendered table: one string per screen line, plus the header regions
/// needed to resolve clicks back to header IDs.
#[derive(Debug, Clone, Default)]
pub struct RenderResult {
    pub lines: Vec<String>,
    pub regions: Vec<HeaderRegion>,
}

/// Width of each logical column: the widest cell in the column, widened
/// further when a spanning header label would not fit across its columns.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let columns = table.column_count();
    let mut widths = vec![0usize; columns];

    for row in &table.rows {
        for (column, width) in widths.iter_mut().enumerate() {
            if let Some(cell) = row.child_at(column) {
                let cell_width = display_width(&cell_text(cell));
                if cell_width > *width {
                    *width = cell_width;
                }
            }
        }
    }

    let mut start = 0;
    for header in &table.headers {
        let label_width = display_width(&header.display_label());
        let separators = (header.span - 1) * display_width(SEPARATOR);
        let available = widths[start..start + header.span].iter().sum::<usize>() + separators;
        let deficit = label_width.saturating_sub(available);
        if deficit > 0 {
            widths[start + header.span - 1] += deficit;
        }
        start += header.span;
    }

    widths
}

/// Render the table to text lines and record per-header hit regions.
/// Line 0 is the header row, line 1 a rule, the rest are body rows.
pub fn render(table: &Table) -> RenderResult {
    let widths = column_widths(table);
    let mut lines = Vec::with_capacity(table.row_count() + 2);
    let mut regions = Vec::with_capacity(table.headers.len());

    let mut header_line = String::new();
    let mut x = 0usize;
    let mut start = 0usize;
    for (i, header) in table.headers.iter().enumerate() {
        if i > 0 {
            header_line.push_str(SEPARATOR);
            x += display_width(SEPARATOR);
        }
        let separators = (header.span - 1) * display_width(SEPARATOR);
        let width = widths[start..start + header.span].iter().sum::<usize>() + separators;
        regions.push(HeaderRegion {
            id: header.element.id.clone(),
            rect: Rect::new(x as u16, 0, width as u16, 1),
        });
        header_line.push_str(&pad_to_width(&header.display_label(), width));
        x += width;
        start += header.span;
    }
    let total_width = x;
    lines.push(header_line);
    lines.push("\u{2500}".repeat(total_width));

    for row in &table.rows {
        let mut line = String::new();
        for (column, width) in widths.iter().enumerate() {
            if column > 0 {
                line.push_str(SEPARATOR);
            }
            let text = row.child_at(column).map(cell_text).unwrap_or_default();
            line.push_str(&pad_to_width(&text, *width));
        }
        lines.push(line);
    }

    log::debug!(
        "[render] {} lines, {} header regions, {total_width} columns wide",
        lines.len(),
        regions.len(),
    );

    RenderResult { lines, regions }
}

/// Text shown for a cell: its own text, an editable control's bracketed
/// value, or the first nested child's text.
fn cell_text(cell: &Element) -> String {
    match &cell.content {
        Content::None => String::new(),
        Content::Text(s) => s.clone(),
        Content::Input { value } => format!("[{value}]"),
        Content::Children(children) => children.first().map(cell_text).unwrap_or_default(),
    }
}
