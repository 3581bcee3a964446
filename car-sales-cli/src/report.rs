//! PDF report generation
//!
//! Renders the summary and the sales table with `genpdf`. The body arrives as
//! `<br/>`-separated lines and each line becomes its own paragraph.

use anyhow::{anyhow, Result};
use car_sales_core::formatter::HTML_LINE_BREAK;
use car_sales_core::Table;
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{Document, Element as _, SimplePageDecorator};
use std::path::Path;

use crate::fonts;

const TITLE_FONT_SIZE: u8 = 18;
const PAGE_MARGIN_MM: i32 = 15;
const CELL_PADDING_MM: i32 = 1;

/// Column weights for the ID / Car / Price / Total Sales listing
const SALES_COLUMN_WEIGHTS: [usize; 4] = [1, 5, 2, 2];

fn pdf_error(what: &str, err: genpdf::error::Error) -> anyhow::Error {
    anyhow!("{}: {}", what, err)
}

fn column_weights(columns: usize) -> Vec<usize> {
    if columns == SALES_COLUMN_WEIGHTS.len() {
        SALES_COLUMN_WEIGHTS.to_vec()
    } else {
        vec![1; columns]
    }
}

/// Build a framed table; the first row is the header and is set in bold
fn build_table(table: &Table) -> Result<Option<TableLayout>> {
    let columns = match table.first() {
        Some(header) if !header.is_empty() => header.len(),
        _ => return Ok(None),
    };

    let mut layout = TableLayout::new(column_weights(columns));
    layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    for (index, cells) in table.iter().enumerate() {
        if cells.len() != columns {
            return Err(anyhow!(
                "Table row {} has {} cells, expected {}",
                index,
                cells.len(),
                columns
            ));
        }

        let mut row = layout.row();
        for cell in cells {
            let paragraph = Paragraph::new(cell.as_str()).padded(CELL_PADDING_MM);
            if index == 0 {
                row.push_element(paragraph.styled(Style::new().bold()));
            } else {
                row.push_element(paragraph);
            }
        }
        row.push()
            .map_err(|e| pdf_error(&format!("Failed to add table row {}", index), e))?;
    }

    Ok(Some(layout))
}

/// Render a PDF report to `path`
///
/// # Arguments
/// * `path` - Output file
/// * `title` - Heading and document title
/// * `body` - Summary lines joined with `<br/>`
/// * `table` - Grid whose first row is the header
/// * `fonts_dir` - Optional extra font directory (see [`crate::fonts`])
pub fn generate(
    path: &Path,
    title: &str,
    body: &str,
    table: &Table,
    fonts_dir: Option<&Path>,
) -> Result<()> {
    let font_family = fonts::default_font_family(fonts_dir)?;

    let mut document = Document::new(font_family);
    document.set_title(title);
    document.set_minimal_conformance();
    document.set_line_spacing(1.25);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(PAGE_MARGIN_MM);
    document.set_page_decorator(decorator);

    document.push(
        Paragraph::new(title).styled(Style::new().bold().with_font_size(TITLE_FONT_SIZE)),
    );
    document.push(Break::new(1));

    for line in body.split(HTML_LINE_BREAK) {
        document.push(Paragraph::new(line));
    }
    document.push(Break::new(1));

    if let Some(layout) = build_table(table)? {
        document.push(layout);
    }

    log::info!("Writing PDF report: {:?}", path);
    document
        .render_to_file(path)
        .map_err(|e| pdf_error(&format!("Failed to render report to {:?}", path), e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_table() -> Table {
        vec![
            vec!["ID".into(), "Car".into(), "Price".into(), "Total Sales".into()],
            vec!["1".into(), "A X (2020)".into(), "$100.00".into(), "2".into()],
            vec!["2".into(), "B Y (2020)".into(), "$50.00".into(), "5".into()],
        ]
    }

    #[test]
    fn test_column_weights() {
        assert_eq!(column_weights(4), vec![1, 5, 2, 2]);
        assert_eq!(column_weights(2), vec![1, 1]);
    }

    #[test]
    fn test_empty_table_is_skipped() {
        assert!(build_table(&Vec::new()).unwrap().is_none());
    }

    #[test]
    fn test_ragged_table_is_rejected() {
        let mut table = sample_table();
        table[2].pop();
        let err = build_table(&table).err().unwrap();
        assert!(err.to_string().contains("Table row 2"));
    }

    #[test]
    fn test_renders_pdf() {
        if !fonts::fonts_available(None) {
            eprintln!("Skipping test_renders_pdf: no fonts found. Set CAR_SALES_FONTS_DIR.");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.pdf");
        generate(
            &path,
            "Sales Report",
            "first line<br/>second line",
            &sample_table(),
            None,
        )
        .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
