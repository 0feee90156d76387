use std::path::Path;

use anyhow::{Context, Result};

const SHEET_TITLE: &str = "MultilineTest";
const OUTPUT_PATH: &str = "tests/fixtures/multiline_test.xlsx";

/// Exercises scrolling in the cell detail popup of the consuming viewer.
const DESCRIPTION_TEXT: &str = "This is a cell\nwith multiple lines\nof text content\nto test\nthe scrolling\nfunctionality\nin the cell\ndetail popup\nview.\nLine 10\nLine 11\nLine 12\nLine 13\nLine 14\nLine 15";

fn number_column_text() -> String {
    (1..=20)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the multi-line fixture workbook to `output`, overwriting any
/// existing file. The parent directory must already exist.
pub fn generate(output: &Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(SHEET_TITLE);

    sheet.get_cell_mut("A1").set_value("Number");
    sheet.get_cell_mut("B1").set_value("Description");
    sheet.get_cell_mut("A2").set_value(number_column_text());
    sheet.get_cell_mut("B2").set_value(DESCRIPTION_TEXT);

    umya_spreadsheet::writer::xlsx::write(&book, output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}

pub fn run(args: impl IntoIterator<Item = std::ffi::OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    generate(Path::new(OUTPUT_PATH))?;
    println!("Created {OUTPUT_PATH} with multi-line cells");
    Ok(())
}
