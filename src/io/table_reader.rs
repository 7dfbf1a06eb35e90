use crate::config::TableLayout;
use crate::errors::InputFormatError;
use crate::models::{Load, SampleTable};
use csv::{ReaderBuilder, StringRecord};
use nalgebra as na;
use std::fs;
use std::path::Path;

/// Reads a whitespace-delimited balance table.
pub fn read_table(path: &Path, layout: &TableLayout) -> Result<SampleTable, InputFormatError> {
    let bytes = fs::read(path).map_err(|source| InputFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&bytes, path, layout)
}

/// Splits off the header and footer lines as raw bytes, whatever their
/// encoding, and parses the rest. `path` is only used in error messages.
pub fn parse_table(
    text: &[u8],
    path: &Path,
    layout: &TableLayout,
) -> Result<SampleTable, InputFormatError> {
    layout.validate()?;

    let lines: Vec<&[u8]> = text.split_inclusive(|&b| b == b'\n').collect();
    let (header_rows, footer_rows) = (layout.header_rows, layout.footer_rows);

    if lines.len() < header_rows + footer_rows {
        return Err(InputFormatError::TooShort {
            path: path.to_path_buf(),
            lines: lines.len(),
            header: header_rows,
            footer: footer_rows,
        });
    }

    let data_end = lines.len() - footer_rows;
    let header = lines[..header_rows].concat();
    let footer = lines[data_end..].concat();
    let body = lines[header_rows..data_end].concat();

    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(body.as_slice());

    let mut angles = Vec::new();
    let mut loads = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|source| InputFormatError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map_or(0, |p| p.line()) + header_rows as u64;

        let values = parse_record(&record, path, line)?;
        if values.is_empty() {
            continue;
        }

        let out_of_bounds = |column: usize| InputFormatError::ColumnOutOfBounds {
            path: path.to_path_buf(),
            line,
            column,
            available: values.len(),
        };
        let row_angles = values
            .get(layout.angle_columns.indices())
            .ok_or_else(|| out_of_bounds(layout.angle_columns.end))?;
        let row_forces = values
            .get(layout.force_columns.indices())
            .ok_or_else(|| out_of_bounds(layout.force_columns.end))?;

        angles.extend_from_slice(row_angles);
        loads.push(Load::from_row_slice(row_forces));
    }

    if loads.is_empty() {
        return Err(InputFormatError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(SampleTable {
        header,
        footer,
        angles: na::DMatrix::from_row_slice(loads.len(), layout.angle_columns.len(), &angles),
        loads,
    })
}

// Runs of spaces show up as empty fields, tabs stay inside a field.
// Everything after a `#` is a comment.
fn parse_record(
    record: &StringRecord,
    path: &Path,
    line: u64,
) -> Result<Vec<f64>, InputFormatError> {
    let mut fields = Vec::new();
    for field in record.iter().flat_map(str::split_whitespace) {
        match field.split_once('#') {
            Some((value, _)) => {
                if !value.is_empty() {
                    fields.push(value);
                }
                break;
            }
            None => fields.push(field),
        }
    }

    fields
        .into_iter()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|source| InputFormatError::ParseFloat {
                    path: path.to_path_buf(),
                    line,
                    field: field.to_string(),
                    source,
                })
        })
        .collect()
}
