use crate::constants::{FIELD_PRECISION, FIELD_WIDTH};
use crate::errors::OutputWriteError;
use crate::models::{CoefficientRow, CoefficientTable};
use std::fs;
use std::path::Path;

/// Renders a coefficient table: trimmed header block, one line per row with
/// every value as `%-15.8f` separated by a space, trimmed footer block.
/// Empty header or footer blocks are left out. Header and footer bytes are
/// copied unchanged apart from the trim.
pub fn render_table(table: &CoefficientTable) -> Vec<u8> {
    let mut out = Vec::new();
    push_block(&mut out, &table.header);
    for row in &table.rows {
        out.extend_from_slice(render_row(row).as_bytes());
        out.push(b'\n');
    }
    push_block(&mut out, &table.footer);
    out
}

pub fn write_table(path: &Path, table: &CoefficientTable) -> Result<(), OutputWriteError> {
    fs::write(path, render_table(table)).map_err(|source| OutputWriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn render_row(row: &CoefficientRow) -> String {
    row.angles
        .iter()
        .chain(row.coefficients.iter())
        .map(|&value| render_field(value))
        .collect::<Vec<_>>()
        .join(" ")
}

// Non-finite values use the C printf spelling
fn render_field(value: f64) -> String {
    if value.is_nan() {
        format!("{:<width$}", "nan", width = FIELD_WIDTH)
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        format!("{:<width$}", text, width = FIELD_WIDTH)
    } else {
        format!("{:<width$.prec$}", value, width = FIELD_WIDTH, prec = FIELD_PRECISION)
    }
}

fn push_block(out: &mut Vec<u8>, block: &[u8]) {
    let block = trim_ascii_whitespace(block);
    if !block.is_empty() {
        out.extend_from_slice(block);
        out.push(b'\n');
    }
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Load;

    #[test]
    fn test_fixed_width_fields() {
        let row = CoefficientRow {
            angles: vec![4.1, -2.0],
            coefficients: Load::new(0.13143181, 1.0, -0.5, 0.0, 12.345678912, -0.000000004),
        };
        assert_eq!(
            render_row(&row),
            "4.10000000      -2.00000000     0.13143181      1.00000000      \
             -0.50000000     0.00000000      12.34567891     -0.00000000    "
        );
    }

    #[test]
    fn test_header_and_footer_blocks() {
        let mut table = CoefficientTable::new(b"\n  Run 7\nalpha beta\n\n", b"end\n");
        table.push(vec![0.0, 0.0], Load::zeros());
        let text = String::from_utf8(render_table(&table)).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Run 7");
        assert_eq!(lines[1], "alpha beta");
        assert!(lines[2].starts_with("0.00000000     "));
        assert_eq!(lines[3], "end");
        assert!(text.ends_with("end\n"));
    }

    #[test]
    fn test_non_finite_values_use_c_spelling() {
        let row = CoefficientRow {
            angles: vec![0.0, 0.0],
            coefficients: Load::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, 0.0, 0.0),
        };
        let text = render_row(&row);
        let fields: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(fields[2..5], ["nan", "inf", "-inf"]);
        assert!(text.starts_with("0.00000000      0.00000000      nan             inf   "));
    }

    #[test]
    fn test_gbk_header_bytes_pass_through() {
        let header = [0xbe, 0xb2, 0xcc, 0xac, b'\n'];
        let table = CoefficientTable::new(&header, b"");
        assert_eq!(render_table(&table), vec![0xbe, 0xb2, 0xcc, 0xac, b'\n']);
    }

    #[test]
    fn test_empty_blocks_are_omitted() {
        let mut table = CoefficientTable::new(b"", b"  \n");
        table.push(vec![1.0, 2.0], Load::repeat(1.0));
        let text = String::from_utf8(render_table(&table)).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("1.00000000"));
    }

    #[test]
    fn test_unwritable_destination() {
        let table = CoefficientTable::new(b"", b"");
        let result = write_table(Path::new("/nonexistent/dir/body.dat"), &table);
        assert!(matches!(result, Err(OutputWriteError::Io { .. })));
    }
}
