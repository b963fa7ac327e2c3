// Loading of two paired columns from a tab-separated table.

use csv::ReaderBuilder;
use flate2::read::MultiGzDecoder;
use ndarray::Array1;
use std::{error::Error, fs::File, io::Read};

#[derive(Debug)]
pub struct Columns {
    pub x_name: String,
    pub y_name: String,
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

pub fn open_input(path: &str) -> Result<Box<dyn Read>, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("Cannot open {}: {}", path, e))?;
    if path.ends_with(".gz") {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

fn column_index(
    headers: &csv::StringRecord,
    name: Option<&str>,
    default: usize,
) -> Result<usize, Box<dyn Error>> {
    match name {
        Some(name) => headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| format!("Column '{}' not found in header", name).into()),
        None => Ok(default),
    }
}

/// Reads the `x` and `y` columns (by header name, or the first two columns).
pub fn read_columns<R: Read>(
    reader: R,
    x_column: Option<&str>,
    y_column: Option<&str>,
) -> Result<Columns, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err("Input file must contain at least two columns for correlation analysis".into());
    }

    let x_idx = column_index(&headers, x_column, 0)?;
    let y_idx = column_index(&headers, y_column, 1)?;
    if x_idx == y_idx {
        return Err(format!(
            "x and y both select column '{}'",
            headers[x_idx].trim()
        )
        .into());
    }

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = idx + 2; // header offset
        for (col, values) in [(x_idx, &mut x), (y_idx, &mut y)] {
            let raw = record.get(col).unwrap_or("").trim();
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    format!(
                        "Invalid number '{}' in column '{}' on line {}",
                        raw,
                        headers[col].trim(),
                        line
                    )
                })?;
            values.push(value);
        }
    }

    Ok(Columns {
        x_name: headers[x_idx].trim().to_string(),
        y_name: headers[y_idx].trim().to_string(),
        x: Array1::from(x),
        y: Array1::from(y),
    })
}
