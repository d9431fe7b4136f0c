//! Batch evaluation of shape records read from JSON or CSV.
//!
//! Inputs
//! - JSON: an array of `{"kind": "...", "args": [...]}` objects. Any other
//!   element is kept as a record whose kind is its JSON text, so it is reported
//!   as "not a shape" instead of failing the whole file.
//! - CSV: columns `kind,a,b,c` (trailing empty cells dropped), read with Polars.
//!
//! Every record yields exactly one `Outcome`; a rejected record never aborts the batch.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use geocalc::{AnyShape, Operand, Shape, ShapeRecord, Triangle};
use polars::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};

use crate::input::{operand_from_cell, operand_from_json};
use crate::provenance::{write_sidecar, Payload};

/// Result for one record.
#[derive(Debug, Serialize, PartialEq)]
pub struct Outcome {
    pub index: usize,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_triangle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OutcomeError>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct OutcomeError {
    /// `type` or `value`.
    pub kind: String,
    pub message: String,
}

pub fn evaluate(index: usize, record: &ShapeRecord) -> Outcome {
    match AnyShape::from_record(record) {
        Ok(shape) => Outcome {
            index,
            kind: shape.kind().to_string(),
            description: Some(shape.describe()),
            area: Some(geocalc::calculate_area(&shape)),
            right_triangle: shape.as_triangle().map(Triangle::is_right_triangle),
            error: None,
        },
        Err(err) => {
            tracing::warn!(index, kind = %record.kind, error = %err, "record_rejected");
            Outcome {
                index,
                kind: record.kind.clone(),
                description: None,
                area: None,
                right_triangle: None,
                error: Some(OutcomeError {
                    kind: err.kind().to_string(),
                    message: err.reason().to_string(),
                }),
            }
        }
    }
}

/// Read records, evaluate them, write `out` plus its provenance sidecar.
pub fn run(input: &Path, out: &Path) -> Result<Vec<Outcome>> {
    let records = read_records(input)?;
    let outcomes: Vec<Outcome> = records
        .iter()
        .enumerate()
        .map(|(i, r)| evaluate(i, r))
        .collect();
    let rejected = outcomes.iter().filter(|o| o.error.is_some()).count();

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&outcomes)?)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        records = outcomes.len(),
        rejected,
        out = %out.display(),
        "batch_written"
    );

    let payload = Payload::new(json!({
        "input": input.to_string_lossy(),
        "records": outcomes.len(),
        "rejected": rejected
    }));
    write_sidecar(out, payload)?;
    Ok(outcomes)
}

pub fn read_records(path: &Path) -> Result<Vec<ShapeRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        _ => bail!(
            "unsupported input {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<ShapeRecord>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    let Value::Array(items) = doc else {
        bail!("{}: expected a JSON array of records", path.display());
    };
    Ok(items.iter().map(record_from_json).collect())
}

fn record_from_json(item: &Value) -> ShapeRecord {
    let Value::Object(map) = item else {
        return ShapeRecord::new(item.to_string(), Vec::new());
    };
    let kind = match map.get("kind") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let args = match map.get("args") {
        Some(Value::Array(xs)) => xs.iter().map(operand_from_json).collect(),
        Some(other) => vec![operand_from_json(other)],
        None => Vec::new(),
    };
    ShapeRecord::new(kind, args)
}

fn read_csv(path: &Path) -> Result<Vec<ShapeRecord>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let kinds = df
        .column("kind")
        .with_context(|| format!("{}: missing `kind` column", path.display()))?;
    let arg_cols: Vec<&Series> = ["a", "b", "c"]
        .into_iter()
        .filter_map(|name| df.column(name).ok())
        .collect();

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let kind = match kinds.get(row)? {
            AnyValue::Null => String::new(),
            AnyValue::String(s) => s.to_string(),
            other => other.to_string(),
        };
        let mut args = arg_cols
            .iter()
            .map(|col| col.get(row).map(operand_from_cell))
            .collect::<PolarsResult<Vec<_>>>()?;
        while args.last() == Some(&Operand::Missing) {
            args.pop();
        }
        records.push(ShapeRecord::new(kind, args));
    }
    tracing::debug!(rows = records.len(), cols = df.width(), "csv_loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use tempfile::tempdir;

    fn error_kind(o: &Outcome) -> Option<&str> {
        o.error.as_ref().map(|e| e.kind.as_str())
    }

    #[test]
    fn json_batch_reports_each_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("shapes.json");
        fs::write(
            &input,
            r#"[
                {"kind": "circle", "args": [5]},
                {"kind": "triangle", "args": [3, 4, 5]},
                {"kind": "triangle", "args": [1, 2, 3]},
                {"kind": "circle", "args": ["5"]},
                {"kind": "hexagon", "args": [1]},
                42
            ]"#,
        )
        .unwrap();
        let out = dir.path().join("out").join("areas.json");
        let outcomes = run(&input, &out).unwrap();
        assert_eq!(outcomes.len(), 6);

        assert!((outcomes[0].area.unwrap() - 25.0 * PI).abs() < 1e-12);
        assert_eq!(outcomes[0].right_triangle, None);
        assert_eq!(outcomes[1].area, Some(6.0));
        assert_eq!(outcomes[1].right_triangle, Some(true));
        assert_eq!(
            outcomes[1].description.as_deref(),
            Some("Triangle(side_a=3, side_b=4, side_c=5)")
        );
        assert_eq!(error_kind(&outcomes[2]), Some("value"));
        assert_eq!(error_kind(&outcomes[3]), Some("type"));
        assert_eq!(error_kind(&outcomes[4]), Some("type"));
        assert_eq!(error_kind(&outcomes[5]), Some("type"));

        let written: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written.as_array().unwrap().len(), 6);
        assert_eq!(written[2]["error"]["kind"], "value");
        assert!(written[0].get("error").is_none());
        let sidecar = out.with_file_name("areas.provenance.json");
        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["rejected"], 4);
    }

    #[test]
    fn csv_batch_parses_numeric_text_and_flags_the_rest() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("shapes.csv");
        fs::write(
            &input,
            "kind,a,b,c\ncircle,2,,\ntriangle,3,4,5\ntriangle,1,2,3\ncircle,abc,,\n",
        )
        .unwrap();
        let records = read_records(&input).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].args, vec![Operand::Number(2.0)]);

        let outcomes: Vec<Outcome> = records
            .iter()
            .enumerate()
            .map(|(i, r)| evaluate(i, r))
            .collect();
        assert!((outcomes[0].area.unwrap() - 4.0 * PI).abs() < 1e-12);
        assert_eq!(outcomes[1].area, Some(6.0));
        assert_eq!(error_kind(&outcomes[2]), Some("value"));
        assert_eq!(error_kind(&outcomes[3]), Some("type"));
    }

    #[test]
    fn unsupported_extension_and_bad_shape_fail_early() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("shapes.txt");
        fs::write(&txt, "circle 1").unwrap();
        assert!(read_records(&txt).is_err());

        let obj = dir.path().join("shapes.json");
        fs::write(&obj, r#"{"kind": "circle", "args": [1]}"#).unwrap();
        assert!(read_records(&obj).is_err());
    }
}
