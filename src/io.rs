//! Flat-file persistence for a plane.  Both formats record the six
//! window parameters plus the constant c alongside the grid contents,
//! but only the parameters matter on the way back in: a loader
//! rebuilds the configuration and regenerates the grid through the
//! normal generation path, so a stale or hand-edited contents section
//! can never produce a plane that disagrees with its own parameters.
//!
//! The iteration cap is not part of either format; a reloaded plane
//! is evaluated with the default cap.

extern crate serde_json;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use num::Complex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use errors::PlaneError;
use escape::{EscapeConfig, DEFAULT_LIMIT};
use julia::JuliaPlane;
use planes::GridSpec;

const CSV_HEADER: &str = "JuliaPlane,xmin,xmax,xlen,ymin,ymax,ylen,c";
const CSV_MARKER: &str = "JuliaPlane Contents";
const JSON_PARAMETERS: &str = "JuliaPlaneParameters";
const JSON_CONTENTS: &str = "JuliaPlaneContents";

// The scalar parameters that define a plane, in their serialized
// shape.  c is split into its parts so the JSON side stays plain
// numbers.
#[derive(Debug, Serialize, Deserialize)]
struct PlaneParameters {
    xmin: f64,
    xmax: f64,
    xlen: usize,
    ymin: f64,
    ymax: f64,
    ylen: usize,
    c_real: f64,
    c_imag: f64,
}

impl PlaneParameters {
    fn of(plane: &JuliaPlane) -> PlaneParameters {
        let spec = plane.spec();
        let escape = plane.escape();
        PlaneParameters {
            xmin: spec.xmin,
            xmax: spec.xmax,
            xlen: spec.xlen,
            ymin: spec.ymin,
            ymax: spec.ymax,
            ylen: spec.ylen,
            c_real: escape.c.re,
            c_imag: escape.c.im,
        }
    }

    // Regeneration happens here: the stored contents never feed back
    // into the new plane.
    fn into_plane(self) -> Result<JuliaPlane, PlaneError> {
        let spec = GridSpec::new(self.xmin, self.xmax, self.xlen, self.ymin, self.ymax, self.ylen)?;
        let escape = EscapeConfig::new(Complex::new(self.c_real, self.c_imag), DEFAULT_LIMIT);
        Ok(JuliaPlane::new(spec, escape))
    }
}

fn parse_field<T: FromStr>(field: &str, name: &str) -> Result<T, PlaneError> {
    T::from_str(field.trim()).map_err(|_| {
        PlaneError::InvalidParameter(format!("could not read {} from {:?}", name, field))
    })
}

impl JuliaPlane {
    /// Writes the plane to a CSV file: a header row naming the record
    /// type and the parameter order, the parameter row itself (led by
    /// an empty cell so the values line up under their labels), a
    /// marker row, then one row of cell values per grid row.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), PlaneError> {
        let mut file = BufWriter::new(File::create(path)?);
        let spec = self.spec();
        writeln!(file, "{}", CSV_HEADER)?;
        writeln!(
            file,
            ",{},{},{},{},{},{},{}",
            spec.xmin,
            spec.xmax,
            spec.xlen,
            spec.ymin,
            spec.ymax,
            spec.ylen,
            self.escape().c
        )?;
        writeln!(file, "{}", CSV_MARKER)?;
        for row in self.rows() {
            writeln!(file, "{}", row.iter().join(","))?;
        }
        file.flush()?;
        Ok(())
    }

    /// Rebuilds a plane from a CSV file written by `to_csv`.  Only the
    /// parameter row is read; everything after it is ignored and the
    /// grid is regenerated.  A missing, short, or non-numeric
    /// parameter row rejects the whole file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<JuliaPlane, PlaneError> {
        let file = BufReader::new(File::open(path)?);
        let mut lines = file.lines();
        let _header = lines
            .next()
            .ok_or_else(|| PlaneError::InvalidParameter("empty CSV document".to_string()))??;
        let params = lines
            .next()
            .ok_or_else(|| PlaneError::InvalidParameter("missing parameter row".to_string()))??;
        let fields: Vec<&str> = params.split(',').collect();
        if fields.len() < 8 {
            return Err(PlaneError::InvalidParameter(format!(
                "parameter row has {} fields, expected 8",
                fields.len()
            )));
        }
        let c: Complex<f64> = parse_field(fields[7], "c")?;
        PlaneParameters {
            xmin: parse_field(fields[1], "xmin")?,
            xmax: parse_field(fields[2], "xmax")?,
            xlen: parse_field(fields[3], "xlen")?,
            ymin: parse_field(fields[4], "ymin")?,
            ymax: parse_field(fields[5], "ymax")?,
            ylen: parse_field(fields[6], "ylen")?,
            c_real: c.re,
            c_imag: c.im,
        }
        .into_plane()
    }

    /// Writes the plane to a JSON file: a parameters object under
    /// "JuliaPlaneParameters", then one "JuliaPlaneContents<i>" entry
    /// per grid row mapping that row's coordinate label to its cell
    /// values.
    pub fn to_json<P: AsRef<Path>>(&self, path: P) -> Result<(), PlaneError> {
        let mut doc = serde_json::Map::new();
        let params = serde_json::to_value(PlaneParameters::of(self))
            .map_err(|err| PlaneError::Io(err.into()))?;
        doc.insert(JSON_PARAMETERS.to_string(), params);
        let ylabels = self.spec().ylabels();
        for (row, cells) in self.rows().enumerate() {
            let mut entry = serde_json::Map::new();
            entry.insert(
                ylabels[row].clone(),
                Value::Array(cells.iter().map(|&cell| Value::from(cell)).collect()),
            );
            doc.insert(format!("{}{}", JSON_CONTENTS, row), Value::Object(entry));
        }
        let mut file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut file, &Value::Object(doc))
            .map_err(|err| PlaneError::Io(err.into()))?;
        file.flush()?;
        Ok(())
    }

    /// Rebuilds a plane from a JSON file written by `to_json`.  Only
    /// the parameters object is read; contents entries are ignored and
    /// the grid is regenerated.  A document that does not parse, has
    /// no parameters object, or is missing a field rejects the whole
    /// file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<JuliaPlane, PlaneError> {
        let file = BufReader::new(File::open(path)?);
        let doc: Value = serde_json::from_reader(file).map_err(|err| {
            PlaneError::InvalidParameter(format!("malformed JSON document: {}", err))
        })?;
        let params = doc.get(JSON_PARAMETERS).ok_or_else(|| {
            PlaneError::InvalidParameter(format!("missing {} object", JSON_PARAMETERS))
        })?;
        let params: PlaneParameters = serde_json::from_value(params.clone()).map_err(|err| {
            PlaneError::InvalidParameter(format!("malformed {} object: {}", JSON_PARAMETERS, err))
        })?;
        params.into_plane()
    }
}
