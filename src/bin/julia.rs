extern crate clap;
extern crate juliaplane;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use juliaplane::render::{self, ColorMap};
use juliaplane::{EscapeConfig, GridSpec, JuliaPlane, PlaneError};
use num::Complex;
use std::str::FromStr;

/// Given a string and a separator, returns the two values
/// separated by the separator.
fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// A specific implementation of parse_pair using a comma and expecting
/// floating point numbers.
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const XRANGE: &str = "xrange";
const YRANGE: &str = "yrange";
const CONSTANT: &str = "constant";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const COLORMAP: &str = "colormap";
const SAVE_CSV: &str = "save-csv";
const SAVE_JSON: &str = "save-json";
const LOAD_CSV: &str = "load-csv";
const LOAD_JSON: &str = "load-json";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set plane renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("julia.png")
                .help("Output image file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x800")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse image size"))
                .help("Points per axis of the plane, columns x rows"),
        )
        .arg(
            Arg::with_name(XRANGE)
                .required(false)
                .long(XRANGE)
                .short("x")
                .takes_value(true)
                .default_value("-5,5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse x range"))
                .help("Window along the real axis, min,max"),
        )
        .arg(
            Arg::with_name(YRANGE)
                .required(false)
                .long(YRANGE)
                .short("y")
                .takes_value(true)
                .default_value("-5,5")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse y range"))
                .help("Window along the imaginary axis, min,max"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .required(false)
                .long(CONSTANT)
                .short("c")
                .takes_value(true)
                .default_value("-1.037,0.17")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the constant c"))
                .help("The constant c of the recurrence, re,im"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration cap per point"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the sweep"),
        )
        .arg(
            Arg::with_name(COLORMAP)
                .required(false)
                .long(COLORMAP)
                .short("m")
                .takes_value(true)
                .default_value("hot")
                .validator(|s| ColorMap::from_str(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Color map for the output image, hot or gray"),
        )
        .arg(
            Arg::with_name(SAVE_CSV)
                .required(false)
                .long(SAVE_CSV)
                .takes_value(true)
                .help("Also write the plane parameters and contents as CSV"),
        )
        .arg(
            Arg::with_name(SAVE_JSON)
                .required(false)
                .long(SAVE_JSON)
                .takes_value(true)
                .help("Also write the plane parameters and contents as JSON"),
        )
        .arg(
            Arg::with_name(LOAD_CSV)
                .required(false)
                .long(LOAD_CSV)
                .takes_value(true)
                .conflicts_with(LOAD_JSON)
                .help("Rebuild the plane from a CSV file instead of the window arguments"),
        )
        .arg(
            Arg::with_name(LOAD_JSON)
                .required(false)
                .long(LOAD_JSON)
                .takes_value(true)
                .help("Rebuild the plane from a JSON file instead of the window arguments"),
        )
        .get_matches()
}

fn build_plane(matches: &ArgMatches) -> Result<JuliaPlane, PlaneError> {
    if let Some(path) = matches.value_of(LOAD_CSV) {
        return JuliaPlane::from_csv(path);
    }
    if let Some(path) = matches.value_of(LOAD_JSON) {
        return JuliaPlane::from_json(path);
    }

    let (xlen, ylen) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image size");
    let (xmin, xmax) =
        parse_pair(matches.value_of(XRANGE).unwrap(), ',').expect("Error parsing x range");
    let (ymin, ymax) =
        parse_pair(matches.value_of(YRANGE).unwrap(), ',').expect("Error parsing y range");
    let c = parse_complex(matches.value_of(CONSTANT).unwrap()).expect("Error parsing constant");
    let limit =
        u32::from_str(matches.value_of(ITERATIONS).unwrap()).expect("Error parsing iterations");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Error parsing thread count");

    let spec = GridSpec::new(xmin, xmax, xlen, ymin, ymax, ylen)?;
    let escape = EscapeConfig::new(c, limit);
    Ok(if threads > 1 {
        JuliaPlane::with_threads(spec, escape, threads)
    } else {
        JuliaPlane::new(spec, escape)
    })
}

fn run(matches: &ArgMatches) -> Result<(), PlaneError> {
    let plane = build_plane(matches)?;
    if let Some(path) = matches.value_of(SAVE_CSV) {
        plane.to_csv(path)?;
    }
    if let Some(path) = matches.value_of(SAVE_JSON) {
        plane.to_json(path)?;
    }
    let map = ColorMap::from_str(matches.value_of(COLORMAP).unwrap())?;
    render::write_image(&plane, matches.value_of(OUTPUT).unwrap(), map)
}

fn main() {
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
