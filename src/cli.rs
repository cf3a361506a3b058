//! Argument parsing for the `kdtrace-cli` driver binary. Not part of the
//! library's core contract, but kept in the same crate and gated behind the
//! `cli` feature, alongside the driver binary it configures.

use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref POSITIVE_INT_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref POSITIVE_FLOAT_REGEX: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap();
}

fn is_positive_int(s: String) -> Result<(), String> {
    if POSITIVE_INT_REGEX.is_match(&s) {
        Ok(())
    } else {
        Err("Value must be a positive integer".to_string())
    }
}

fn is_positive_float(s: String) -> Result<(), String> {
    if POSITIVE_FLOAT_REGEX.is_match(&s) {
        Ok(())
    } else {
        Err("Value must be a positive number".to_string())
    }
}

/// Parsed command-line configuration for the driver binary.
pub struct Config {
    /// OBJ file to load. If absent, a random mesh is generated instead.
    pub input_file: Option<PathBuf>,
    pub triangle_count: u32,
    pub point_range: f32,
    pub interactive: bool,
    pub verbose: bool,
    /// When set, an explicitly loaded mesh's index buffer is discarded and
    /// the mesh is rebuilt in triangle-soup mode instead: slower, but with
    /// no shared-vertex bookkeeping.
    pub force_soup: bool,
}

pub fn build_app() -> App<'static, 'static> {
    App::new("kdtrace-cli")
        .version("0.1.0")
        .about("Loads or generates a triangle mesh, builds a k-d tree over it, and fires ray(s) at it")
        .arg(
            Arg::with_name("load")
                .short("l")
                .long("load")
                .help("OBJ file to load; if omitted, random triangles are generated instead")
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name("triangles")
                .short("p")
                .long("triangles")
                .help("Number of random triangles to generate when no file is given")
                .value_name("N")
                .default_value("1000")
                .validator(is_positive_int),
        )
        .arg(
            Arg::with_name("range")
                .short("r")
                .long("range")
                .help("Coordinate range for randomly generated triangles and rays")
                .value_name("N")
                .default_value("1000")
                .validator(is_positive_float),
        )
        .arg(
            Arg::with_name("interactive")
                .short("i")
                .long("interactive")
                .help("Read rays from stdin instead of casting one random ray"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print tree statistics and extra timing detail"),
        )
        .arg(
            Arg::with_name("slow")
                .short("s")
                .long("slow")
                .help("Discard a loaded mesh's shared-vertex indices and rebuild in triangle-soup mode"),
        )
}

pub fn parse_matches(matches: ArgMatches) -> Config {
    Config {
        input_file: matches.value_of("load").map(PathBuf::from),
        triangle_count: matches.value_of("triangles").unwrap().parse().unwrap(),
        point_range: matches.value_of("range").unwrap().parse().unwrap(),
        interactive: matches.is_present("interactive"),
        verbose: matches.is_present("verbose"),
        force_soup: matches.is_present("slow"),
    }
}
