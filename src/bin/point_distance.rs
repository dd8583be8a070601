//! Point Distance Tool
//!
//! This binary takes two points on the command line, prints them in both
//! representations and reports the distances between them.
//!
//! Points are written as `c:x,y,z` (Cartesian), `s:lat,lon,radius`
//! (spherical, degrees) or `nowhere`.
//!
//! Usage:
//!   cargo run --bin point_distance -- c:1,1,1 s:45,90,10
//!   cargo run --bin point_distance -- --json c:0,0,-1 nowhere

use clap::{ArgAction, Parser};
use pointfield::{Point, PointRegistry};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Point Distance Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts two points and prints the distances between them",
    long_about = None
)]
struct Args {
    /// Emit a JSON report instead of text
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// First point (c:x,y,z | s:lat,lon,radius | nowhere)
    from: String,

    /// Second point (c:x,y,z | s:lat,lon,radius | nowhere)
    to: String,
}

/// Parse three comma separated numbers
fn parse_triple(text: &str) -> Result<(f64, f64, f64)> {
    let values = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [a, b, c] => Ok((*a, *b, *c)),
        _ => Err(format!("expected three comma separated numbers, got '{}'", text).into()),
    }
}

/// Parse a point description into a canonical point
fn parse_point(registry: &PointRegistry, text: &str) -> Result<Point> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("nowhere") {
        return Ok(registry.unreachable());
    }
    match text.split_once(':') {
        Some(("c", rest)) => {
            let (x, y, z) = parse_triple(rest)?;
            Ok(registry.cartesian(x, y, z)?.into())
        }
        Some(("s", rest)) => {
            let (latitude, longitude, radius) = parse_triple(rest)?;
            Ok(registry.spherical(latitude, longitude, radius)?.into())
        }
        _ => Err(format!("cannot parse point '{}'", text).into()),
    }
}

/// Render a conversion result, showing the error instead of failing
fn describe<T: std::fmt::Display>(result: pointfield::Result<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => format!("n/a ({})", err),
    }
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_point(label: &str, point: &Point) {
    print_section_header(label);
    println!("Kind: {}", point.kind());
    println!("Cartesian: {}", describe(point.as_cartesian()));
    println!("Spherical: {}", describe(point.as_spherical()));
}

fn print_json(from: &Point, to: &Point) -> Result<()> {
    let report = serde_json::json!({
        "from": from.to_record(),
        "to": to.to_record(),
        "cartesian_distance": from.distance_cartesian(to).ok(),
        "spherical_distance": from.distance_spherical(to).ok(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let registry = PointRegistry::new();

    let from = parse_point(&registry, &args.from)?;
    let to = parse_point(&registry, &args.to)?;

    if args.json {
        return print_json(&from, &to);
    }

    print_point("From", &from);
    print_point("To", &to);

    print_section_header("Distance");
    println!("Cartesian: {}", describe(from.distance_cartesian(&to)));
    println!("Spherical: {}", describe(from.distance_spherical(&to)));

    Ok(())
}
