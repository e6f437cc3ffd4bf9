use clap::Parser;
use great_circle_midpoint::{Calculator, ComputationResult, CoordinateInput, EARTH_RADIUS_KM};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "great-circle-midpoint",
    about = "Great-circle midpoint and intermediary points between two locations"
)]
struct Cli {
    /// Latitude of location A in degrees
    #[arg(long = "latitude_a", allow_hyphen_values = true)]
    latitude_a: Option<f64>,
    /// Longitude of location A in degrees
    #[arg(long = "longitude_a", allow_hyphen_values = true)]
    longitude_a: Option<f64>,
    /// Latitude of location B in degrees
    #[arg(long = "latitude_b", allow_hyphen_values = true)]
    latitude_b: Option<f64>,
    /// Longitude of location B in degrees
    #[arg(long = "longitude_b", allow_hyphen_values = true)]
    longitude_b: Option<f64>,
    /// Number of intermediary points
    #[arg(long = "n")]
    n: Option<u32>,
    /// Sphere radius in kilometers used for the distance
    #[arg(long, default_value_t = EARTH_RADIUS_KM)]
    radius_km: f64,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn input(&self) -> CoordinateInput {
        CoordinateInput {
            latitude_a: self.latitude_a,
            longitude_a: self.longitude_a,
            latitude_b: self.latitude_b,
            longitude_b: self.longitude_b,
            n: self.n,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = cli.input().resolve()?;
    let calculator = Calculator::new().with_radius_km(cli.radius_km);
    let result = calculator.compute(&resolved.pair, resolved.n)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if resolved.is_demo {
        println!("Using demo data: from Dodger Stadium to Fenway Park!");
    } else {
        println!("Data Entered:");
    }

    let (a, b) = (resolved.pair.a, resolved.pair.b);
    println!("Location A (Lat/Long): ({}, {})", a.latitude, a.longitude);
    println!("Location B (Lat/Long): ({}, {})", b.latitude, b.longitude);
    println!("{}", requested_points_line(resolved.n));
    println!("------------------------------------");

    print_result(&result);
    Ok(())
}

fn requested_points_line(n: Option<u32>) -> String {
    match n {
        Some(0) | None => "Intermediary (n) points not entered".to_string(),
        Some(n) => format!("Find {n} intermediary points."),
    }
}

fn print_result(result: &ComputationResult) {
    println!(
        "The midpoint is located at {:.4}, {:.4}.\n",
        result.midpoint.latitude, result.midpoint.longitude
    );

    if result.has_intermediary_points() {
        println!(
            "{} intermediary points were calculated:\n",
            result.intermediary_points.len()
        );
        for (i, point) in result.intermediary_points.iter().enumerate() {
            println!("{}: {:.4}, {:.4}", i + 1, point.latitude, point.longitude);
        }
    } else if result.n == Some(1) {
        println!("A single intermediary point is the midpoint itself.");
    } else {
        println!("No intermediary points were requested.");
    }

    println!("\nGreat-circle distance: {:.1} km", result.distance_km);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_count_as_not_entered() {
        assert_eq!(
            requested_points_line(Some(0)),
            "Intermediary (n) points not entered"
        );
        assert_eq!(
            requested_points_line(None),
            "Intermediary (n) points not entered"
        );
        assert_eq!(requested_points_line(Some(5)), "Find 5 intermediary points.");
    }
}
