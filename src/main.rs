/* 3rd party libraries */
use clap::Parser;
use log::info;
use serde_json::json;
use std::path::{Path, PathBuf};

/* Custom libraries */
use scan_elevator::config::{self, Config};
use scan_elevator::error::ConfigError;
use scan_elevator::elevator::{Car, ChannelHook, FixedDelay, Step};
use scan_elevator::unwrap_or_exit;

/// Single-car elevator simulator with a directional scan schedule.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Number of floors, overrides the configuration file
    #[clap(short, long)]
    floors: Option<i32>,

    /// Trace every step the car takes
    #[clap(short, long)]
    verbose: bool,

    /// Pause per floor travelled, in milliseconds
    #[clap(long)]
    step_delay_ms: Option<u64>,

    /// Print one JSON object per request instead of plain text
    #[clap(long)]
    json: bool,

    /// Floors to request, in order. Falls back to the configured list
    #[clap(allow_hyphen_values = true)]
    requests: Vec<i32>,
}

/* Main */
fn main() {
    let args = Args::parse();

    // Load the configuration before logging so its verbose flag is known
    let loaded = load_config(args.config.as_deref());
    let verbose = wants_verbose(&args, &loaded);

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .init();

    let mut config = unwrap_or_exit!(loaded);
    let json_output = args.json;
    apply_overrides(&mut config, args);

    // Create the car
    let (step_hook, step_rx) = ChannelHook::unbounded();
    let delay_hook = FixedDelay::from_millis(config.demo.step_delay_ms);
    let mut car = Car::from_config(&config.car).with_hook((delay_hook, step_hook));

    info!("Starting demo");
    info!("Floors {}", car.floor_count());

    for &floor in &config.demo.requests {
        let result = car.request(floor);
        let steps: Vec<Step> = step_rx.try_iter().collect();

        if json_output {
            let line = json!({
                "request": floor,
                "accepted": result.is_ok(),
                "error": result.as_ref().err().map(|e| e.to_string()),
                "steps": steps,
                "state": car.state(),
            });
            println!("{}", line);
        } else {
            match result {
                Ok(_) => println!(
                    "request {:>3}: at floor {} going {}, pending {:?}",
                    floor,
                    car.current_floor(),
                    car.direction(),
                    car.pending_floors()
                ),
                Err(e) => println!("request {:>3}: {}", floor, e),
            }
        }
    }

    info!("End of demo");
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => config::load_config(path),
        None if Path::new(config::DEFAULT_CONFIG_PATH).exists() => {
            config::load_config(config::DEFAULT_CONFIG_PATH)
        }
        None => Ok(Config::default()),
    }
}

fn wants_verbose(args: &Args, loaded: &Result<Config, ConfigError>) -> bool {
    args.verbose || matches!(loaded, Ok(config) if config.car.verbose)
}

fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Command line flags take precedence over the configuration file.
fn apply_overrides(config: &mut Config, args: Args) {
    if let Some(floors) = args.floors {
        config.car.n_floors = floors;
    }
    if let Some(delay) = args.step_delay_ms {
        config.demo.step_delay_ms = delay;
    }
    config.car.verbose |= args.verbose;
    if !args.requests.is_empty() {
        config.demo.requests = args.requests;
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod main_tests {
    use super::*;

    #[test]
    fn test_verbose_config_raises_log_filter() {
        // Purpose: Verify that `verbose = true` in the configuration alone makes the trace visible
        // Arrange
        let loaded = config::parse_config("[car]\nn_floors = 6\nverbose = true\n");
        let args = Args::parse_from(["scan-elevator"]);

        // Act
        let verbose = wants_verbose(&args, &loaded);

        // Assert
        assert!(verbose);
        assert_eq!(log_filter(verbose), "info");
    }

    #[test]
    fn test_quiet_by_default() {
        let loaded = config::parse_config("[car]\nn_floors = 6\n");
        let args = Args::parse_from(["scan-elevator"]);

        assert!(!wants_verbose(&args, &loaded));
        assert_eq!(log_filter(false), "warn");

        let args = Args::parse_from(["scan-elevator", "--verbose"]);
        assert!(wants_verbose(&args, &loaded));
    }

    #[test]
    fn test_apply_overrides() {
        // Arrange
        let mut config = Config::default();
        let args = Args::parse_from([
            "scan-elevator",
            "--floors",
            "8",
            "--step-delay-ms",
            "5",
            "--verbose",
            "3",
            "7",
        ]);

        // Act
        apply_overrides(&mut config, args);

        // Assert
        assert_eq!(config.car.n_floors, 8);
        assert!(config.car.verbose);
        assert_eq!(config.demo.step_delay_ms, 5);
        assert_eq!(config.demo.requests, vec![3, 7]);
    }

    #[test]
    fn test_apply_overrides_keeps_configured_requests() {
        let mut config = config::parse_config("[demo]\nrequests = [6, 3]\n").unwrap();
        let args = Args::parse_from(["scan-elevator"]);

        apply_overrides(&mut config, args);

        assert_eq!(config.demo.requests, vec![6, 3]);
        assert!(!config.car.verbose);
    }
}
