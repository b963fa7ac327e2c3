// Compute the Pearson or Spearman correlation between two columns of a table.

use ndarray::{array, Array1};
use std::{env, error::Error, time::Instant};
use tracing_subscriber::EnvFilter;

use rankcorr::{Correlator, Method};

mod input;

use input::{open_input, read_columns};

const USAGE: &str = "Usage: rankcorr <input_file> <method> [--x-column NAME] [--y-column NAME] [--time]\n       rankcorr demo\nMethods: pearson, spearman\nInput: tab-separated file with a header row (.gz accepted)\n--time: print load and compute durations";

struct Args {
    file_path: String,
    method: Method,
    x_column: Option<String>,
    y_column: Option<String>,
    time_tracking: bool,
}

enum Command {
    Demo,
    Run(Args),
}

fn parse_args() -> Result<Command, Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() == 2 && args[1] == "demo" {
        return Ok(Command::Demo);
    }
    if args.len() < 3 {
        return Err(USAGE.into());
    }

    let method: Method = args[2]
        .parse()
        .map_err(|_| format!("Unknown correlation method: {}\n{}", args[2], USAGE))?;

    let mut x_column = None;
    let mut y_column = None;
    let mut time_tracking = false;

    // Parse remaining arguments.
    let mut i = 3;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--time" {
            time_tracking = true;
            i += 1;
        } else if arg == "--x-column" {
            let value = args.get(i + 1).ok_or("Missing value for --x-column")?;
            x_column = Some(value.clone());
            i += 2;
        } else if let Some(value) = arg.strip_prefix("--x-column=") {
            x_column = Some(value.to_string());
            i += 1;
        } else if arg == "--y-column" {
            let value = args.get(i + 1).ok_or("Missing value for --y-column")?;
            y_column = Some(value.clone());
            i += 2;
        } else if let Some(value) = arg.strip_prefix("--y-column=") {
            y_column = Some(value.to_string());
            i += 1;
        } else {
            return Err(format!("Unknown argument: {}", arg).into());
        }
    }

    Ok(Command::Run(Args {
        file_path: args[1].clone(),
        method,
        x_column,
        y_column,
        time_tracking,
    }))
}

fn print_result(method: Method, label: &str, result: rankcorr::Result<f64>) {
    match result {
        Ok(r) if r.is_finite() => println!("{} correlation ({}): {}", method, label, r),
        Ok(r) => println!("{} correlation ({}): {} (degenerate input)", method, label, r),
        Err(e) => println!("{} correlation ({}): {}", method, label, e),
    }
}

fn run_demo() {
    let x: Array1<f64> = array![3.2, 2.6, 3.8];
    let y = array![6.4, 5.2, 7.6];
    let y_perturbed = array![6.4, 5.2, 7.6 + 2.0];

    for method in [Method::Pearson, Method::Spearman] {
        print_result(method, "x vs y", method.correlate(x.view(), y.view()));
        print_result(
            method,
            "x vs perturbed y",
            method.correlate(x.view(), y_perturbed.view()),
        );
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let load_start = args.time_tracking.then(Instant::now);
    let columns = read_columns(
        open_input(&args.file_path)?,
        args.x_column.as_deref(),
        args.y_column.as_deref(),
    )?;
    if let Some(start) = load_start {
        println!("Data loaded in {:.3} seconds.", start.elapsed().as_secs_f64());
    }
    tracing::info!(
        file = %args.file_path,
        rows = columns.x.len(),
        x = %columns.x_name,
        y = %columns.y_name,
        "loaded input columns"
    );

    let compute_start = args.time_tracking.then(Instant::now);
    let result = args.method.correlate(columns.x.view(), columns.y.view())?;
    if let Some(start) = compute_start {
        println!(
            "{} correlation computed in {:.6} seconds.",
            args.method,
            start.elapsed().as_secs_f64()
        );
    }

    if !result.is_finite() {
        tracing::warn!(
            method = %args.method,
            "correlation is not finite; one column may be constant"
        );
    }
    println!(
        "{} correlation ({} vs {}, n = {}): {}",
        args.method,
        columns.x_name,
        columns.y_name,
        columns.x.len(),
        result
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match parse_args()? {
        Command::Demo => {
            run_demo();
            Ok(())
        }
        Command::Run(args) => run(args),
    }
}
