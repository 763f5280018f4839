use sort_trace::request::{parse_array, TraceRequest};
use sort_trace::{Algorithm, TraceError};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: trace <algorithm> [OPTIONS]");
    eprintln!("       trace --request '<json body>'");
    eprintln!();
    let names = Algorithm::ALL.map(Algorithm::name).join(", ");
    eprintln!("Algorithms: {names}");
    eprintln!();
    eprintln!("  -d, --direction <asc|desc>  Sort direction (default asc)");
    eprintln!("  -n, --size <N>              Generated array size, 5..=100 (default 50)");
    eprintln!("  -s, --seed <SEED>           Seed for a reproducible generated array");
    eprintln!("  -a, --array <1,2,3>         Sort this array instead of a generated one");
    eprintln!("  -r, --request <JSON>        Full request body as JSON");
    eprintln!("  -p, --pretty                Pretty-print the JSON response");
}

fn flag_value<'a>(
    args: &mut impl Iterator<Item = &'a String>,
    name: &'static str,
) -> Result<&'a String, TraceError> {
    args.next().ok_or(TraceError::MissingArgument(name))
}

fn parse_args(args: &[String]) -> Result<(TraceRequest, bool), Box<dyn std::error::Error>> {
    let mut request = TraceRequest::default();
    let mut pretty = false;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-d" | "--direction" => {
                request.direction = Some(flag_value(&mut iter, "--direction")?.clone());
            }
            "-n" | "--size" => {
                request.size = Some(flag_value(&mut iter, "--size")?.parse()?);
            }
            "-s" | "--seed" => {
                request.seed = Some(flag_value(&mut iter, "--seed")?.parse()?);
            }
            "-a" | "--array" => {
                request.array = Some(parse_array(flag_value(&mut iter, "--array")?)?);
            }
            "-r" | "--request" => {
                request = TraceRequest::from_json(flag_value(&mut iter, "--request")?)?;
            }
            "-p" | "--pretty" => pretty = true,
            name => request.algorithm = name.to_string(),
        }
    }

    if request.algorithm.is_empty() {
        return Err(TraceError::MissingArgument("algorithm").into());
    }
    Ok((request, pretty))
}

/// Report a bad request the same way whether it failed parsing or lookup
fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {error}\n");
    print_usage();
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let (request, pretty) = parse_args(&args).unwrap_or_else(|e| fail(e));
    let response = request.run().unwrap_or_else(|e| fail(e));

    if pretty {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", serde_json::to_string(&response)?);
    }
    Ok(())
}
