//! Msgforge's main application entry point.
//! Loads a template, substitutes its placeholders once per requested
//! payload and writes the results to stdout or a file.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use msgforge::{
    cli::{get_args, Args},
    error::{default_error_handler, ForgeError, ForgeResult},
    template::{substitute, substitute_with},
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Reads the template text from the given path, or from stdin when the
/// path is "-".
fn read_template(path: &Path) -> ForgeResult<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(ForgeError::TemplateError(format!(
            "template file does not exist: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn write_payloads(payloads: &[String], output: Option<&PathBuf>) -> ForgeResult<()> {
    match output {
        Some(path) => {
            let body = payloads.join("\n");
            std::fs::write(path, body + "\n").map_err(ForgeError::IoError)
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for payload in payloads {
                writeln!(handle, "{}", payload)?;
            }
            Ok(())
        }
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template from file or stdin
/// 2. Substitutes placeholders once per payload, seeded if requested
/// 3. Writes the payloads to the selected destination
fn run(args: Args) -> ForgeResult<()> {
    let template = read_template(&args.template)?;
    log::debug!("loaded template ({} bytes)", template.len());

    let payloads: Vec<String> = match args.seed {
        Some(seed) => {
            log::debug!("generating {} payload(s) with seed {}", args.count, seed);
            let mut rng = StdRng::seed_from_u64(seed);
            (0..args.count).map(|_| substitute_with(&mut rng, &template)).collect()
        }
        None => (0..args.count).map(|_| substitute(&template)).collect(),
    };

    write_payloads(&payloads, args.output.as_ref())?;

    if let Some(output) = args.output {
        log::debug!("wrote {} payload(s) to {}", payloads.len(), output.display());
    }
    Ok(())
}
