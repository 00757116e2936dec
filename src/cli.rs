//! Command-line interface implementation for msgforge.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for msgforge.
#[derive(Parser, Debug)]
#[command(author, version, about = "msgforge: synthetic test-payload generation from ${...} templates", long_about = None)]
pub struct Args {
    /// Path to the template file, or "-" to read the template from stdin
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Number of independently substituted payloads to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Seed for the random generator, making the whole batch reproducible.
    /// Without a seed every payload draws from the thread-local generator.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the payloads to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
