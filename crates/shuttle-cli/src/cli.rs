use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

/// The surface the molecular-dynamics driver invokes once per simulation
/// step: the step-file path is the only positional argument, everything
/// else is optional so the driver's fixed command line keeps working.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "qmshuttle - translates one molecular-dynamics QM/MM step into an external quantum-chemistry engine run and back.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the driver-format step input file.
    #[arg(value_name = "STEP_FILE")]
    pub step_file: PathBuf,

    /// Path to the bridge configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
