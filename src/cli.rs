use clap::Parser;

/// Command-line arguments for the greeter.
#[derive(Debug, Default, Parser)]
#[command(
    name = "greeter",
    version,
    about = "Prints a greeting for the name passed on the command line.",
    long_about = None,
    args_override_self = true,
    infer_long_args = true
)]
pub struct Args {
    /// Name to include in the greeting.
    #[arg(long)]
    pub name: Option<String>,
}
