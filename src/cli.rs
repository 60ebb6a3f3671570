use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter for the Brine scripting language", long_about = None)]
pub struct Args {
    /// Script to run; `-` reads the script from stdin.
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: LevelFilter,

    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long = "show-tokens")]
    pub show_tokens: bool,

    #[arg(long = "show-ast")]
    pub show_ast: bool,

    #[arg(long = "no-run")]
    pub no_run: bool,

    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Complete {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "Invalid color choice: {}. Must be 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Args::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, &bin_name, &mut io::stdout());
}
