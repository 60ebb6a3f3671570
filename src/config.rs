use crate::cli::{Args, ColorChoice};

pub struct AppConfig {
    pub color_enabled: bool,
    pub show_tokens: bool,
    pub show_ast: bool,
    pub no_run: bool,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Self {
        let color_enabled = match args.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => atty::is(atty::Stream::Stderr) && atty::is(atty::Stream::Stdout),
        };

        AppConfig {
            color_enabled,
            show_tokens: args.show_tokens,
            show_ast: args.show_ast,
            no_run: args.no_run,
        }
    }
}
