use brine::cli::{generate_completions, Args, Commands};
use brine::config::AppConfig;
use brine::interpreter::{Interpreter, Parser as BrineParser};
use brine::lexer;
use clap::Parser;
use owo_colors::OwoColorize;
use std::fs::File;
use std::io::{self, Read};

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    if let Err(e) = init_logging(&args) {
        fail(&config, &format!("Failed to open log file: {}", e));
    }

    let Some(script) = args.script.as_deref() else {
        fail(&config, "No script provided. Pass a path, or '-' for stdin");
    };

    let source = match read_source(script) {
        Ok(source) => source,
        Err(e) => fail(&config, &e),
    };

    log::info!("interpreting script '{}'", script);

    if config.show_tokens {
        match lexer::tokenize(&source) {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{}", token);
                }
            }
            Err(e) => fail(&config, &e.to_string()),
        }
    }

    let program = match BrineParser::new(&source).and_then(|mut parser| parser.parse()) {
        Ok(program) => program,
        Err(e) => fail(&config, &e.to_string()),
    };

    if config.show_ast {
        match serde_json::to_string_pretty(&program.to_json()) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => fail(&config, &format!("Failed to render syntax tree: {}", e)),
        }
    }

    if config.no_run {
        log::info!("skipping execution");
        return;
    }

    let mut interpreter = Interpreter::new();
    if let Err(e) = interpreter.run(&program) {
        fail(&config, &e.to_string());
    }
}

fn init_logging(args: &Args) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(args.log_level);

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn read_source(script: &str) -> Result<String, String> {
    if script == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(script).map_err(|e| format!("Failed to read {}: {}", script, e))
    }
}

fn fail(config: &AppConfig, message: &str) -> ! {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
    std::process::exit(1);
}
