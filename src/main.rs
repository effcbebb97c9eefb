use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use iconslicer::config::{ExtractConfig, DEFAULT_INPUT_PATH, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR};
use iconslicer::utils::logger::Logger;
use iconslicer::commands::{CommandFactory, IconsCommandFactory};

fn main() {
    let matches = ClapCommand::new("iconslicer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract the individual icons from pyramid.png")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Source image to crop from")
                .value_name("FILE")
                .default_value(DEFAULT_INPUT_PATH),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Existing directory the icons are written into")
                .value_name("DIR")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value(DEFAULT_LOG_FILE),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("Show the crop table and planned icon sizes without writing icons")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = ExtractConfig::new().set_verbose(matches.get_flag("verbose"));
    if let Some(input) = matches.get_one::<String>("input") {
        config = config.set_input_path(input);
    }
    if let Some(output_dir) = matches.get_one::<String>("output-dir") {
        config = config.set_output_dir(output_dir);
    }
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        config = config.set_log_file(log_file);
    }

    let console_level = if config.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let logger = match Logger::init_global_logger(&config.log_file, console_level) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = IconsCommandFactory::new();

    let command_result = factory.create_command(&matches, config, logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
