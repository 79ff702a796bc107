use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::Path;
use subnet_calc::cli::{execute, Args};
use subnet_calc::output::{render_json, render_text};
use subnet_calc::CalcConfig;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let args = Args::parse();
    let config = CalcConfig::from_env().with_max_subnets(args.max_subnets);

    let report = args
        .request()
        .and_then(|request| execute(&request, &config));
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        print!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report, args.use_color()));
    }

    Ok(())
}

/// Use log4rs.yml when present, otherwise warnings and errors go to stderr.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
