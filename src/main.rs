//! launchdeck CLI entry point.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use launchdeck::logging::{Verbosity, init_logging};
use launchdeck::{DeckConfig, Slide, render_slide, terminal};

/// Terminal slideshow of SpaceX's history and organizational chart.
#[derive(Parser, Debug)]
#[command(
    name = "launchdeck",
    version = env!("LAUNCHDECK_VERSION"),
    about = "Terminal slideshow of SpaceX's history and organizational chart"
)]
struct Cli {
    /// Print one slide with its animations completed, then exit
    /// (hero, figures, orgchart, credits or 1-4)
    #[arg(short = 'r', long = "render", value_name = "SLIDE")]
    render: Option<String>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Width of a static render
    #[arg(long = "width", default_value = "100")]
    width: usize,

    /// Height of a static render
    #[arg(long = "height", default_value = "36")]
    height: usize,

    /// Seed for the starfields
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Config file (defaults to ~/.config/launchdeck/config.toml)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Write a static render to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// More logging (repeat for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Append log output to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);

    // The interactive deck owns the screen: log only when a file is given.
    if cli.render.is_some() || cli.log_file.is_some() {
        if let Err(e) = init_logging(verbosity, cli.log_file.as_deref()) {
            fail(e);
        }
    }

    let mut config = match DeckConfig::load_from(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => fail(e),
    };
    if cli.use_ascii {
        config.unicode = false;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let Some(name) = cli.render else {
        if let Err(e) = terminal::run(config) {
            fail(e);
        }
        return;
    };

    let slide: Slide = match name.parse() {
        Ok(s) => s,
        Err(e) => fail(e),
    };
    let rendered = match render_slide(slide, cli.width, cli.height, &config) {
        Ok(s) => s,
        Err(e) => fail(e),
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path.display(), e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
