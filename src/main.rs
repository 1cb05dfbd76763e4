use clap::Parser;
use drills::Program;
use drills::core::config::{self, DrillsConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(
    name = "drills",
    about = "Small terminal UI drills: kanban, spinner, layout"
)]
struct Args {
    /// Drill to run (overrides config and DRILLS_PROGRAM)
    #[arg(short, long, value_enum)]
    program: Option<Program>,

    /// Log level written to drills.log
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            (DrillsConfig::default(), Some(e))
        }
    };
    let resolved = config::resolve(&file_config, args.program, args.log_level.as_deref());

    // Initialize file logger - writes to drills.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("drills.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Drills starting up with program: {:?}", resolved.program);
    log::debug!("Resolved config: {:?}", resolved);

    drills::tui::run(resolved)
}
