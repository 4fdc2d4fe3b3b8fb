//! ctxlog CLI - Command-line interface
//!
//! Emits one message through the context-carried logging facade, with the
//! threshold and sink taken from flags or `CTXLOG_*` environment variables.

mod error;
mod runner;

use clap::Parser;
use ctxlog::config::{LoggingConfig, SinkKind};
use ctxlog::{debugf, errorf, infof, warningf, Context, Level};
use error::CliError;
use runner::CliRunner;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ctxlog")]
#[command(version = ctxlog::VERSION)]
#[command(about = "Emit a leveled log message through a configured logger", long_about = None)]
struct Args {
    /// Minimum level that is emitted (debug, info, warning, error)
    #[arg(long)]
    level: Option<Level>,

    /// Where messages go (stderr, stdout, tracing, null)
    #[arg(long)]
    sink: Option<SinkKind>,

    /// Directory for the tracing log file
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Severity of the message (debug, info, warning, error)
    severity: Level,

    /// Message text; words are joined with spaces
    #[arg(required = true)]
    message: Vec<String>,
}

impl Args {
    /// Environment-derived config with flags layered on top.
    fn config(&self) -> Result<LoggingConfig, CliError> {
        let mut config = LoggingConfig::from_env()?;
        if let Some(level) = self.level {
            config = config.with_level(level);
        }
        if let Some(sink) = self.sink {
            config = config.with_sink(sink);
        }
        if let Some(dir) = &self.log_dir {
            config = config.with_log_dir(dir.clone());
        }
        Ok(config)
    }
}

fn emit(ctx: &Context, severity: Level, message: &str) {
    match severity {
        Level::DEBUG => debugf!(ctx, "{}", message),
        Level::INFO => infof!(ctx, "{}", message),
        Level::WARNING => warningf!(ctx, "{}", message),
        _ => errorf!(ctx, "{}", message),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = args.config()?;
    let runner = CliRunner::new(&config)?;
    emit(runner.context(), args.severity, &args.message.join(" "));
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        e.exit();
    }
}
