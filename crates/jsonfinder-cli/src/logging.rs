/// Stderr logging arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[arg(long)]
    pub ts: bool,
}

impl LogArgs {
    /// Initialize stderr logging, starting from `default` verbosity.
    pub fn setup_logging(&self, default: u8) -> Result<(), Box<dyn std::error::Error>> {
        let log_level = match default.saturating_add(self.verbose) {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.ts {
                stderrlog::Timestamp::Second
            } else {
                stderrlog::Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
