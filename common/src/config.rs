#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the banner printed when the session starts.
    pub no_banner: bool,
    /// Strips ANSI colors from everything written to stdout.
    pub no_color: bool,
    /// Number of `-v` flags. Raises the diagnostic log level.
    ///
    /// Ignored when `RUST_LOG` is set.
    pub verbosity: u8,
}

impl Config {
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
