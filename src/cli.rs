use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PATTERN: &str = "patterns/plus.p";

/// Game of Life: press any key to advance one generation
#[derive(Debug, Clone, Parser)]
#[command(name = "bordered_life", version, about)]
pub struct Cli {
    /// Pattern file to load at startup
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: PathBuf,

    /// Log filter, in env_logger syntax
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub rust_log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_bundled_pattern() {
        let cli = Cli::try_parse_from(["bordered_life"]).unwrap();
        assert_eq!(cli.pattern, PathBuf::from(DEFAULT_PATTERN));
    }

    #[test]
    fn test_pattern_override() {
        let cli = Cli::try_parse_from(["bordered_life", "--pattern", "glider.p"]).unwrap();
        assert_eq!(cli.pattern, PathBuf::from("glider.p"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["bordered_life", "--speed", "3"]).is_err());
    }
}
