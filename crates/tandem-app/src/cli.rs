use clap::Parser;

/// Tandem: several accounts of one web messenger, side by side.
#[derive(Parser, Debug)]
#[command(name = "tandem", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Session registry file override.
    #[arg(long)]
    pub state_file: Option<String>,

    /// Do not rebuild saved sessions at startup; each opens when selected.
    #[arg(long)]
    pub no_restore: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_with_no_flags() {
        let args = Args::try_parse_from(["tandem"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.state_file.is_none());
        assert!(!args.no_restore);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "tandem",
            "--config",
            "/tmp/c.toml",
            "--log-level",
            "debug",
            "--state-file",
            "/tmp/s.json",
            "--no-restore",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/c.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.state_file.as_deref(), Some("/tmp/s.json"));
        assert!(args.no_restore);
    }
}
