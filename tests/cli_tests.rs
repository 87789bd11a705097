#[cfg(test)]
mod tests {
    use clap::Parser;
    use splashrs::cli::Args;
    use std::path::PathBuf;

    #[test]
    fn test_args_without_flags() {
        let args = Args::parse_from(["test"]);
        assert!(args.config.is_none());
        assert!(args.asset_dir.is_none());
        assert!(args.frame_count.is_none());
        assert!(!args.headless);
        assert!(!args.exit_on_eof);
    }

    #[test]
    fn test_args_with_config_and_level() {
        let args = Args::parse_from(["test", "--config", "boot.toml", "--log-level", "debug"]);
        assert_eq!(args.config, Some(PathBuf::from("boot.toml")));
        assert_eq!(args.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_non_numeric_frame_count_is_rejected() {
        assert!(Args::try_parse_from(["test", "--frame-count", "many"]).is_err());
    }
}
