use log::LevelFilter;

/// Routes `log` output to stderr. `RUST_LOG` is honoured, then overridden by `level`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_target(false)
        .init();
}
