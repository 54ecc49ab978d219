/// Initializes the logger with the `env_logger` crate.
///
/// Safe to call more than once; later calls leave the first logger in place.
/// Verbosity is taken from `RUST_LOG`, falling back to `default_level`.
pub fn init_logger_with_level(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Initializes the logger with the `env_logger` crate at `warn` by default.
pub fn init_logger() {
    init_logger_with_level("warn");
}
