/// Initialises the global logger: `Debug` when verbose, `Info` otherwise.
/// Records carry no timestamps.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}
