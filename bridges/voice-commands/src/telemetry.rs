/// Installs the global fmt subscriber used by hosts embedding the bridge.
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
