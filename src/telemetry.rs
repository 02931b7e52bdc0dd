use log::Level;

/// Route `log` output to the browser console.
///
/// Falls back to `info` for a level string `log` does not recognise.
pub fn init(level: &str) {
    let level = level.parse().unwrap_or(Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::warn!("console logger already installed");
    }
}
