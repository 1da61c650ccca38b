//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
   _____       __       __         __
  / ___/____ _/ /______/ /_  ___  / /
  \__ \/ __ `/ __/ ___/ __ \/ _ \/ /
 ___/ / /_/ / /_/ /__/ / / /  __/ /
/____/\__,_/\__/\___/_/ /_/\___/_/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api", addr);
    info!("Health:    http://{}/health", addr);
    info!("{}", separator);
}
