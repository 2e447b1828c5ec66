use std::path::PathBuf;

use log::info;

use crate::communication::Connection;
use crate::driver::DriverFactory;
use crate::server;
use crate::server::config::Config;
use crate::server::Result;

/// Serves one client over stdin/stdout until it exits or closes its input.
pub fn run_server(root_path: PathBuf, driver: DriverFactory) -> Result<()> {
    let config = Config::load(root_path)?;
    info!("server will start in {}", config.root_path().display());

    let (connection, io_threads) = Connection::stdio();
    server::main_loop(config, connection, driver)?;

    io_threads.join()?;
    info!("server did shut down");
    Ok(())
}
