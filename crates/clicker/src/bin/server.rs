use std::env;
use std::fs::File;

use simplelog::*;

use clicker::driver::LoggingDriver;
use clicker::server;

const LOG_FILE: &str = "log.txt";

pub fn main() -> server::Result<()> {
    let root_path = env::current_dir()?;

    CombinedLogger::init(vec![
        WriteLogger::new(
            LevelFilter::Info,
            Config::default(),
            File::create(root_path.join(LOG_FILE))?,
        ),
        #[cfg(debug_assertions)]
        TermLogger::new(
            LevelFilter::Debug,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    ])?;

    server::run_server(root_path, LoggingDriver::boxed)
}
