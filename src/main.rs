use std::io::Write;

use tee::{Destination, Result, TeeStream};

pub mod config;
pub mod logs;
pub mod tee;
pub mod utils;

fn main() -> Result<()> {
    let config = config::load_config_relative("config.toml")?;
    logs::setup_logger(&config.logging);

    log::info!("Tee output ready.");

    let Some(stream) = logs::tee_target(&config.logging) else {
        log::warn!("No log file configured, nothing to tee into.");
        return Ok(());
    };

    run_demo(stream)
}

fn run_demo(mut stream: TeeStream) -> Result<()> {
    writeln!(stream, "hello world!")?;

    stream.enable_timestamp(Destination::First);
    writeln!(stream, "this line carries a timestamp in the log file")?;

    stream.force_message("checkpoint reached")?;
    log::info!("Forced message stamped at {}", stream.last_timestamp());

    stream.flush()?;
    Ok(())
}
