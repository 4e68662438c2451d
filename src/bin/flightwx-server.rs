use flightwx::{server, AirportTable, ServerConfig};
use log::error;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let address = config.socket_addr()?;
    let airports = AirportTable::load(&config.airports_csv).await?;
    let client = config.flightwx(airports)?;

    server::run(address, Arc::new(client)).await;
    Ok(())
}
