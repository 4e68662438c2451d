//! Briefs a departure and arrival line from the command line.
//!
//! ```sh
//! FLIGHTWX_AVWX_TOKEN=... cargo run --example brief_flight -- \
//!     "ETD KJFK 15Jun / 1430" "ETA EGLL 16Jun / 0230"
//! ```

use flightwx::{AirportTable, ForecastRequest, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(etd), Some(eta)) = (args.next(), args.next()) else {
        eprintln!("usage: brief_flight \"ETD KJFK 15Jun / 1430\" \"ETA EGLL 16Jun / 0230\"");
        return Ok(());
    };

    let config = ServerConfig::from_env()?;
    let airports = AirportTable::load(&config.airports_csv).await?;
    let client = config.flightwx(airports)?;

    let briefing = client.brief(&ForecastRequest::new(etd, eta)).await?;
    println!("{}", briefing.etd_forecast);
    println!("{}", briefing.eta_forecast);

    Ok(())
}
