use clap::{ArgAction, Parser};
use std::path::PathBuf;
use wifigeo_core::geo::client::DEFAULT_ENDPOINT;

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn a WiFi scan capture into a geolocation request", long_about = None)]
pub struct Cli {
    /// Binary capture file (count-prefixed access point records + connected network name)
    pub input_file: PathBuf,

    /// Your Google API key for geocoding
    #[arg(long, env = "WIFIGEO_API_KEY", hide_env_values = true)]
    pub geokey: Option<String>,

    /// Geolocation endpoint to POST to
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Also write the JSON payload to this path
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Sets the level of verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
