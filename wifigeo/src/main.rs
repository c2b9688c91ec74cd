mod application;

mod presentation {
    pub mod cli;
}

use wifigeo_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
