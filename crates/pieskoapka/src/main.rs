use std::io;

use pieskoapka::app::App;
use pieskoapka::config::AppConfig;

fn main() -> io::Result<()> {
    let config = AppConfig::from_env().map_err(io::Error::other)?;
    pieskoapka::logging::init(&config)?;

    let mut app = App::new(&config);

    pieskoapka::runtime::run(&mut app)
}
