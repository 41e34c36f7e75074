#[macro_use] extern crate log;

use dotenv::dotenv;
use tokio::net::TcpListener;

use docket::util::config::Config;
use docket::util::db;
use docket::{controllers, Context, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    info!("opening store at {} ...", config.database_url);
    let pool = db::establish(&config.database_url, config.pool_size)?;
    let app  = controllers::router(Context::new(pool));

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("listening on {} w/ {} store connections", listener.local_addr()?, config.pool_size);

    axum::serve(listener, app).await?;
    Ok(())
}
