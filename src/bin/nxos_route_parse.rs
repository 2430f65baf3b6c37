use route_table_report::config;
use route_table_report::{run, Dialect};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    config::init_logging();
    //
    log::info!("#Start main()");

    run(Dialect::Nxos)?;

    Ok(())
}
