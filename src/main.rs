use clap::Parser;
use std::error::Error;
use subnet_calculator::cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = cli::Args::parse();
    cli::run(args).await?;

    Ok(())
}
