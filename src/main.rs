use clap::Parser;
use hot_login::{args::Args, setup_logging, Outcome};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    setup_logging();
    let args = Args::parse();

    match hot_login::run(args).await {
        Ok(Outcome::LoggedIn) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
