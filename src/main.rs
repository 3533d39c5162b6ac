use color_eyre::eyre::WrapErr;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use std::env;
use std::time::Instant;
use web::{AppData, PlannerServer};

const DEFAULT_PORT: u16 = 18000;
const DEFAULT_PLANS_DIR: &str = "plans";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let port = match env::var("PORT") {
        Ok(value) => value
            .parse::<u16>()
            .wrap_err_with(|| format!("invalid PORT: {}", value))?,
        Err(_) => DEFAULT_PORT,
    };

    let plans_dir = env::var("PLANS_DIR").unwrap_or_else(|_| DEFAULT_PLANS_DIR.to_string());

    let now = Instant::now();

    let database = DatabaseLoader::load().wrap_err("failed to load database")?;

    info!("database loaded: {} ms", now.elapsed().as_millis());

    let planner = DatabaseGenerator::generate(&database);

    info!(
        "{} formats, {} squad players, plans stored in {}",
        planner.formats.formats().len(),
        planner.squad.len(),
        plans_dir
    );

    let data = AppData::new(planner, plans_dir);

    PlannerServer::new(data, port)
        .run()
        .await
        .wrap_err("server stopped")?;

    Ok(())
}
