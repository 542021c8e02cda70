mod config;
mod error;
mod job_controller;
mod services;

use crate::config::Config;
use crate::job_controller::{FixedDelay, JobService, JobStore};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::sync::Arc;

fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() {
        return Cors::permissive();
    }
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // Provisioned for job artifacts; nothing writes to it yet.
    std::fs::create_dir_all(&config.jobs_dir)?;

    let jobs = JobService::new(
        JobStore::new(),
        Arc::new(FixedDelay::new(config.stage_delay())),
        config.unknown_job_policy,
    );

    info!(
        "Server running at http://{}:{} (stage delay {:?}, unknown jobs: {:?})",
        config.host,
        config.port,
        config.stage_delay(),
        config.unknown_job_policy
    );

    let app_jobs = jobs.clone();
    let allowed_origins = config.allowed_origins.clone();
    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors(&allowed_origins))
            .app_data(web::Data::new(app_jobs.clone()))
            .configure(|cfg| services::configure(cfg, json_limit))
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    jobs.shutdown();
    info!("Server stopped, background jobs cancelled");
    Ok(())
}
