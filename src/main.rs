use salvo::prelude::*;

#[macro_use]
extern crate log;

mod config;
mod database;
mod entity;
mod handlers;
mod seed;
mod state;
mod store;
mod validate;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let db = match database::connect(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("failed to open database: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(err) = seed::seed_pizzas(&db).await {
        error!("failed to seed pizzas: {:#}", err);
        std::process::exit(1);
    }

    let state = match state::AppState::new(db) {
        Ok(state) => state,
        Err(e) => {
            error!("failed to initialize application state: {:#}", e);
            std::process::exit(1);
        }
    };

    let router = handlers::router(state, config.secret_key);

    info!("listening on {}", config.bind_addr);
    let acceptor = TcpListener::new(config.bind_addr).bind().await;
    Server::new(acceptor).serve(router).await;
}
