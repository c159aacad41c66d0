use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;

use taskboard::{
    auth::TokenService,
    config::Config,
    routes,
    store::{into_app_data, MemoryStore, PgStore},
};

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    log::error!("startup failed: {}", err);
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(startup_error)?;

    let (tasks, users) = match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url).await.map_err(startup_error)?;
            log::info!("Connected to the Database");
            into_app_data(store)
        }
        None => {
            log::warn!("DATABASE_URL is not set; tasks and users are kept in memory");
            into_app_data(MemoryStore::new())
        }
    };
    let tokens = web::Data::new(TokenService::new(&config.secret_key, config.token_ttl_secs));

    log::info!("Server started at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(tasks.clone())
            .app_data(users.clone())
            .app_data(tokens.clone())
            .app_data(routes::json_config())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
