use std::io;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware::Logger, web};
use config::{Config, Environment, File};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use dotenvy::dotenv;
use tera::Tera;

use pushkind_shelf::models::config::ServerConfig;
use pushkind_shelf::repository::DieselRepository;
use pushkind_shelf::routes::{configure, cors};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP").try_parsing(true))
        .build()?
        .try_deserialize()
}

fn to_io_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config =
        load_config().map_err(|e| to_io_error("Failed to load configuration", e))?;

    let pool = pushkind_shelf::db::establish_connection_pool(&server_config.database_url)
        .map_err(|e| to_io_error("Failed to open database", e))?;

    {
        let mut conn = pool
            .get()
            .map_err(|e| to_io_error("Failed to get database connection", e))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| to_io_error("Failed to run migrations", e))?;
    }

    let repo = DieselRepository::new(pool);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| to_io_error("Failed to parse templates", e))?;

    let address = (server_config.address.clone(), server_config.port);
    log::info!("Starting server at http://{}:{}", address.0, address.1);

    let static_dir = server_config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .service(Files::new("/assets", &static_dir))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(configure)
    })
    .bind(address)?
    .run()
    .await
}
