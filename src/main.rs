use std::io;

use tracing::info;

use conversor_contatos::domain::error::AppError;
use conversor_contatos::infrastructure::config::AppConfig;
use conversor_contatos::interfaces::http::start_server;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load().map_err(into_io_error)?;
    std::fs::create_dir_all(&config.upload_dir)?;

    info!(host = %config.host, port = config.port, "Starting server");
    start_server(config)?.await
}

fn into_io_error(err: AppError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}
