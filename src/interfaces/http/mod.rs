use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::dev::Server;
use actix_web::{web, App, HttpResponse, HttpServer};
use futures_util::StreamExt as _;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::convert_table;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::xlsx::SpreadsheetWriter;

pub const OUTPUT_FILENAME: &str = "contatos_formatados.xlsx";

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Form field carrying the uploaded CSV.
const UPLOAD_FIELD: &str = "file";

pub struct HttpState {
    pub config: AppConfig,
}

async fn convert(state: web::Data<HttpState>, mut payload: Multipart) -> HttpResponse {
    match generate_spreadsheet(&state.config, &mut payload).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(XLSX_CONTENT_TYPE)
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", OUTPUT_FILENAME),
            ))
            .body(bytes),
        Err(err) => {
            error!(error = %err, "Conversion failed");
            error_response(&err)
        }
    }
}

/// User-facing messages stay in Portuguese; details go to the log only.
fn error_response(err: &AppError) -> HttpResponse {
    match err {
        AppError::MissingUpload => HttpResponse::BadRequest().body("Nenhum arquivo enviado."),
        AppError::CsvRead(_) => {
            HttpResponse::InternalServerError().body("Erro ao ler o arquivo CSV.")
        }
        AppError::Spreadsheet(_) => {
            HttpResponse::InternalServerError().body("Erro ao gerar o arquivo Excel.")
        }
        AppError::IoError(_) => {
            HttpResponse::InternalServerError().body("Erro ao enviar o arquivo Excel.")
        }
    }
}

/// Full per-request pipeline: receive the upload, parse, normalize, write
/// the workbook, read it back and clean up.
async fn generate_spreadsheet(config: &AppConfig, payload: &mut Multipart) -> Result<Vec<u8>> {
    let upload = receive_upload(payload, config).await?;

    let csv_bytes = tokio::fs::read(upload.path())
        .await
        .map_err(|e| AppError::CsvRead(e.to_string()))?;

    let table = CsvParser::new().parse_bytes(&csv_bytes)?;
    let contacts = convert_table(&table, &config.pipeline);
    info!(
        rows = table.rows.len(),
        contacts = contacts.len(),
        "Converted upload"
    );

    let output_path = config.upload_dir.join(format!("{}.xlsx", Uuid::new_v4()));
    let writer = SpreadsheetWriter::new(config.pipeline.include_organization_column);
    writer.write_to_path(&contacts, &output_path)?;

    // The workbook is buffered in full before the response is built, so the
    // file can be removed without racing the transfer. The uploaded temp
    // file is removed when `upload` drops.
    let workbook_bytes = tokio::fs::read(&output_path)
        .await
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;
    if let Err(err) = tokio::fs::remove_file(&output_path).await {
        warn!(
            error = %err,
            path = %output_path.display(),
            "Failed to remove generated spreadsheet"
        );
    }

    Ok(workbook_bytes)
}

/// Stream the `file` form field into a temp file in the upload directory.
/// Other fields are drained and ignored.
async fn receive_upload(payload: &mut Multipart, config: &AppConfig) -> Result<NamedTempFile> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| AppError::CsvRead(e.to_string()))?;

        if field.name() != UPLOAD_FIELD {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| AppError::CsvRead(e.to_string()))?;
            }
            continue;
        }

        let mut temp_file = NamedTempFile::new_in(&config.upload_dir)?;
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| AppError::CsvRead(e.to_string()))?;
            temp_file.write_all(&data)?;
        }
        temp_file.flush()?;
        return Ok(temp_file);
    }

    Err(AppError::MissingUpload)
}

pub fn start_server(config: AppConfig) -> std::io::Result<Server> {
    let bind_addr = (config.host.clone(), config.port);
    let state = web::Data::new(HttpState { config });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .route("/convert", web::post().to(convert))
            // Legacy alias kept for old bookmarks and forms.
            .route("/converter", web::post().to(convert))
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
