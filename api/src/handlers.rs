use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use estate_extractor::{extract_pdf_text, ExtractionError};

use crate::error_response::ErrorResponse;
use crate::state::AppState;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Real Estate PDF Extractor</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 40px;
            background-color: #f4f4f4;
            color: #333;
        }
        .container {
            max-width: 600px;
            margin: auto;
            background: #fff;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
        }
        h1 {
            color: #5C677D;
        }
        p {
            line-height: 1.6;
        }
        .upload-btn {
            display: inline-block;
            padding: 10px 15px;
            background-color: #5C677D;
            color: white;
            border: none;
            border-radius: 5px;
            margin-top: 10px;
            cursor: pointer;
        }
        .upload-btn:hover {
            background-color: #4A5568;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Welcome to the Real Estate PDF Extractor!</h1>
        <p>Upload a Japanese real estate PDF and the service will extract the key listing fields, translate them into English, and return them as a downloadable JSON file.</p>
        <form action="/extract-data/" method="post" enctype="multipart/form-data">
            <input type="file" name="pdf_file" accept="application/pdf" required>
            <button type="submit" class="upload-btn">Extract Data</button>
        </form>
    </div>
</body>
</html>
"#;

pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn extract_data(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            log::warn!("extract request arrived with no file field");
            return error(StatusCode::BAD_REQUEST, "No file uploaded.");
        }
        Err(e) => {
            log::warn!("failed to read multipart body: {}", e);
            return error(
                StatusCode::BAD_REQUEST,
                format!("Failed to read upload: {}", e),
            );
        }
    };

    let filename = field.file_name().unwrap_or("upload.pdf").to_string();
    let data = match field.bytes().await {
        Ok(data) => data,
        Err(e) => {
            log::warn!("failed to read file bytes: {}", e);
            return error(
                StatusCode::BAD_REQUEST,
                format!("Failed to read upload: {}", e),
            );
        }
    };

    log::info!("received {} ({} bytes)", filename, data.len());

    // PDF parsing is CPU-bound, keep it off the async worker threads.
    let extracted = match tokio::task::spawn_blocking(move || extract_pdf_text(&data)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            log::error!("PDF text extraction failed: {:#}", e);
            return error(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e));
        }
        Err(e) => {
            log::error!("extraction task failed: {}", e);
            return error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    if extracted.trim().is_empty() {
        log::warn!("no extractable text in {}", filename);
        return error(
            StatusCode::BAD_REQUEST,
            "Could not extract text from the PDF file.",
        );
    }

    log::info!(
        "extracted {} characters from {}",
        extracted.chars().count(),
        filename
    );

    match state.extraction.extract(&extracted).await {
        Ok(value) => (
            StatusCode::OK,
            [(
                header::CONTENT_DISPOSITION,
                "attachment; filename=extracted_data.json",
            )],
            Json(value),
        )
            .into_response(),
        Err(ExtractionError::InvalidModelOutput(e)) => {
            log::error!("model output was not valid JSON: {}", e);
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse JSON from the model response. The model might not have returned a valid JSON object.",
            )
        }
        Err(e) => {
            log::error!("extraction failed: {}", e);
            error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
