//! Download commands - plan the export request and render destinations

use crate::{
    TransyncError,
    config::{PathFormat, ProjectConfig},
    output,
    requests::{TOKEN_HEADER, plan_download},
    template::render_download_path,
};

type Result<T> = std::result::Result<T, TransyncError>;

/// Execute the download command
///
/// # Errors
/// Returns an error if configuration is incomplete or the request URL cannot be built
pub fn execute(config: &ProjectConfig, path_format: PathFormat, json: bool, quiet: bool) -> Result<()> {
    let request = plan_download(config)?;
    let template = config.download_path.as_deref().unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    println!("{} {}", request.method, request.url);
    if quiet {
        return Ok(());
    }
    if request.token_header.is_none() {
        output::warning(&format!("'api_key' is not set, the request carries no {TOKEN_HEADER} header"));
    }

    match config.language_key.as_deref() {
        Some(language) => {
            let destination = render_download_path(template, language, config.namespace.as_deref())?;
            output::info(&format!("Files will be written to {}", output::format_path(&destination, path_format)));
        }
        None => output::info(&format!("Files will be written to {template}")),
    }

    Ok(())
}

/// Execute the download-path command
///
/// # Errors
/// Returns an error if `download_path` is not configured or is malformed
pub fn execute_path(config: &ProjectConfig, language: &str, namespace: Option<&str>, path_format: PathFormat) -> Result<()> {
    let template = config.download_path.as_deref().ok_or_else(|| {
        TransyncError::InvalidInput("'download_path' is not configured".into())
    })?;
    let destination = render_download_path(template, language, namespace)?;
    println!("{}", output::format_path(&destination, path_format));
    Ok(())
}
