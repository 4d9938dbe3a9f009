//! Upload command - plan one request per file matched by `upload_path`

use crate::{
    TransyncError,
    cli::DiscoveryArgs,
    commands::discover::run_discovery,
    config::{PathFormat, ProjectConfig},
    output,
    requests::{TOKEN_HEADER, plan_uploads},
};

type Result<T> = std::result::Result<T, TransyncError>;

/// Execute the upload command
///
/// # Errors
/// Returns an error if configuration is incomplete, discovery fails, or a
/// request URL cannot be built
pub fn execute(args: &DiscoveryArgs, config: &ProjectConfig, path_format: PathFormat, quiet: bool) -> Result<()> {
    config.validate_for_upload()?;
    let pattern = config.upload_path.as_deref().unwrap_or_default();
    let report = run_discovery(pattern, args, config)?;
    let plan = plan_uploads(&report.results, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if plan.is_empty() {
        if !quiet {
            output::warning(&format!("No files to upload for '{pattern}'"));
        }
        return Ok(());
    }

    for request in &plan {
        if quiet {
            println!("{}", request.url);
        } else if let Some(file) = &request.file {
            println!("  {} {} <- {}", request.method, request.url, output::format_path(file, path_format));
        }
    }

    if !quiet {
        output::success(&format!("Planned {} upload(s)", plan.len()));
        output::info(&output::discovery_summary(&report));
        if plan.iter().any(|request| request.token_header.is_none()) {
            output::warning(&format!("'api_key' is not set, requests carry no {TOKEN_HEADER} header"));
        }
    }

    Ok(())
}
