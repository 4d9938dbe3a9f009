//! Discover command - list files matched by a path template

use crate::{
    TransyncError,
    cli::DiscoveryArgs,
    config::{PathFormat, ProjectConfig},
    discovery::{DiscoveryReport, FileDiscovery, SkipPolicy, TemplateDiscovery},
    output,
};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, TransyncError>;

/// Build the discovery pass for `pattern` with CLI overrides applied on top of `config`.
///
/// # Errors
/// Returns an error if the pattern is malformed.
pub fn configure(pattern: &str, args: &DiscoveryArgs, config: &ProjectConfig) -> Result<TemplateDiscovery> {
    let policy = if args.strict { SkipPolicy::Fail } else { SkipPolicy::Skip };
    Ok(TemplateDiscovery::new(pattern)?
        .max_depth(args.max_depth.unwrap_or(config.max_depth))
        .skip_policy(policy))
}

/// Run a configured pass below `--root` (default: the working directory).
///
/// Results are sorted by path so repeated runs print identically.
///
/// # Errors
/// Returns an error if the walk fails, or a file is skipped while `--strict` is set.
pub fn run_configured(discovery: &TemplateDiscovery, args: &DiscoveryArgs) -> Result<DiscoveryReport> {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut report = discovery.discover(&root)?;
    report.results.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(report)
}

/// Run discovery for `pattern`, see [`configure`] and [`run_configured`].
///
/// # Errors
/// Returns an error if the pattern is malformed, the walk fails, or a file is
/// skipped while `--strict` is set.
pub fn run_discovery(pattern: &str, args: &DiscoveryArgs, config: &ProjectConfig) -> Result<DiscoveryReport> {
    run_configured(&configure(pattern, args, config)?, args)
}

/// Pick the explicit pattern or fall back to `upload_path`
///
/// # Errors
/// Returns `TransyncError::InvalidInput` if neither is available.
pub fn resolve_pattern<'a>(pattern: Option<&'a str>, config: &'a ProjectConfig) -> Result<&'a str> {
    pattern
        .or(config.upload_path.as_deref())
        .ok_or_else(|| {
            TransyncError::InvalidInput("No pattern given and 'upload_path' is not set".into())
        })
}

/// Execute the discover command
///
/// # Errors
/// Returns an error if discovery fails or JSON output cannot be written
pub fn execute(
    pattern: Option<&str>,
    args: &DiscoveryArgs,
    config: &ProjectConfig,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    let pattern = resolve_pattern(pattern, config)?;
    let discovery = configure(pattern, args, config)?;
    let report = run_configured(&discovery, args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.results.is_empty() && !quiet {
        output::warning(&output::no_results(pattern, discovery.kind()));
    }

    for found in &report.results {
        println!("{}", output::file_with_variables(found, path_format, quiet));
    }

    if !quiet {
        output::info(&output::discovery_summary(&report));
        if let Some(root) = args.root.as_deref().filter(|r| *r != Path::new(".")) {
            output::info(&format!("Root: {}", output::format_path(root, path_format)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TranslationTree;

    fn args(root: &Path) -> DiscoveryArgs {
        DiscoveryArgs {
            root: Some(root.to_path_buf()),
            max_depth: None,
            strict: false,
            json: false,
        }
    }

    #[test]
    fn test_run_discovery_sorts_results() {
        let tree = TranslationTree::new(&["locales/fr.json", "locales/de.json", "locales/en.json"]);
        let report = run_discovery("locales/{language}.json", &args(tree.path()), &ProjectConfig::default()).unwrap();
        let languages: Vec<&str> = report.results.iter().filter_map(|r| r.get("language")).collect();
        assert_eq!(languages, vec!["de", "en", "fr"]);
    }

    #[test]
    fn test_strict_flag_fails_on_mismatch() {
        let tree = TranslationTree::new(&["locales/pt-BR.json"]);
        let mut strict = args(tree.path());
        strict.strict = true;
        let err = run_discovery("locales/{language}.json", &strict, &ProjectConfig::default()).unwrap_err();
        assert!(matches!(err, TransyncError::DiscoveryError(_)));
    }

    #[test]
    fn test_config_max_depth_applies() {
        let tree = TranslationTree::new(&["locales/a/b/en.json"]);
        let config = ProjectConfig { max_depth: 1, ..ProjectConfig::default() };
        let report = run_discovery("locales/**/{language}.json", &args(tree.path()), &config).unwrap();
        assert!(report.results.is_empty());

        let mut deeper = args(tree.path());
        deeper.max_depth = Some(6);
        let report = run_discovery("locales/**/{language}.json", &deeper, &config).unwrap();
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn test_resolve_pattern_falls_back_to_upload_path() {
        let config = ProjectConfig {
            upload_path: Some("i18n/{language}.json".into()),
            ..ProjectConfig::default()
        };
        assert_eq!(resolve_pattern(None, &config).unwrap(), "i18n/{language}.json");
        assert_eq!(resolve_pattern(Some("x/{language}.po"), &config).unwrap(), "x/{language}.po");
        assert!(resolve_pattern(None, &ProjectConfig::default()).is_err());
    }
}
