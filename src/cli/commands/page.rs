use std::path::Path;

use anyhow::{Context, Result};

use super::super::args::PageCommand;
use super::{
    CommandKind, CommandResult, CommandSummary, PageSummary,
    helper::{load_command_config, make_fetcher},
};
use crate::{
    config::is_http_url,
    core::{Registry, build_page_schema_from_bytes},
    diagnostics::{Diagnostic, StructureDiagnostic},
    fetch::read_file,
};

pub fn page(cmd: PageCommand) -> Result<CommandResult> {
    let (url, bytes) = if is_http_url(&cmd.target) || cmd.common.from_dir.is_some() {
        let config = load_command_config(&cmd.common)?;
        let url = config
            .site_url()?
            .join(&cmd.target)
            .with_context(|| format!("Invalid page URL \"{}\"", cmd.target))?
            .to_string();
        let bytes = make_fetcher(&cmd.common)?.fetch(&url)?;
        (url, bytes)
    } else {
        (cmd.target.clone(), read_file(Path::new(&cmd.target))?)
    };

    let mut diagnostics = Vec::new();
    let mut registry = Registry::new();
    let mut subobject = None;
    let mut requests = Vec::new();
    match build_page_schema_from_bytes(&bytes, &url, &mut diagnostics) {
        Ok(Some(page)) => {
            subobject = page.outline.subobject.clone();
            requests = page.outline.requests.clone();
            registry.merge(page, &url)?;
        }
        Ok(None) => {}
        Err(error) => diagnostics.push(Diagnostic::Structure(StructureDiagnostic {
            page_url: url.clone(),
            error,
        })),
    }

    let rendered = serde_json::to_string_pretty(&registry).context("Failed to serialize schema")?;

    Ok(CommandResult::new(
        CommandKind::Page,
        CommandSummary::Page(PageSummary {
            url,
            rendered,
            subobject,
            requests,
        }),
        diagnostics,
    ))
}
