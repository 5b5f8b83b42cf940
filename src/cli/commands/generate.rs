use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{info, warn};

use super::super::args::GenerateCommand;
use super::{
    CommandKind, CommandResult, CommandSummary, GenerateSummary, OutputTarget,
    helper::{load_command_config, make_fetcher},
};
use crate::{
    core::{PageSchema, Registry, build_page_schema_from_bytes},
    diagnostics::{Diagnostic, FetchDiagnostic, StructureDiagnostic},
    discovery::page_links,
    document::OpenApiDocument,
    fetch::Fetch,
};

/// What one worker produced for one page.
#[derive(Debug)]
pub struct PageOutcome {
    pub url: String,
    pub page: Option<PageSchema>,
    /// Fetched and parsed, but the page has no attributes section.
    pub without_attributes: bool,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let config = load_command_config(&cmd.common)?;
    let fetcher = make_fetcher(&cmd.common)?;

    let index_url = config.index_url()?;
    let index = fetcher
        .fetch(index_url.as_str())
        .with_context(|| format!("Failed to fetch index page {}", index_url))?;
    let links = page_links(
        &String::from_utf8_lossy(&index),
        &config.page_link_selector,
        &index_url,
    )?;
    info!("Found {} pages linked from {}", links.len(), index_url);

    let outcomes = scrape_pages(fetcher.as_ref(), &links, cmd.jobs)?;

    let mut registry = Registry::new();
    let mut diagnostics = Vec::new();
    let mut without_attributes_count = 0;
    for outcome in outcomes {
        diagnostics.extend(outcome.diagnostics);
        if outcome.without_attributes {
            without_attributes_count += 1;
        }
        if let Some(page) = outcome.page {
            registry.merge(page, &outcome.url)?;
        }
    }

    let output = match cmd.output.as_deref().unwrap_or(&config.output) {
        "-" => OutputTarget::Stdout,
        path => OutputTarget::File(PathBuf::from(path)),
    };
    let json = OpenApiDocument::new(&config, &registry)
        .to_json()
        .context("Failed to serialize document")?;
    write_output(&output, &json)?;

    Ok(CommandResult::new(
        CommandKind::Generate,
        CommandSummary::Generate(GenerateSummary {
            output,
            page_count: links.len(),
            schema_count: registry.len(),
            without_attributes_count,
        }),
        diagnostics,
    ))
}

/// Fetch and parse every page on the worker pool.
///
/// Outcomes come back in the order of `links`.
pub fn scrape_pages(
    fetcher: &dyn Fetch,
    links: &[String],
    jobs: Option<usize>,
) -> Result<Vec<PageOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
        .context("Failed to build worker pool")?;

    Ok(pool.install(|| {
        links
            .par_iter()
            .map(|url| scrape_page(fetcher, url))
            .collect()
    }))
}

pub fn scrape_page(fetcher: &dyn Fetch, url: &str) -> PageOutcome {
    let mut diagnostics = Vec::new();

    let bytes = match fetcher.fetch(url) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("Skipping {}: {:#}", url, err);
            diagnostics.push(Diagnostic::Fetch(FetchDiagnostic {
                url: url.to_string(),
                error: format!("{:#}", err),
            }));
            return PageOutcome {
                url: url.to_string(),
                page: None,
                without_attributes: false,
                diagnostics,
            };
        }
    };

    let (page, without_attributes) =
        match build_page_schema_from_bytes(&bytes, url, &mut diagnostics) {
            Ok(Some(page)) => (Some(page), false),
            Ok(None) => (None, true),
            Err(error) => {
                warn!("Skipping {}: {}", url, error);
                diagnostics.push(Diagnostic::Structure(StructureDiagnostic {
                    page_url: url.to_string(),
                    error,
                }));
                (None, false)
            }
        };

    PageOutcome {
        url: url.to_string(),
        page,
        without_attributes,
        diagnostics,
    }
}

fn write_output(output: &OutputTarget, json: &str) -> Result<()> {
    match output {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write document to stdout")?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {:?}", path))?;
        }
    }
    Ok(())
}
