use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use scraper::Selector;
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_FILE_NAME: &str = ".scrapirc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Site root that page links are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the index page listing every object page.
    #[serde(default = "default_index_path")]
    pub index_path: String,
    /// CSS selector matching the page links on the index page.
    #[serde(default = "default_page_link_selector")]
    pub page_link_selector: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub info: Info,
    #[serde(default = "default_servers")]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub external_doc: ExternalDoc,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub license: License,
    #[serde(default = "default_version")]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    #[serde(default = "default_contact_name")]
    pub name: String,
    #[serde(default = "default_contact_url")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct License {
    #[serde(default = "default_license_name")]
    pub name: String,
    #[serde(default = "default_license_url")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Server {
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExternalDoc {
    #[serde(default = "default_external_doc_description")]
    pub description: String,
    #[serde(default = "default_external_doc_url")]
    pub url: String,
}

fn default_base_url() -> String {
    "https://www.fakturoid.cz".to_string()
}

fn default_index_path() -> String {
    "/api/v3".to_string()
}

fn default_page_link_selector() -> String {
    "li.pb-1 a".to_string()
}

fn default_output() -> String {
    "openapi.json".to_string()
}

fn default_title() -> String {
    "Webscraped Fakturoid V3 API".to_string()
}

fn default_description() -> String {
    "This is websraped definition of Fakturoid.".to_string()
}

fn default_version() -> String {
    "3.0.0-draft".to_string()
}

fn default_contact_name() -> String {
    "Jaroslav Henner".to_string()
}

fn default_contact_url() -> String {
    "https://github.com/jarovo/fakturoid-api/".to_string()
}

fn default_license_name() -> String {
    "Webscraped Fakturoid API V3 © 2025 by Jaroslav Henner is licensed under CC BY-SA 4.0. \
     To view a copy of this license, visit https://creativecommons.org/licenses/by-sa/4.0/"
        .to_string()
}

fn default_license_url() -> String {
    "https://creativecommons.org/licenses/by-sa/4.0/".to_string()
}

fn default_servers() -> Vec<Server> {
    vec![Server {
        url: "https://app.fakturoid.cz/api/v3".to_string(),
        description: "Production Fakturoid server".to_string(),
    }]
}

fn default_external_doc_description() -> String {
    "Published documentation".to_string()
}

fn default_external_doc_url() -> String {
    "https://www.fakturoid.cz/api/v3".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            index_path: default_index_path(),
            page_link_selector: default_page_link_selector(),
            output: default_output(),
            info: Info::default(),
            servers: default_servers(),
            external_doc: ExternalDoc::default(),
        }
    }
}

impl Default for Info {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            contact: Contact::default(),
            license: License::default(),
            version: default_version(),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            name: default_contact_name(),
            url: default_contact_url(),
        }
    }
}

impl Default for License {
    fn default() -> Self {
        Self {
            name: default_license_name(),
            url: default_license_url(),
        }
    }
}

impl Default for ExternalDoc {
    fn default() -> Self {
        Self {
            description: default_external_doc_description(),
            url: default_external_doc_url(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the page link selector does not parse or the base
    /// URL is not http(s).
    pub fn validate(&self) -> Result<()> {
        if Selector::parse(&self.page_link_selector).is_err() {
            bail!(
                "Invalid CSS selector in 'pageLinkSelector': \"{}\"",
                self.page_link_selector
            );
        }

        if !is_http_url(&self.base_url) {
            bail!(
                "Invalid 'baseUrl': \"{}\" (expected an http:// or https:// URL)",
                self.base_url
            );
        }

        Ok(())
    }

    /// Parsed site root.
    pub fn site_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .with_context(|| format!("Invalid 'baseUrl': \"{}\"", self.base_url))
    }

    /// Full URL of the index page, `indexPath` resolved against `baseUrl`.
    pub fn index_url(&self) -> Result<Url> {
        self.site_url()?
            .join(&self.index_path)
            .with_context(|| format!("Invalid 'indexPath': \"{}\"", self.index_path))
    }
}

pub fn is_http_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
