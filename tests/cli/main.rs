use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;
mod init;
mod page;

const BIN_NAME: &str = "scrapi";

/// Directory of the local documentation mirror inside the test project.
pub const MIRROR_DIR: &str = "mirror";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keeps config discovery inside the test project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a page of the local mirror, `url_path` as in `/api/v3/invoices`.
    pub fn write_page(&self, url_path: &str, content: &str) -> Result<()> {
        self.write_file(
            &format!("{}{}.html", MIRROR_DIR, url_path),
            content,
        )
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["generate", "--from-dir", MIRROR_DIR]);
        cmd
    }

    pub fn page_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("page");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Index page linking to `paths` the way the documentation navigation does.
pub fn index_page(paths: &[&str]) -> String {
    let items: String = paths
        .iter()
        .map(|path| format!(r#"<li class="pb-1"><a href="{path}">{path}</a></li>"#))
        .collect();
    format!("<html><body><nav><ul>{items}</ul></nav></body></html>")
}

/// Object page with one attributes table.
pub fn object_page(group: &str, rows: &str) -> String {
    format!(
        r#"<html><body><section>
<h1>{group}</h1>
<div class="api-article">
  <h2 id="attributes">Attributes</h2>
  <div class="table-responsive">
    <table>
      <thead><tr><th></th><th>Attribute</th><th>Type</th><th>Description</th></tr></thead>
      <tbody>{rows}</tbody>
    </table>
  </div>
</div>
</section></body></html>"#
    )
}

pub fn row(title: &str, name: &str, type_html: &str, description: &str) -> String {
    format!(
        r#"<tr><td><div title="{title}"></div></td><td><code>{name}</code></td><td><code>{type_html}</code></td><td>{description}</td></tr>"#
    )
}
