use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, object_page, row, stderr, stdout};

const PAYMENTS: &str = r##"<html><body><section>
<h1>Invoice payments</h1>
<div class="api-article">
  <h2 id="attributes">Attributes</h2>
  <div>
    <table><tbody>
      <tr><td><div title="Required attribute"></div></td><td><code>paid_on</code></td><td><code>Date</code></td><td>Paid on</td></tr>
    </tbody></table>
  </div>
  <div class="notes"><p>Notes</p></div>
  <h3>Payment line</h3>
  <h2>Create payment</h2>
  <h2>Delete payment</h2>
</div>
</section></body></html>"##;

#[test]
fn test_page_from_file() -> Result<()> {
    let test = CliTest::with_file("saved/payments.html", PAYMENTS)?;

    let output = test.page_command().arg("saved/payments.html").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let schemas: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        schemas,
        json!({
            "InvoicePayments.Attributes": {
                "type": "object",
                "properties": {
                    "paid_on": { "type": "string", "description": "Paid on", "format": "date" }
                },
                "required": ["paid_on"]
            }
        })
    );

    let stderr = stderr(&output);
    assert!(stderr.contains("sub-object: Payment line"));
    assert!(stderr.contains("requests: Create payment, Delete payment"));

    Ok(())
}

#[test]
fn test_page_from_mirror() -> Result<()> {
    let test = CliTest::new()?;
    test.write_page(
        "/api/v3/subjects",
        &object_page("Subjects", &row("", "name", "String", "Name")),
    )?;

    let output = test
        .page_command()
        .args(["/api/v3/subjects", "--from-dir", "mirror"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let schemas: Value = serde_json::from_str(&stdout(&output))?;
    assert!(schemas["Subjects.Attributes"]["properties"]["name"].is_object());
    assert!(stderr(&output).contains("Parsed https://www.fakturoid.cz/api/v3/subjects"));

    Ok(())
}

#[test]
fn test_page_without_attributes() -> Result<()> {
    let test = CliTest::with_file(
        "events.html",
        r#"<section><h1>Events</h1><div class="api-article"><h2>Events Index</h2></div></section>"#,
    )?;

    let output = test.page_command().arg("events.html").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "{}");

    Ok(())
}

#[test]
fn test_page_with_structural_error() -> Result<()> {
    let test = CliTest::with_file("broken.html", "<html><body><p>Gone</p></body></html>")?;

    let output = test.page_command().arg("broken.html").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(r#"error: "no element with class "api-article""  structure"#));

    Ok(())
}

#[test]
fn test_page_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.page_command().arg("nope.html").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read"));

    Ok(())
}
