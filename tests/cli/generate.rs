use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, index_page, object_page, row, stderr, stdout};

fn mirror(test: &CliTest) -> Result<()> {
    test.write_page(
        "/api/v3",
        &index_page(&["/api/v3/invoices", "/api/v3/subjects", "/api/v3/events"]),
    )?;
    test.write_page(
        "/api/v3/invoices",
        &object_page(
            "Invoices",
            &[
                row("Read-only attribute", "id", "Integer", "Unique identifier"),
                row("Required attribute", "subject_id", "Integer", "Subject"),
                row("", "issued_on", "Date", "Issue date"),
                row("", "lines", r##"Array[<a href="#invoice-line">Object</a>]"##, "Lines"),
            ]
            .concat(),
        ),
    )?;
    test.write_page(
        "/api/v3/subjects",
        &object_page(
            "Subjects",
            &row("Required attribute", "name", "String", "Name"),
        ),
    )?;
    test.write_page(
        "/api/v3/events",
        r#"<html><body><section><h1>Events</h1><div class="api-article"><h2>Events Index</h2></div></section></body></html>"#,
    )?;
    Ok(())
}

#[test]
fn test_generate_writes_document() -> Result<()> {
    let test = CliTest::new()?;
    mirror(&test)?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Wrote 2 schemas from 3 pages to openapi.json"));

    let document: Value = serde_json::from_str(&test.read_file("openapi.json")?)?;
    assert_eq!(document["openapi"], "3.0.4");
    assert_eq!(document["externalDoc"]["url"], "https://www.fakturoid.cz/api/v3");
    assert_eq!(
        document["components"]["schemas"],
        json!({
            "Invoices.Attributes": {
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Unique identifier" },
                    "subject_id": { "type": "integer", "description": "Subject" },
                    "issued_on": { "type": "string", "description": "Issue date", "format": "date" },
                    "lines": {
                        "type": "array",
                        "description": "Lines",
                        "items": { "$ref": "#/components/schemas/invoice-line" }
                    }
                },
                "required": ["subject_id"]
            },
            "Subjects.Attributes": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Name" }
                },
                "required": ["name"]
            }
        })
    );

    Ok(())
}

#[test]
fn test_generate_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    mirror(&test)?;

    let output = test.generate_command().args(["-o", "-"]).output()?;
    assert!(output.status.success());

    let document: Value = serde_json::from_str(&stdout(&output))?;
    assert!(document["components"]["schemas"]["Subjects.Attributes"].is_object());
    assert!(!test.root().join("openapi.json").exists());

    Ok(())
}

#[test]
fn test_generate_output_from_config() -> Result<()> {
    let test = CliTest::with_file(".scrapirc.json", r#"{ "output": "out/schemas.json" }"#)?;
    mirror(&test)?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("out/schemas.json").exists());

    Ok(())
}

#[test]
fn test_unknown_type_is_a_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_page("/api/v3", &index_page(&["/api/v3/users"]))?;
    test.write_page(
        "/api/v3/users",
        &object_page("Users", &row("", "email", "Email", "Login")),
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains(r#"warning: "Email"  unknown-type"#));
    assert!(stderr.contains("--> https://www.fakturoid.cz/api/v3/users row 1 (email)"));

    let document: Value = serde_json::from_str(&test.read_file("openapi.json")?)?;
    assert_eq!(
        document["components"]["schemas"]["Users.Attributes"]["properties"]["email"],
        json!({ "type": "string", "description": "Login", "format": "email" })
    );

    Ok(())
}

#[test]
fn test_structural_error_still_writes_document() -> Result<()> {
    let test = CliTest::new()?;
    test.write_page(
        "/api/v3",
        &index_page(&["/api/v3/subjects", "/api/v3/broken", "/api/v3/missing"]),
    )?;
    test.write_page(
        "/api/v3/subjects",
        &object_page("Subjects", &row("", "name", "String", "Name")),
    )?;
    test.write_page("/api/v3/broken", "<html><body><p>Maintenance</p></body></html>")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("structure"));
    assert!(stderr.contains("fetch-error"));
    assert!(stderr.contains("2 problems (2 errors, 0 warnings)"));

    let document: Value = serde_json::from_str(&test.read_file("openapi.json")?)?;
    assert!(document["components"]["schemas"]["Subjects.Attributes"].is_object());

    Ok(())
}

#[test]
fn test_name_collision_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_page("/api/v3", &index_page(&["/api/v3/a", "/api/v3/b"]))?;
    test.write_page("/api/v3/a", &object_page("Invoices", &row("", "id", "Integer", "")))?;
    test.write_page("/api/v3/b", &object_page("Invoices", &row("", "id", "Integer", "")))?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(
        "schema Invoices.Attributes from https://www.fakturoid.cz/api/v3/b is already defined by https://www.fakturoid.cz/api/v3/a"
    ));
    assert!(!test.root().join("openapi.json").exists());

    Ok(())
}

#[test]
fn test_missing_index_aborts() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to fetch index page https://www.fakturoid.cz/api/v3"));

    Ok(())
}

#[test]
fn test_base_url_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_page("/api/v3", &index_page(&["/api/v3/subjects"]))?;
    test.write_page(
        "/api/v3/subjects",
        &object_page("Subjects", &row("", "name", "Unknown", "Name")),
    )?;

    let output = test
        .generate_command()
        .env("SCRAPI_BASE_URL", "https://docs.example")
        .output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("https://docs.example/api/v3/subjects row 1 (name)"));

    Ok(())
}

#[test]
fn test_invalid_base_url_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .generate_command()
        .args(["--base-url", "docs.example"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("baseUrl"));

    Ok(())
}

#[test]
fn test_generate_resolves_relative_index_links() -> Result<()> {
    let test = CliTest::new()?;
    mirror(&test)?;
    // The index lives at /api/v3, so relative links resolve against /api/.
    test.write_page("/api/v3", &index_page(&["v3/invoices", "./v3/subjects"]))?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Wrote 2 schemas from 2 pages to openapi.json"));

    let document: Value = serde_json::from_str(&test.read_file("openapi.json")?)?;
    let schemas = document["components"]["schemas"].as_object().unwrap();
    assert_eq!(
        schemas.keys().collect::<Vec<_>>(),
        vec!["Invoices.Attributes", "Subjects.Attributes"]
    );

    Ok(())
}
