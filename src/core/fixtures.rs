//! HTML snippets shared by the core unit tests.

/// Wrap article content in the page skeleton used by the documentation.
pub fn page(group: &str, article: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <body>
    <main>
      <section>
        <h1>{group}</h1>
        <div class="api-article">
          {article}
        </div>
      </section>
    </main>
  </body>
</html>"#
    )
}

/// One attributes table row.
pub fn row(visibility: Option<&str>, name: &str, type_html: &str, description: &str) -> String {
    let marker = match visibility {
        Some(title) => format!(r#"<div class="vis" title="{title}"></div>"#),
        None => String::new(),
    };
    format!(
        r#"<tr>
  <td>{marker}</td>
  <td><code>{name}</code></td>
  <td><code>{type_html}</code></td>
  <td>{description}</td>
</tr>"#
    )
}

/// Attributes heading and table wrapping `rows`.
pub fn attributes(rows: &[String]) -> String {
    format!(
        r#"<h2 id="attributes">Attributes</h2>
<div class="table-responsive">
  <table class="table">
    <thead><tr><th></th><th>Attribute</th><th>Type</th><th>Description</th></tr></thead>
    <tbody>
      {}
    </tbody>
  </table>
</div>"#,
        rows.concat()
    )
}

pub const ATTRIBUTES_PAGE: &str = r##"<!DOCTYPE html>
<html>
  <body>
    <section>
      <h1>Invoice payments</h1>
      <div class="api-article">
        <p>Payments of an invoice.</p>
        <h2 id="attributes">Attributes</h2>
        <div class="table-responsive">
          <table>
            <thead><tr><th></th><th>Attribute</th><th>Type</th><th>Description</th></tr></thead>
            <tbody>
              <tr>
                <td><div title="Read-only attribute"></div></td>
                <td><code>id</code></td>
                <td><code>Integer</code></td>
                <td>Unique identifier</td>
              </tr>
              <tr>
                <td><div title="Required attribute"></div></td>
                <td><code>paid_on</code></td>
                <td><code>Date</code></td>
                <td>Payment
                    date</td>
              </tr>
              <tr>
                <td></td>
                <td><code>lines</code></td>
                <td><code>Array[<a href="#payment-line">Object</a>]</code></td>
                <td>Payment lines, see <a href="#payment-line">Payment line</a></td>
              </tr>
            </tbody>
          </table>
        </div>
        <div class="notes"><p>Amounts are in invoice currency.</p></div>
        <h3>Payment line</h3>
        <div><p>Sub-object.</p></div>
        <h2>Create payment</h2>
        <h2>Delete payment</h2>
      </div>
    </section>
  </body>
</html>"##;
