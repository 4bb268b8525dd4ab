//! HTML pages.
//!
//! Pages are small enough to build with `format!`. Every value that came from
//! a user goes through [`escape_html`] first.

use std::fmt::Write;

use axum::http::StatusCode;

use crate::storage::MilkRecord;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;max-width:48rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem .6rem;text-align:left}\
th{background:#f2f2f2}\
nav a{margin-right:1rem}\
label{display:block;margin:.6rem 0}";

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} · Milk Log</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/new">New record</a><a href="/records">Records</a><a href="/export.xlsx">Export</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn home_page() -> String {
    layout(
        "Milk Log",
        r#"<p>Record daily milk yields per cow.</p>
<ul>
<li><a href="/new">Add a record</a></li>
<li><a href="/records">View all records</a></li>
<li><a href="/export.xlsx">Download spreadsheet</a></li>
</ul>"#,
    )
}

/// The entry form; `today` prefills the date field.
pub fn new_record_page(today: &str) -> String {
    let body = format!(
        r#"<form method="post" action="/add">
<label>Cow number <input name="cow_number" required></label>
<label>Litres <input name="litres" type="number" step="0.01" min="0" required></label>
<label>Record date <input name="record_date" type="date" value="{today}"></label>
<button type="submit">Save</button>
</form>"#,
        today = escape_html(today),
    );
    layout("New record", &body)
}

/// Table of records in the order given.
pub fn records_page(records: &[MilkRecord]) -> String {
    if records.is_empty() {
        return layout(
            "Records",
            r#"<p>No records yet. <a href="/new">Add the first one.</a></p>"#,
        );
    }

    let mut rows = String::new();
    for rec in records {
        // Writing to a String cannot fail
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            rec.id,
            escape_html(&rec.cow_number),
            format_litres(rec.litres),
            escape_html(&rec.record_date),
            escape_html(&rec.created_at),
        );
    }

    let body = format!(
        r#"<p><a href="/export.xlsx">Download as spreadsheet</a></p>
<table>
<thead><tr><th>ID</th><th>Cow Number</th><th>Litres</th><th>Record Date</th><th>Created At (UTC)</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );
    layout("Records", &body)
}

/// Whole numbers keep one decimal place (`9.0`).
fn format_litres(litres: f64) -> String {
    format!("{litres:?}")
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<p>{}</p>
<p><a href="/new">Back to the form</a></p>"#,
        escape_html(message)
    );
    layout(title, &body)
}
