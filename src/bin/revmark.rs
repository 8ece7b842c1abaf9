//! Command-line interface for revmark
//! This binary renders saved analysis-service responses (and bare code files)
//! into the HTML fragments the library produces.
//!
//! Usage:
//!   revmark render `<path.json>` [--format `<format>`]  - Render a saved analysis response
//!   revmark highlight `<path>`                          - Strip fences and highlight a code file

use clap::{Arg, Command};
use revmark::escape::escape_text;
use revmark::{fence, highlight, render, AnalysisResponse, RenderedReport};
use std::fs;
use std::process;

fn main() {
    let matches = Command::new("revmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders code-review analysis text into HTML fragments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a saved analysis response (JSON) to markup")
                .arg(
                    Arg::new("path")
                        .help("Path to the analysis response JSON")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'html', 'json')")
                        .default_value("html"),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Strip code fences and print highlighted HTML for a code file")
                .arg(
                    Arg::new("path")
                        .help("Path to the code file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            let format = render_matches.get_one::<String>("format").unwrap();
            handle_render_command(path, format);
        }
        Some(("highlight", highlight_matches)) => {
            let path = highlight_matches.get_one::<String>("path").unwrap();
            handle_highlight_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the render command
fn handle_render_command(path: &str, format: &str) {
    let raw = read_file(path);
    let response = match AnalysisResponse::from_json(&raw) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let report = render(&response);

    match format {
        "html" => print_html(&report),
        "json" => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                process::exit(1);
            }
        },
        other => {
            eprintln!("Error: unknown output format '{}'", other);
            process::exit(1);
        }
    }
}

/// Handle the highlight command
fn handle_highlight_command(path: &str) {
    let raw = read_file(path);
    let stripped = fence::strip(&raw);
    println!("{}", highlight::highlight(&stripped));
}

fn read_file(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: could not read '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn print_html(report: &RenderedReport) {
    print!("{}", render_html(report));
}

fn render_html(report: &RenderedReport) -> String {
    let mut out = String::new();
    if let Some(errors) = &report.errors {
        out.push_str(&format!("<div class=\"errors-content\">{}</div>\n", errors));
    }
    if let Some(code) = &report.code {
        out.push_str(&format!(
            "<pre class=\"code-block\"><code>{}</code></pre>\n",
            code
        ));
    }
    for section in &report.sections {
        out.push_str(&format!("<section class=\"{}\">\n", section.kind));
        // Titles are plain text, so the heading escapes them like any other.
        out.push_str(&format!("  <h4>{}</h4>\n", escape_text(&section.title)));
        out.push_str(&format!(
            "  <div class=\"section-content\">{}</div>\n",
            section.rendered
        ));
        out.push_str("</section>\n");
    }
    out
}
