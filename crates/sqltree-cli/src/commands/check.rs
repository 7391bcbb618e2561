use std::path::PathBuf;

use serde::Serialize;
use sqltree_lib::diagnostics::DiagnosticMessage;
use sqltree_lib::{Parse, ParseBuilder, Rule};

use super::source_loader::load_source_or_exit;

pub struct CheckArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Rule,
    pub strict: bool,
    pub json: bool,
    pub fuel: u32,
    pub color: bool,
}

/// Machine-readable outcome of `check --json`.
#[derive(Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub errors: usize,
    pub warnings: usize,
    pub diagnostics: Vec<DiagnosticMessage>,
}

impl CheckReport {
    pub fn new(parse: &Parse, strict: bool) -> Self {
        let diagnostics = parse.diagnostics().filtered();
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let warnings = diagnostics.iter().filter(|d| d.is_warning()).count();
        Self {
            valid: errors == 0 && (!strict || warnings == 0),
            errors,
            warnings,
            diagnostics,
        }
    }
}

pub fn run(args: CheckArgs) {
    let loaded = load_source_or_exit(args.source_path.as_deref(), args.source_text.as_deref());

    let parse = match ParseBuilder::new(&loaded.text)
        .entry(args.entry)
        .with_exec_fuel(Some(args.fuel))
        .parse()
    {
        Ok(parse) => parse,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    let report = CheckReport::new(&parse, args.strict);

    if args.json {
        let json = serde_json::to_string_pretty(&report).expect("report serialization never fails");
        println!("{}", json);
    } else if !report.diagnostics.is_empty() {
        eprint!(
            "{}",
            parse
                .diagnostics()
                .filtered_printer(&loaded.text)
                .path(&loaded.origin.label())
                .colored(args.color)
                .render()
        );
    }

    if !report.valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
