//! Trace the parser for debugging.

use std::path::PathBuf;

use sqltree_lib::{ParseBuilder, PrintTracer, Rule, Verbosity};

use super::source_loader::load_source_or_exit;

pub struct TraceArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Rule,
    pub verbosity: Verbosity,
    pub fuel: u32,
    pub no_result: bool,
}

pub fn run(args: TraceArgs) {
    let loaded = load_source_or_exit(args.source_path.as_deref(), args.source_text.as_deref());

    let mut tracer = PrintTracer::new(args.verbosity);
    let result = ParseBuilder::new(&loaded.text)
        .entry(args.entry)
        .with_exec_fuel(Some(args.fuel))
        .parse_traced(&mut tracer);

    // The transcript is printed even when a limit stopped the parse.
    print!("{}", tracer.render());

    let parse = match result {
        Ok(parse) => parse,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    if !args.no_result {
        println!("---");
        println!(
            "fuel: {}, diagnostics: {}",
            parse.exec_fuel_consumed(),
            parse.diagnostics().filtered().len()
        );
        print!("{}", parse.printer().dump());
    }

    if !parse.is_valid() {
        std::process::exit(1);
    }
}
