//! Print the syntax tree of SQL input.

use std::path::PathBuf;

use sqltree_lib::{Parse, ParseBuilder, Rule};

use super::source_loader::load_source_or_exit;

pub struct TreeArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub entry: Rule,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub json: bool,
    pub compact: bool,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
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

    print!("{}", render_tree(&parse, &args));

    if !parse.diagnostics().is_empty() {
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

    if !parse.is_valid() {
        std::process::exit(1);
    }
}

pub fn render_tree(parse: &Parse, args: &TreeArgs) -> String {
    let printer = parse
        .printer()
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans);

    if !args.json {
        return printer.dump();
    }

    let tree = printer.json_tree();
    let json = if args.compact {
        serde_json::to_string(&tree)
    } else {
        serde_json::to_string_pretty(&tree)
    };
    json.expect("tree serialization never fails") + "\n"
}
