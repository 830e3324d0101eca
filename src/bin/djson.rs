use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use densejson::timer::Stopwatch;
use densejson::util::only_matching_fields;
use densejson::{resolve, DenseJsonOptions, EolStyle, Renderer, Value};
use is_terminal::IsTerminal;

/// A dense JSON renderer with slash-path value extraction.
///
/// djson reads JSON from stdin or files and prints it in a dense layout:
/// containers whose children are all simple values stay on one line, the
/// rest expand. With --path, a single value is pulled out of the tree
/// first; with --fields, a list of objects is reduced to matching fields.
#[derive(Parser, Debug)]
#[command(name = "djson")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Resolve this slash path (e.g. "data/0/name") before rendering.
    #[arg(short, long, value_name = "PATH")]
    path: Option<String>,

    /// Keep only fields whose keys contain any of these comma-separated
    /// terms. The value must be a list of objects.
    #[arg(long, value_name = "TERMS")]
    fields: Option<String>,

    /// Render everything on a single line.
    #[arg(short, long)]
    compact: bool,

    /// Number of spaces per indentation level.
    #[arg(short, long, default_value = "4")]
    indent: usize,

    /// Use tabs instead of spaces for indentation.
    #[arg(short = 't', long)]
    tabs: bool,

    /// Line ending style.
    #[arg(long, value_enum, default_value = "lf")]
    eol: EolStyleArg,

    /// Report elapsed time on stderr.
    #[arg(long)]
    timing: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EolStyleArg {
    Lf,
    Crlf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("djson: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let inputs = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input files and stdin is a terminal; pipe JSON in or pass a file".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        vec![buffer]
    } else {
        let mut contents = Vec::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            contents.push(content);
        }
        contents
    };

    let watch = Stopwatch::start();

    // Configure renderer
    let mut renderer = Renderer::new();
    configure_options(&mut renderer.options, &args);
    let eol = match args.eol {
        EolStyleArg::Lf => "\n",
        EolStyleArg::Crlf => "\r\n",
    };

    // One rendered document per input
    let mut output = String::new();
    for text in &inputs {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        let mut value = Value::from(parsed);

        if let Some(path) = &args.path {
            value = resolve(&value, path)?.clone();
        }
        if let Some(terms) = &args.fields {
            value = project_fields(value, terms)?;
        }

        let rendered = if args.compact {
            value.to_string()
        } else {
            renderer.render(&value)?
        };
        output.push_str(&rendered);
        output.push_str(eol);
    }

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    if args.timing {
        eprintln!("djson: done in {}", watch.read());
    }

    Ok(())
}

fn configure_options(opts: &mut DenseJsonOptions, args: &Args) {
    opts.indent_spaces = args.indent;
    opts.use_tab_to_indent = args.tabs;
    opts.eol_style = match args.eol {
        EolStyleArg::Lf => EolStyle::Lf,
        EolStyleArg::Crlf => EolStyle::Crlf,
    };
}

fn project_fields(value: Value, fields: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: Vec<&str> = fields
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    match value {
        Value::Seq(items) => Ok(Value::Seq(only_matching_fields(&items, &terms))),
        other => Err(format!("--fields needs a list of objects, got '{}'", other.type_name()).into()),
    }
}
