use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use structopt::StructOpt;

use md2html::parser;
use md2html::renderer::{self, RenderOptions};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "md2html",
    about = "Converts a small Markdown dialect to a standalone HTML page"
)]
struct Opt {
    /// Input Markdown file; reads stdin when omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output HTML file; defaults to the input path with an .html
    /// extension, or stdout when reading from stdin
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,

    /// Text for the document <title> tag
    #[structopt(long = "title")]
    title: Option<String>,

    /// Leave out the <!DOCTYPE html> declaration
    #[structopt(long = "no-doctype")]
    no_doctype: bool,

    /// Leave out the charset and viewport meta tags
    #[structopt(long = "no-metadata")]
    no_metadata: bool,

    /// Emit only the rendered elements, without the document shell
    #[structopt(long = "fragment")]
    fragment: bool,
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut content = String::new();
            let stdin = io::stdin();
            let mut handle = stdin.lock();
            handle.read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    if let Some(path) = &opt.input {
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            eprintln!(
                "Error: expected a Markdown (.md) input file: {}",
                path.display()
            );
            process::exit(1);
        }
    }

    let content = match read_input(opt.input.as_deref()) {
        Ok(content) => content,
        Err(err) => {
            match &opt.input {
                Some(path) => eprintln!("Error reading {}: {}", path.display(), err),
                None => eprintln!("Error reading stdin: {}", err),
            }
            process::exit(1);
        }
    };

    let elements = parser::parse(&content);

    let html = if opt.fragment {
        renderer::render_fragment(&elements)
    } else {
        let mut options = RenderOptions::default();
        if let Some(title) = opt.title {
            options.title = title;
        }
        options.include_doctype = !opt.no_doctype;
        options.include_metadata = !opt.no_metadata;
        renderer::render(&elements, &options)
    };

    let output = opt
        .output
        .or_else(|| opt.input.as_ref().map(|path| path.with_extension("html")));

    match output {
        Some(path) => {
            log::debug!("writing output to {}", path.display());
            if let Err(err) = fs::write(&path, &html) {
                eprintln!("Error writing {}: {}", path.display(), err);
                process::exit(1);
            }
            println!("Created {}", path.display());
        }
        // the document already ends with a newline, a fragment does not
        None => {
            if opt.fragment {
                println!("{}", html);
            } else {
                print!("{}", html);
            }
        }
    }
}
