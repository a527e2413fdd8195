use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use tinymark_core::{extract_title, parse, render, render_sanitized};

mod site;

use site::SiteConfig;

fn main() {
    let mut args = env::args().skip(1).peekable();
    if args.peek().map(String::as_str) == Some("build") {
        args.next();
        run_build(args);
        return;
    }

    let mut input: Option<String> = None;
    let mut sanitized = false;
    let mut title_only = false;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--title" => title_only = true,
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    if title_only {
        match extract_title(&source) {
            Ok(title) => println!("{}", title),
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
        return;
    }

    let result = parse(&source).and_then(|tree| {
        if sanitized {
            render_sanitized(&tree)
        } else {
            render(&tree)
        }
    });
    match result {
        Ok(html) => print!("{}", html),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn run_build(args: impl Iterator<Item = String>) {
    let mut content: Option<PathBuf> = None;
    let mut template: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut static_dir: Option<PathBuf> = None;

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--content" => content = args.next().map(PathBuf::from),
            "--template" => template = args.next().map(PathBuf::from),
            "--out" => out = args.next().map(PathBuf::from),
            "--static" => static_dir = args.next().map(PathBuf::from),
            _ => {
                eprintln!("unexpected argument: {}", arg);
                print_usage();
                process::exit(2);
            }
        }
    }

    let (Some(content), Some(template), Some(out)) = (content, template, out) else {
        eprintln!("build requires --content, --template and --out");
        print_usage();
        process::exit(2);
    };

    let config = SiteConfig {
        content,
        template,
        out,
        static_dir,
    };
    if let Err(err) = site::build(&config) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: tinymark-cli [--sanitized] [--title] [input]");
    eprintln!(
        "       tinymark-cli build --content DIR --template FILE --out DIR [--static DIR]"
    );
}
