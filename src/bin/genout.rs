use std::error::Error;
use std::io::{self, Write};

use genout::cli::OutputArgs;
use genout::{OutputManager, TargetLanguage};
use sarge::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  genout --dir <base> --namespace <a.b.c> --name <Artifact> [--lang <language>] [--ext <extension>] [--flatten]"
    );
    eprintln!();
    eprintln!("Copies stdin into <base>/<a/b/c>/<Artifact>.<ext> and prints the written path.");
    eprintln!();
    eprintln!("Languages:");
    for language in TargetLanguage::ALL {
        eprintln!("  {:<8} .{}", language.to_string(), language.extension());
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let dir_ref = reader.add::<String>(tag::both('d', "dir"));
    let namespace_ref = reader.add::<String>(tag::both('n', "namespace"));
    let name_ref = reader.add::<String>(tag::long("name"));
    let lang_ref = reader.add::<TargetLanguage>(tag::both('l', "lang"));
    let ext_ref = reader.add::<String>(tag::long("ext"));
    let flatten_ref = reader.add::<bool>(tag::long("flatten"));

    let args = reader.parse()?;

    let name = name_ref
        .get(&args)
        .and_then(Result::ok)
        .ok_or("missing --name")?;

    let language = match lang_ref.get(&args) {
        Some(Ok(language)) => language,
        Some(Err(e)) => return Err(e.into()),
        None => TargetLanguage::default(),
    };

    let mut output_args = OutputArgs::new()
        .with_namespace(namespace_ref.get(&args).and_then(Result::ok).unwrap_or_default())
        .with_language(language.to_string());
    if let Some(dir) = dir_ref.get(&args).and_then(Result::ok) {
        output_args = output_args.with_base_dir(dir);
    }
    if let Some(ext) = ext_ref.get(&args).and_then(Result::ok) {
        output_args = output_args.with_extension(ext);
    }
    if flatten_ref.get(&args).and_then(Result::ok).unwrap_or(false) {
        output_args = output_args.with_flatten();
    }

    let manager = output_args.to_builder()?.build()?;
    let mut output = manager.new_output(&name)?;
    io::copy(&mut io::stdin().lock(), &mut output)?;
    let path = output.id().to_string();
    output.finish()?;

    writeln!(io::stdout(), "{path}")?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("genout error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
