// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

use flatzip::write::ZipWriter;
use flatzip::{Compression, ZipEntryBuilder};

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, bail, Result};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        eprintln!("Usage: zip_files <output ZIP file name> <input files...>");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let output_str = args.next().ok_or(anyhow!("No output file specified."))?;
    let output_path = Path::new(&output_str);

    if output_path.exists() {
        bail!("The output file specified already exists.");
    }

    let inputs: Vec<String> = args.collect();
    if inputs.is_empty() {
        bail!("No input files specified.");
    }

    let mut writer = ZipWriter::new(File::create(output_path)?);

    for input in &inputs {
        let input_path = Path::new(input);
        let filename = input_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow!("Input path '{}' has no usable file name.", input))?;

        let data = std::fs::read(input_path)?;
        let entry = ZipEntryBuilder::new(filename.into(), Compression::Stored);
        writer.write_entry_whole(entry, &data)?;
    }

    writer.close()?;
    println!("Successfully written ZIP file '{}'.", output_path.display());

    Ok(())
}
