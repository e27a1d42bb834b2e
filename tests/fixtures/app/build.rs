// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::env;

use declsynth::{Pipeline, SourceFile, SynModel, SynthConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo::rerun-if-changed=src");

    let files = SourceFile::discover("src")?;
    let model = SynModel::from_files(&files);
    let output = Pipeline::new(SynthConfig::default()).run(&model)?;
    for diagnostic in &output.diagnostics {
        println!("cargo::warning={diagnostic}");
    }
    output.write_to(env::var("OUT_DIR")?)?;
    Ok(())
}
