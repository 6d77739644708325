use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use heck::ToUpperCamelCase;

struct IconEntry {
    file_name: String,
    stem: String,
    variant: String,
}

fn main() -> io::Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let icons_dir = manifest_dir.join("icons");
    println!("cargo:rerun-if-changed={}", icons_dir.display());

    let mut entries = Vec::new();
    for entry in fs::read_dir(&icons_dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(".svg") {
            continue;
        }
        let stem = Path::new(&file_name)
            .file_stem()
            .expect("svg file stem")
            .to_string_lossy()
            .into_owned();
        let variant = stem.replace('-', " ").to_upper_camel_case();
        entries.push(IconEntry {
            file_name,
            stem,
            variant,
        });
    }
    entries.sort_by(|a, b| a.stem.cmp(&b.stem));

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("out dir")).join("icon_names.rs");
    let mut out = File::create(out_path)?;

    write_enum(&mut out, &entries)?;
    write_impl(&mut out, &entries)?;

    Ok(())
}

fn write_enum(out: &mut File, entries: &[IconEntry]) -> io::Result<()> {
    writeln!(
        out,
        "/// Strongly typed identifier for an icon embedded at build time."
    )?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum IconName {{")?;
    for icon in entries {
        writeln!(out, "    /// Generated from `{}`.", icon.file_name)?;
        writeln!(out, "    {},", icon.variant)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_impl(out: &mut File, entries: &[IconEntry]) -> io::Result<()> {
    writeln!(out, "#[allow(missing_docs)]")?;
    writeln!(out, "impl IconName {{")?;

    writeln!(out, "    pub const ALL: &'static [IconName] = &[")?;
    for icon in entries {
        writeln!(out, "        IconName::{},", icon.variant)?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;

    writeln!(out, "    pub const fn stem(self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for icon in entries {
        writeln!(
            out,
            "            IconName::{} => \"{}\",",
            icon.variant, icon.stem
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    pub const fn asset_path(self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for icon in entries {
        writeln!(
            out,
            "            IconName::{} => \"mosaic/icons/{}\",",
            icon.variant, icon.file_name
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    pub const fn source(self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for icon in entries {
        writeln!(
            out,
            "            IconName::{} => include_str!(concat!(env!(\"CARGO_MANIFEST_DIR\"), \"/icons/{}\")),",
            icon.variant, icon.file_name
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")
}
