use crate::contents_json::write_contents_json;
use crate::export::{export, DirectorySink, Manifest};
use crate::preset::Preset;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Args {
    pub preset: Preset,
    pub output: PathBuf,
    pub png: Option<Vec<u32>>,
    pub asset_catalog: bool,
}

pub fn generate_icons(args: Args) -> Result<()> {
    let manifest = match &args.png {
        Some(sizes) => Manifest::custom(sizes),
        None => args.preset.manifest(),
    };
    // Fail on a bad size list before spending time on rendering
    manifest.validate()?;

    println!("Rendering {} emblem...", args.preset.name());
    let canvas = args.preset.render();
    println!("✓ Rendered {0}x{0} master", canvas.side());

    let mut sink = DirectorySink::new(&args.output)?;
    println!("Writing icons to {}...", sink.dir().display());
    export(&canvas, &manifest, &mut sink)?;

    if args.asset_catalog {
        let count = write_contents_json(sink.dir(), &manifest)?;
        println!("  ✓ Generated Contents.json ({count} slots)");
    }

    println!("✓ Generated {} icons", manifest.entries().len());
    Ok(())
}
