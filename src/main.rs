use anyhow::Result;
use clap::Parser;
use emblem_gen::{icon_gen, preset::Preset};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "emblem-gen",
    about = "Draw the balance-leaf app icon and export it at every required size"
)]
struct Args {
    /// Which emblem design to draw.
    #[clap(long, value_enum, default_value = "refined")]
    preset: Preset,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./AppIcon")]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Also write an Xcode asset catalog Contents.json next to the icons
    #[clap(long)]
    asset_catalog: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        preset: args.preset,
        output: args.output,
        png: args.png,
        asset_catalog: args.asset_catalog,
    })
}
