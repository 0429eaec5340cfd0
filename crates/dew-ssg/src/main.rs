//! Command-line page generator for the editor app.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dew_ssg::generate_to_file;
use dew_ui::App;

/// Pre-render the editor app into a static HTML page
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Page template containing the mount element
    #[arg(short, long, default_value = "index.html", value_hint = clap::ValueHint::FilePath)]
    template: PathBuf,

    /// Where to write the generated page
    #[arg(short, long, default_value = "dist/index.html", value_hint = clap::ValueHint::FilePath)]
    out: PathBuf,

    /// Id of the element the app is rendered into
    #[arg(long, default_value = "app")]
    mount_id: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let tree = App::new().render();
    generate_to_file(&args.template, &args.out, &args.mount_id, &tree)
        .with_context(|| format!("generating {}", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}
