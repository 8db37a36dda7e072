use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

mod color;
mod config;
mod fractal;
mod io;
mod render;

use config::{init_tracing, RenderArgs};
use io::png::save_png;
use color::Coloring;
use render::{render, render_with};

/// Utilitaire CLI pour générer l'ensemble de Julia en PNG.
///
/// Exemple d'utilisation :
///   julia-cli --c-re -0.7 --c-im 0.27015 --output julia.png
#[derive(Parser, Debug)]
#[command(
    name = "julia-cli",
    about = "Rendu escape-time de l'ensemble de Julia vers un fichier PNG",
    version
)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    /// Fichier de sortie PNG
    #[arg(long, value_name = "FICHIER")]
    output: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let coloring = cli.render.coloring;

    let (view, c) = cli.render.into_params();

    let start = Instant::now();
    let rendered = match coloring {
        Coloring::Reference => render(&view, &c),
        other => render_with(&view, &c, other),
    };
    let canvas = match rendered {
        Ok(canvas) => canvas,
        Err(e) => {
            error!("Configuration invalide : {e}");
            std::process::exit(1);
        }
    };
    info!(
        width = view.width,
        height = view.height,
        c_re = c.c_re,
        c_im = c.c_im,
        coloring = coloring.name(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rendu terminé"
    );

    if let Err(e) = save_png(&canvas, &cli.output) {
        error!("Erreur lors de l'écriture du PNG : {e}");
        std::process::exit(1);
    }
}
