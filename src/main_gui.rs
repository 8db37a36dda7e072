use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

mod color;
mod config;
mod fractal;
mod gui;
mod render;

use config::{init_tracing, RenderArgs};
use gui::{native_options, JuliaApp};
use color::Coloring;
use render::{render, render_with};

/// Affiche l'ensemble de Julia dans une fenêtre de taille fixe.
#[derive(Parser, Debug)]
#[command(
    name = "julia-gui",
    about = "Affiche l'ensemble de Julia ; le programme se termine à la fermeture de la fenêtre",
    version
)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let coloring = cli.render.coloring;

    let (view, c) = cli.render.into_params();

    // Étape 1 : calcul complet du canevas, avant toute fenêtre
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
        coloring = coloring.name(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rendu terminé"
    );

    // Étape 2 : affichage
    if let Err(e) = eframe::run_native(
        "julia-set",
        native_options(&view, &c),
        Box::new(move |cc| Box::new(JuliaApp::new(cc, canvas))),
    ) {
        error!("Erreur lors du lancement de la fenêtre : {e}");
        std::process::exit(1);
    }
}
