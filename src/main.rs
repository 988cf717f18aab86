use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

mod cli;
mod logger;
mod output;
mod populate;

use cli::Args;
use glyphcast::{Command, Frame, Renderer, Session, Settings};
use logger::init_logger;
use output::{save_frame_as_png, write_text};
use populate::populate;

/// Load settings from the optional file and apply command line overrides
fn load_settings(args: &Args) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &args.config {
        Some(path) => {
            info!("Loading settings from {}", path);
            Settings::load(path)?
        }
        None => Settings::default(),
    };

    if let Some(width) = args.width {
        settings.camera.width = width;
    }
    if let Some(height) = args.height {
        settings.camera.height = height;
    }
    if let Some(focal) = args.focal {
        settings.camera.focal = focal;
    }
    if let Some(entities) = args.entities {
        settings.scene.entities = entities;
    }
    if let Some(seed) = args.seed {
        settings.scene.seed = seed;
    }

    settings.validate()?;
    Ok(settings)
}

/// Render one frame, with a progress bar if requested
fn render_frame(session: &Session, renderer: &Renderer, progress: bool) -> Frame {
    let spheres = session.visible_spheres();
    if !progress {
        return renderer.render(&spheres);
    }

    let pb = ProgressBar::new(renderer.camera.pixel_dim_y as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows") {
        pb.set_style(style);
    }
    renderer.render_with_progress(&spheres, &pb)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(&args)?;
    let renderer = settings.renderer();
    info!(
        "Frame {}x{}, focal {}, {} entities (seed {})",
        settings.camera.width,
        settings.camera.height,
        settings.camera.focal,
        settings.scene.entities,
        settings.scene.seed
    );

    let mut session = Session::new(populate(&settings.scene), settings.controls());
    let commands = Command::parse_keys(&args.events);
    info!("Replaying {} input events", commands.len());

    let mut text = String::new();
    for command in commands {
        session = session.update(command);
        if args.every_frame {
            text.push_str(&render_frame(&session, &renderer, args.progress).to_text());
            text.push('\n');
        }
    }

    let frame = render_frame(&session, &renderer, args.progress);
    text.push_str(&frame.to_text());
    write_text(&text, args.output.as_deref())?;

    if let Some(path) = &args.png {
        save_frame_as_png(&frame, path)?;
    }

    info!("Done after {} updates ({:?} view)", session.frame, session.view);
    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("glyphcast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
