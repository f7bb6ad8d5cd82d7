#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Usuarios - user administration panel
#[derive(Parser, Debug)]
#[command(name = "usuarios-desktop")]
#[command(about = "Usuarios - panel de administracion de usuarios")]
struct Args {
    /// Window title override (useful when running multiple instances)
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let title = args.title.unwrap_or_else(|| "Usuarios".to_string());

    tracing::info!("Starting '{}'", title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 720.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
