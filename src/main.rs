//! menu: validate a menu theme and preview its title bar.
//!
//! Run with:  `RUST_LOG=debug menu [THEME_PATH] [TITLE]`
//!
//! Prints, for every title bar style, the draw commands a 600×400 menu
//! would issue, as JSON on stdout.

use anyhow::{Context, Result};
use menu_config::MenuBarStyle;
use menu_renderer::{DrawCommand, DrawList};
use menu_theme::Theme;
use menu_widgets::{MenuBar, MenuFrame};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const PREVIEW_SIZE: (i32, i32) = (600, 400);

#[derive(Serialize)]
struct Preview {
    style:    MenuBarStyle,
    code:     i64,
    height:   i32,
    commands: Vec<DrawCommand>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("menu v{} starting", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from).unwrap_or_else(menu_config::default_path);
    let title = args.next().unwrap_or_else(|| "Menu".to_string());

    let config = menu_config::load(&path)
        .with_context(|| format!("reading theme {}", path.display()))?;
    let theme = Theme::validate(config).context("invalid theme")?;

    let (width, height) = PREVIEW_SIZE;
    let host = MenuFrame::from_theme("preview", &theme, width, height)
        .with_close_action(true)
        .with_scrollbar(theme.scrollbar_thick as i32);

    let mut title_style = theme.title_style();
    let previews: Vec<Preview> = MenuBarStyle::ALL
        .iter()
        .map(|&style| {
            title_style.style = style;
            let mut bar = MenuBar::from_theme(title.as_str(), width, &title_style);
            let mut list = DrawList::new();
            bar.draw(&host, &mut list);
            Preview {
                style,
                code: style.code(),
                height: bar.height(),
                commands: list.commands,
            }
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&previews)?);
    Ok(())
}
