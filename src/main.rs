use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use quiz_author::cli::{self, CliArgs, Command};
use quiz_author::commands::Cmd;
use quiz_author::config::AuthorConfig;
use quiz_author::model::AppModel;
use quiz_author::persistence::{FileStorage, SlotStorage};
use quiz_author::preview;
use quiz_author::runtime::QuestionWidget;

/// Perform the side effects requested by `update`
fn execute(cmds: Vec<Cmd>, storage: &mut dyn SlotStorage) -> bool {
    let mut redraw = false;
    for cmd in cmds {
        match cmd {
            Cmd::Persist { key, content } => {
                if let Err(e) = storage.write(&key, &content) {
                    tracing::warn!("Failed to save slot {}: {}", key, e);
                }
            }
            Cmd::Redraw => redraw = true,
            Cmd::None | Cmd::Batch(_) => {}
        }
    }
    redraw
}

fn write_html(path: &Path, html: &str, open_after: bool) -> Result<()> {
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    if open_after {
        open::that(path).with_context(|| format!("Failed to open {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    quiz_author::tracing::init(args.verbose);

    let config = match &args.config {
        Some(path) => AuthorConfig::load_from(path),
        None => AuthorConfig::load(),
    };

    let mut storage = match args.store.clone() {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::user_default().context("No config directory available")?,
    };
    tracing::debug!("Using storage at {}", storage.dir().display());

    let mut model = AppModel::load(&storage, &config);

    let cmds = args.command.apply(&mut model).map_err(anyhow::Error::msg)?;
    if execute(cmds, &mut storage) {
        tracing::debug!("Views re-derived after edit");
    }

    match &args.command {
        Command::Show => print!("{}", cli::describe(&model)),
        Command::Markup => println!("{}", model.markup()),
        Command::Preview { out, open } => {
            let fragment = model.preview();
            match out {
                Some(path) => {
                    let page = preview::render_page(&fragment, &model.document.question_text, false);
                    write_html(path, &page, *open)?;
                }
                None => println!("{}", fragment),
            }
        }
        Command::Export { out, open } => {
            let page = preview::render_page(&model.preview(), &model.document.question_text, true);
            write_html(out, &page, *open)?;
        }
        Command::Check { choice } => {
            let id = cli::resolve_choice(&model.document, choice).unwrap_or_else(|| choice.clone());
            let mut widget = QuestionWidget::from_document(&model.document);
            widget.select(id);
            if let Some(verdict) = widget.submit() {
                println!("{}", verdict.message());
            }
        }
        Command::ShowHint => {
            let widget = QuestionWidget::from_document(&model.document);
            println!("{}", widget.hint());
        }
        // Editing commands echo the updated question
        _ => print!("{}", cli::describe(&model)),
    }

    Ok(())
}
