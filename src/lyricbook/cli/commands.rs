use super::logging::init_logging;
use super::print::{print_config, print_labels, print_lyrics, print_messages, print_numbered};
use super::setup::{Cli, Commands};
use clap::Parser;
use lyricbook::api::LyricbookApi;
use lyricbook::error::Result;
use lyricbook::init::initialize;
use lyricbook::provider::GeniusProvider;
use lyricbook::store::fs::FileStore;

struct AppContext {
    api: LyricbookApi<FileStore, GeniusProvider>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is the normal case
    let _ = dotenvy::dotenv();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            artist,
            song,
            lyrics,
        }) => handle_add(&mut ctx, &artist, &song, &lyrics),
        Some(Commands::Fetch { artist, song }) => handle_fetch(&mut ctx, &artist, &song),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { artist, song }) => handle_view(&ctx, &artist, &song),
        Some(Commands::Search { term }) => handle_search(&ctx, &term),
        Some(Commands::Remove { artist, song }) => handle_remove(&mut ctx, &artist, &song),
        Some(Commands::Config) => handle_config(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.file.as_deref())?;
    Ok(AppContext { api: ctx.api })
}

fn handle_add(ctx: &mut AppContext, artist: &str, song: &str, lyrics: &str) -> Result<()> {
    let result = ctx.api.add_song(artist, song, lyrics)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fetch(ctx: &mut AppContext, artist: &str, song: &str) -> Result<()> {
    let result = ctx.api.fetch_song(artist, song)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_songs()?;
    print_numbered(&result.listed_songs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, artist: &str, song: &str) -> Result<()> {
    let result = ctx.api.view_song(artist, song)?;
    print_lyrics(&result.listed_songs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_songs(term)?;
    print_labels(&result.listed_songs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, artist: &str, song: &str) -> Result<()> {
    let result = ctx.api.remove_song(artist, song)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config();
    if let Some(report) = &result.config {
        print_config(report);
    }
    print_messages(&result.messages);
    Ok(())
}
