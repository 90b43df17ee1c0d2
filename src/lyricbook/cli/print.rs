use colored::Colorize;
use lyricbook::api::{CmdMessage, ConfigReport, MessageLevel};
use lyricbook::model::Song;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_numbered(songs: &[Song]) {
    for line in numbered_lines(songs) {
        println!("{}", line);
    }
}

pub(super) fn print_labels(songs: &[Song]) {
    for song in songs {
        println!("{}", song.label());
    }
}

pub(super) fn print_lyrics(songs: &[Song]) {
    for song in songs {
        println!();
        println!("{}", song.label().bold());
        println!();
        println!("{}", song.lyrics);
    }
}

pub(super) fn print_config(report: &ConfigReport) {
    for line in config_lines(report) {
        println!("{}", line);
    }
}

fn numbered_lines(songs: &[Song]) -> Vec<String> {
    songs
        .iter()
        .enumerate()
        .map(|(i, song)| format!("{}. {}", i + 1, song.label()))
        .collect()
}

fn config_lines(report: &ConfigReport) -> Vec<String> {
    let token = if report.has_token { "set" } else { "not set" };
    vec![
        format!("store-file = {}", report.store_file.display()),
        format!("config-file = {}", report.config_file.display()),
        format!("genius-token = {}", token),
        format!("base-url = {}", report.base_url),
        format!("timeout-secs = {}", report.timeout_secs),
        format!("excluded-terms = {}", report.excluded_terms.join(", ")),
        format!("skip-non-songs = {}", report.skip_non_songs),
        format!("remove-section-headers = {}", report.remove_section_headers),
    ]
}
