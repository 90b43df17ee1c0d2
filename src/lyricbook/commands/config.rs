use crate::commands::{CmdResult, ConfigReport};
use crate::config::LyricbookConfig;
use std::path::Path;

pub fn run(config: &LyricbookConfig, store_file: &Path, config_file: &Path) -> CmdResult {
    let provider = &config.provider;
    CmdResult::default().with_config(ConfigReport {
        store_file: store_file.to_path_buf(),
        config_file: config_file.to_path_buf(),
        has_token: provider.has_token(),
        base_url: provider.base_url.clone(),
        timeout_secs: provider.timeout_secs,
        excluded_terms: provider.excluded_terms.clone(),
        skip_non_songs: provider.skip_non_songs,
        remove_section_headers: provider.remove_section_headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_token_presence_only() {
        let mut config = LyricbookConfig::default();
        config.provider.access_token = Some("secret".into());

        let result = run(&config, Path::new("/tmp/book.json"), Path::new("/tmp/config.json"));
        let report = result.config.unwrap();
        assert!(report.has_token);
        assert_eq!(report.store_file, Path::new("/tmp/book.json"));
        assert!(!format!("{:?}", report).contains("secret"));
    }
}
