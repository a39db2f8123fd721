// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use altech_content::SiteContent;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Loads site content from the built-ins plus an optional override file.
/// Reloading re-reads the file so edits show up without a restart.
pub struct ContentRuntime {
    override_path: Option<PathBuf>,
}

impl ContentRuntime {
    pub fn new(override_path: Option<PathBuf>) -> Self {
        Self { override_path }
    }
}

impl altech_tui::AppRuntime for ContentRuntime {
    fn load_content(&mut self) -> Result<SiteContent> {
        let path = self.override_path.as_deref();
        altech_content::load_content(path).with_context(|| match path {
            Some(path) => format!("load content with overrides from {}", path.display()),
            None => "load built-in content".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ContentRuntime;
    use altech_content::builtin;
    use altech_tui::AppRuntime;
    use anyhow::Result;

    #[test]
    fn without_overrides_returns_builtin() -> Result<()> {
        let mut runtime = ContentRuntime::new(None);
        assert_eq!(runtime.load_content()?, builtin());
        Ok(())
    }

    #[test]
    fn reload_picks_up_file_edits() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("content.toml");
        std::fs::write(&path, "version = 1\nclients = [\"Sarens\"]\n")?;

        let mut runtime = ContentRuntime::new(Some(path.clone()));
        assert_eq!(runtime.load_content()?.clients, vec!["Sarens".to_owned()]);

        std::fs::write(&path, "version = 1\nclients = [\"Tata Projects\", \"Sarens\"]\n")?;
        assert_eq!(runtime.reload_content()?.clients.len(), 2);
        Ok(())
    }

    #[test]
    fn broken_override_names_the_file() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("content.toml");
        std::fs::write(&path, "clients = []\n")?;

        let mut runtime = ContentRuntime::new(Some(path.clone()));
        let error = runtime
            .load_content()
            .expect_err("unversioned content should fail");
        let message = format!("{error:#}");
        assert!(message.contains(&path.display().to_string()));
        assert!(message.contains("version = 1"));
        Ok(())
    }
}
