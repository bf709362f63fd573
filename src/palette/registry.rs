//! Palette Registry
//!
//! In-memory set of palettes with one active palette. The built-in palette
//! is always present; palette files from directories are layered on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::schema::Palette;

/// Where a palette came from; later sources override earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaletteSource {
    BuiltIn = 0,
    UserGlobal = 1,
    Explicit = 2,
}

/// A palette with its source
#[derive(Debug, Clone)]
pub struct LoadedPalette {
    pub palette: Palette,
    pub source: PaletteSource,
    pub source_path: Option<PathBuf>,
}

/// Simple in-memory palette registry
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: HashMap<String, LoadedPalette>,
    active_palette: String,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteRegistry {
    /// Create a registry holding only the built-in palette, which is active
    pub fn new() -> Self {
        let builtin = Palette::builtin().clone();
        let active_palette = builtin.name.clone();
        let mut palettes = HashMap::new();
        palettes.insert(
            active_palette.clone(),
            LoadedPalette {
                palette: builtin,
                source: PaletteSource::BuiltIn,
                source_path: None,
            },
        );

        Self {
            palettes,
            active_palette,
        }
    }

    /// Add a palette, unless one of the same name came from a higher-priority source
    pub fn add_palette(&mut self, loaded: LoadedPalette) -> bool {
        let should_load = match self.palettes.get(&loaded.palette.name) {
            Some(existing) => loaded.source >= existing.source,
            None => true,
        };

        if should_load {
            self.palettes.insert(loaded.palette.name.clone(), loaded);
        }
        should_load
    }

    /// Set the active palette
    pub fn set_active_palette(&mut self, name: &str) -> bool {
        if self.palettes.contains_key(name) {
            self.active_palette = name.to_string();
            true
        } else {
            false
        }
    }

    /// Get the currently active palette
    pub fn active_palette(&self) -> &Palette {
        match self.palettes.get(&self.active_palette) {
            Some(loaded) => &loaded.palette,
            None => Palette::builtin(),
        }
    }

    pub fn get_palette(&self, name: &str) -> Option<&LoadedPalette> {
        self.palettes.get(name)
    }

    /// List all available palette names, sorted
    pub fn list_palettes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.palettes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Load every `*.palette.toml` file in `dir`
    ///
    /// A missing directory is not an error. Files that fail to parse are
    /// logged and skipped. Returns the number of palettes added.
    pub async fn load_directory(&mut self, dir: &Path, source: PaletteSource) -> Result<usize> {
        if !dir.exists() {
            log::debug!("Palette directory {} does not exist", dir.display());
            return Ok(0);
        }

        let mut entries = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read palette directory: {}", dir.display()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if is_palette_file(&path) {
                paths.push(path);
            }
        }
        // Directory order is platform-dependent; same-name files resolve by path order.
        paths.sort();

        let mut added = 0;
        for path in paths {
            match load_palette_file(&path).await {
                Ok(palette) => {
                    log::info!("Loaded palette '{}' from {}", palette.name, path.display());
                    if self.add_palette(LoadedPalette {
                        palette,
                        source,
                        source_path: Some(path),
                    }) {
                        added += 1;
                    }
                }
                Err(e) => log::warn!("Skipping palette file {}: {:#}", path.display(), e),
            }
        }

        Ok(added)
    }
}

fn is_palette_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".palette.toml"))
}

async fn load_palette_file(path: &Path) -> Result<Palette> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read palette file: {}", path.display()))?;

    Palette::from_toml(&content)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Failed to parse palette TOML: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::schema::{PaletteFile, PaletteMeta};

    fn empty_palette(name: &str) -> Palette {
        Palette::try_from(PaletteFile {
            palette: PaletteMeta {
                name: name.to_string(),
                version: None,
                description: None,
            },
            colors: vec![],
        })
        .unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let registry = PaletteRegistry::new();
        assert_eq!(registry.list_palettes(), vec!["default"]);
        assert_eq!(registry.active_palette().name, "default");
    }

    #[test]
    fn test_add_and_activate_palette() {
        let mut registry = PaletteRegistry::new();
        assert!(registry.add_palette(LoadedPalette {
            palette: empty_palette("mono"),
            source: PaletteSource::UserGlobal,
            source_path: None,
        }));
        assert!(registry.set_active_palette("mono"));
        assert_eq!(registry.active_palette().name, "mono");
    }

    #[test]
    fn test_nonexistent_palette() {
        let mut registry = PaletteRegistry::new();
        assert!(!registry.set_active_palette("nonexistent"));
        assert_eq!(registry.active_palette().name, "default");
    }

    #[test]
    fn test_lower_priority_does_not_override() {
        let mut registry = PaletteRegistry::new();
        registry.add_palette(LoadedPalette {
            palette: empty_palette("mono"),
            source: PaletteSource::Explicit,
            source_path: None,
        });
        let replaced = registry.add_palette(LoadedPalette {
            palette: empty_palette("mono"),
            source: PaletteSource::UserGlobal,
            source_path: Some(PathBuf::from("user/mono.palette.toml")),
        });
        assert!(!replaced);
        assert_eq!(
            registry.get_palette("mono").unwrap().source,
            PaletteSource::Explicit
        );
    }

    #[test]
    fn test_user_palette_can_override_builtin() {
        let mut registry = PaletteRegistry::new();
        assert!(registry.add_palette(LoadedPalette {
            palette: empty_palette("default"),
            source: PaletteSource::UserGlobal,
            source_path: None,
        }));
        assert!(registry.active_palette().is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_is_ignored() {
        let mut registry = PaletteRegistry::new();
        let added = registry
            .load_directory(Path::new("/definitely/not/here"), PaletteSource::Explicit)
            .await
            .unwrap();
        assert_eq!(added, 0);
    }
}
