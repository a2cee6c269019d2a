//! Font loading for the cursor glyph
//!
//! The font is read and validated before the Bevy app is built, so a missing
//! or broken file stops startup before a window ever opens. Once the asset
//! storage exists the font is registered and its handle shared with the
//! cursor glyph.

use bevy::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the startup font
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Could not load font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not load font {}: not a valid font file ({reason})", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Owns the single font used by the application
///
/// A `FontStore` only exists once its font has been read and parsed. The
/// parsed font is handed over to `Assets<Font>` at registration; afterwards
/// it is read through [`FontStore::handle`].
#[derive(Resource, Debug, Clone)]
pub struct FontStore {
    path: PathBuf,
    pending: Option<Font>,
    handle: Handle<Font>,
}

impl FontStore {
    /// Read and validate the font at `path`. No retry, no fallback font.
    pub fn load_resources(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path).map_err(|source| FontLoadError::Read {
            path: path.clone(),
            source,
        })?;
        let font = Font::try_from_bytes(bytes).map_err(|e| FontLoadError::Parse {
            path: path.clone(),
            reason: format!("{e:?}"),
        })?;

        debug!("Loaded font from {:?}", path);
        Ok(Self {
            path,
            pending: Some(font),
            handle: Handle::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Asset handle of the font, valid once [`FontStorePlugin`] has run its
    /// `PreStartup` registration
    pub fn handle(&self) -> Handle<Font> {
        self.handle.clone()
    }

    /// Move the parsed font into asset storage. Later calls keep the
    /// existing handle.
    fn register(&mut self, fonts: &mut Assets<Font>) {
        if let Some(font) = self.pending.take() {
            self.handle = fonts.add(font);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parsed(path: impl Into<PathBuf>, font: Font) -> Self {
        Self {
            path: path.into(),
            pending: Some(font),
            handle: Handle::default(),
        }
    }
}

/// Registers the preloaded font with Bevy's asset storage
pub struct FontStorePlugin;

impl Plugin for FontStorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, register_font);
    }
}

fn register_font(mut fonts: ResMut<Assets<Font>>, mut store: ResMut<FontStore>) {
    store.register(&mut fonts);
    debug!("Registered {:?} as the cursor font", store.path());
}
