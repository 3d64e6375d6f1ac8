//! Mood catalog and carousel
//!
//! The catalog is derived from the image files in the asset directory:
//! one mood per image, named after the file stem. UI images (buttons,
//! background, arrows) are filtered out and the remaining moods are put in
//! a fixed priority order, with unrecognized moods appended afterwards.

use crate::journal::error::{JournalError, JournalResult};
use crate::storage::is_valid_mood_name;
use std::path::{Path, PathBuf};

/// Display order for the built-in moods
pub const DEFAULT_MOOD_ORDER: [&str; 7] = [
    "joy", "neutral", "sadness", "anger", "annoyed", "anxiety", "fear",
];

/// File name fragments that mark an image as UI chrome rather than a mood
pub const UI_ASSET_TOKENS: [&str; 11] = [
    "background",
    "arrow1",
    "arrow2",
    "close",
    "click1",
    "confirmation",
    "notes",
    "history",
    "stats",
    "leaf",
    "music",
];

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Ordered list of loggable moods
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodCatalog {
    moods: Vec<String>,
}

impl MoodCatalog {
    /// Build a catalog from the mood images in `dir`
    ///
    /// A missing directory gives an empty catalog.
    pub fn from_asset_dir(dir: impl AsRef<Path>, order: &[String]) -> JournalResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "Mood asset directory not found");
            return Ok(Self::default());
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for ext in IMAGE_EXTENSIONS {
            let mut group: Vec<PathBuf> = std::fs::read_dir(dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.is_file() && has_extension(path, ext))
                .collect();
            group.sort();
            files.extend(group);
        }

        let stems = files.iter().filter_map(|path| {
            let file_name = path.file_name()?.to_str()?.to_lowercase();
            if UI_ASSET_TOKENS.iter().any(|token| file_name.contains(token)) {
                return None;
            }
            path.file_stem()?.to_str().map(str::to_string)
        });

        let catalog = Self::from_names(stems, order);
        tracing::info!(
            dir = %dir.display(),
            moods = ?catalog.moods,
            "Loaded {} mood(s)",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from raw names using the priority `order`
    pub fn from_names<I, S>(names: I, order: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut remaining: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut ordered: Vec<String> = Vec::with_capacity(remaining.len());

        for wanted in order {
            let wanted = wanted.to_lowercase();
            if let Some(pos) = remaining.iter().position(|n| n.to_lowercase() == wanted) {
                ordered.push(remaining.remove(pos));
            }
        }
        ordered.extend(remaining);

        let mut moods: Vec<String> = Vec::with_capacity(ordered.len());
        for raw in ordered {
            let name = capitalize(&raw);
            if !is_valid_mood_name(&name) {
                tracing::warn!(name = %raw, "Skipping mood with non-word characters");
                continue;
            }
            if !moods.contains(&name) {
                moods.push(name);
            }
        }

        Self { moods }
    }

    pub fn moods(&self) -> &[String] {
        &self.moods
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.moods.get(index).map(String::as_str)
    }

    /// Whether `mood` can be logged, ignoring case
    pub fn contains(&self, mood: &str) -> bool {
        self.position(mood).is_some()
    }

    /// Case-insensitive lookup of a mood's position
    pub fn position(&self, mood: &str) -> Option<usize> {
        let mood = mood.to_lowercase();
        self.moods.iter().position(|m| m.to_lowercase() == mood)
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// First character upper-case, the rest lower-case
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Cycles through the catalog; the selected mood is what gets logged
#[derive(Debug, Clone, Default)]
pub struct MoodCarousel {
    catalog: MoodCatalog,
    index: usize,
}

impl MoodCarousel {
    pub fn new(catalog: MoodCatalog) -> Self {
        Self { catalog, index: 0 }
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently selected mood, `None` for an empty catalog
    pub fn current(&self) -> Option<&str> {
        self.catalog.get(self.index)
    }

    pub fn next(&mut self) -> Option<&str> {
        if !self.catalog.is_empty() {
            self.index = (self.index + 1) % self.catalog.len();
        }
        self.current()
    }

    pub fn previous(&mut self) -> Option<&str> {
        if !self.catalog.is_empty() {
            let len = self.catalog.len();
            self.index = (self.index + len - 1) % len;
        }
        self.current()
    }

    /// Jump to a mood by name (case-insensitive)
    pub fn select(&mut self, mood: &str) -> JournalResult<&str> {
        let index = self
            .catalog
            .position(mood)
            .ok_or_else(|| JournalError::UnknownMood(mood.to_string()))?;
        self.index = index;
        Ok(self.catalog.moods[index].as_str())
    }
}
