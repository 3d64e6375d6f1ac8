//! Background music player state
//!
//! Tracks are discovered in the music directory and played on a loop.
//! Sound output itself sits behind [`AudioBackend`]; the player only owns
//! the play/pause/stop state.

use crate::journal::error::JournalResult;
use serde::Serialize;
use std::path::{Path, PathBuf};

const MUSIC_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

/// Sink for playback commands
pub trait AudioBackend {
    /// Load `track` and play it on an endless loop
    fn play_looped(&mut self, track: &Path) -> JournalResult<()>;

    fn pause(&mut self) -> JournalResult<()>;

    fn resume(&mut self) -> JournalResult<()>;

    fn stop(&mut self) -> JournalResult<()>;
}

/// Command received by a [`SilentBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    PlayLooped(PathBuf),
    Pause,
    Resume,
    Stop,
}

/// Backend without sound output; records the commands it receives
#[derive(Debug, Default)]
pub struct SilentBackend {
    calls: Vec<AudioCall>,
}

impl SilentBackend {
    pub fn calls(&self) -> &[AudioCall] {
        &self.calls
    }
}

impl AudioBackend for SilentBackend {
    fn play_looped(&mut self, track: &Path) -> JournalResult<()> {
        self.calls.push(AudioCall::PlayLooped(track.to_path_buf()));
        Ok(())
    }

    fn pause(&mut self) -> JournalResult<()> {
        self.calls.push(AudioCall::Pause);
        Ok(())
    }

    fn resume(&mut self) -> JournalResult<()> {
        self.calls.push(AudioCall::Resume);
        Ok(())
    }

    fn stop(&mut self) -> JournalResult<()> {
        self.calls.push(AudioCall::Stop);
        Ok(())
    }
}

/// Music files available for playback
#[derive(Debug, Clone, Default)]
pub struct MusicLibrary {
    tracks: Vec<PathBuf>,
}

impl MusicLibrary {
    pub fn new(tracks: Vec<PathBuf>) -> Self {
        Self { tracks }
    }

    /// Collect `.mp3`, `.wav` and `.ogg` files from `dir`, sorted by path
    ///
    /// A missing directory is created and yields an empty library.
    pub fn scan(dir: impl AsRef<Path>) -> JournalResult<Self> {
        let dir = dir.as_ref();
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
            tracing::info!(
                dir = %dir.display(),
                "Created music folder; add .mp3, .wav or .ogg files for background music"
            );
            return Ok(Self::default());
        }

        let mut tracks: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .map(|e| MUSIC_EXTENSIONS.iter().any(|m| e.eq_ignore_ascii_case(m)))
                        .unwrap_or(false)
            })
            .collect();
        tracks.sort();

        tracing::info!(dir = %dir.display(), "Found {} music file(s)", tracks.len());
        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Looping background music with play/pause/stop
pub struct MusicPlayer<B: AudioBackend> {
    library: MusicLibrary,
    backend: B,
    state: PlaybackState,
    current_track: Option<PathBuf>,
}

impl<B: AudioBackend> MusicPlayer<B> {
    pub fn new(library: MusicLibrary, backend: B) -> Self {
        Self {
            library,
            backend,
            state: PlaybackState::Stopped,
            current_track: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_track(&self) -> Option<&Path> {
        self.current_track.as_deref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn library(&self) -> &MusicLibrary {
        &self.library
    }

    /// Start or resume playback
    pub fn play(&mut self) -> JournalResult<()> {
        match self.state {
            PlaybackState::Playing => Ok(()),
            PlaybackState::Paused => {
                self.backend.resume()?;
                self.state = PlaybackState::Playing;
                tracing::info!("Music resumed");
                Ok(())
            }
            PlaybackState::Stopped => {
                let track = match self
                    .current_track
                    .clone()
                    .or_else(|| self.library.tracks.first().cloned())
                {
                    Some(track) => track,
                    None => return Ok(()),
                };

                self.backend.play_looped(&track)?;
                tracing::info!(track = %track.display(), "Playing");
                self.current_track = Some(track);
                self.state = PlaybackState::Playing;
                Ok(())
            }
        }
    }

    /// Pause; only has an effect while playing
    pub fn pause(&mut self) -> JournalResult<()> {
        if self.state != PlaybackState::Playing {
            return Ok(());
        }
        self.backend.pause()?;
        self.state = PlaybackState::Paused;
        tracing::info!("Music paused");
        Ok(())
    }

    /// Stop and forget the current track
    pub fn stop(&mut self) -> JournalResult<()> {
        self.backend.stop()?;
        self.state = PlaybackState::Stopped;
        self.current_track = None;
        tracing::info!("Music stopped");
        Ok(())
    }

    /// Pause when playing, otherwise play
    pub fn toggle(&mut self) -> JournalResult<PlaybackState> {
        if self.state == PlaybackState::Playing {
            self.pause()?;
        } else {
            self.play()?;
        }
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::error::JournalError;
    use tempfile::tempdir;

    fn library() -> MusicLibrary {
        MusicLibrary::new(vec![PathBuf::from("music/a.ogg"), PathBuf::from("music/b.mp3")])
    }

    #[test]
    fn test_toggle_cycle() {
        let mut player = MusicPlayer::new(library(), SilentBackend::default());

        assert_eq!(player.toggle().unwrap(), PlaybackState::Playing);
        assert_eq!(player.current_track(), Some(Path::new("music/a.ogg")));
        assert_eq!(player.toggle().unwrap(), PlaybackState::Paused);
        assert_eq!(player.toggle().unwrap(), PlaybackState::Playing);

        assert_eq!(
            player.backend().calls(),
            &[
                AudioCall::PlayLooped(PathBuf::from("music/a.ogg")),
                AudioCall::Pause,
                AudioCall::Resume,
            ]
        );
    }

    #[test]
    fn test_stop_forgets_track() {
        let mut player = MusicPlayer::new(library(), SilentBackend::default());
        player.play().unwrap();
        player.stop().unwrap();

        assert_eq!(player.state(), PlaybackState::Stopped);
        assert_eq!(player.current_track(), None);
    }

    #[test]
    fn test_pause_when_stopped_is_noop() {
        let mut player = MusicPlayer::new(library(), SilentBackend::default());
        player.pause().unwrap();

        assert_eq!(player.state(), PlaybackState::Stopped);
        assert!(player.backend().calls().is_empty());
    }

    #[test]
    fn test_empty_library_never_plays() {
        let mut player = MusicPlayer::new(MusicLibrary::default(), SilentBackend::default());

        assert_eq!(player.toggle().unwrap(), PlaybackState::Stopped);
        assert!(player.backend().calls().is_empty());
    }

    struct BrokenBackend;

    impl AudioBackend for BrokenBackend {
        fn play_looped(&mut self, _track: &Path) -> JournalResult<()> {
            Err(JournalError::Audio("no output device".to_string()))
        }
        fn pause(&mut self) -> JournalResult<()> {
            Ok(())
        }
        fn resume(&mut self) -> JournalResult<()> {
            Ok(())
        }
        fn stop(&mut self) -> JournalResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_backend_failure_keeps_state() {
        let mut player = MusicPlayer::new(library(), BrokenBackend);

        assert!(matches!(player.play(), Err(JournalError::Audio(_))));
        assert_eq!(player.state(), PlaybackState::Stopped);
        assert_eq!(player.current_track(), None);
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.wav", "a.MP3", "cover.png", "c.ogg"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let library = MusicLibrary::scan(dir.path()).unwrap();
        let names: Vec<String> = library
            .tracks()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.MP3", "b.wav", "c.ogg"]);
    }

    #[test]
    fn test_scan_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let music = dir.path().join("music");

        let library = MusicLibrary::scan(&music).unwrap();
        assert!(library.is_empty());
        assert!(music.is_dir());
    }
}
