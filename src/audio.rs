//! Sound effects.
//!
//! Clips are read into memory up front. The three default clips are
//! compiled into the binary; an assets directory can replace any of them.
//! Playback runs on its own thread, which owns the rodio output stream;
//! the UI only sends [`SoundEvent`]s.
//! Nothing here can fail the game: a missing clip, a missing audio device
//! or a dead playback thread just means silence.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use derive_more::{Display, Error};
use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, StreamError};
use tracing::{debug, info, warn};

/// Trigger events sent by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    MovePlaced,
    GameWon,
    GameDrawn,
}

impl SoundEvent {
    pub const ALL: [SoundEvent; 3] = [
        SoundEvent::MovePlaced,
        SoundEvent::GameWon,
        SoundEvent::GameDrawn,
    ];

    /// Clip file name inside the assets directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEvent::MovePlaced => "click.wav",
            SoundEvent::GameWon => "win.wav",
            SoundEvent::GameDrawn => "draw.wav",
        }
    }

    /// Clip compiled into the binary
    pub fn bundled(self) -> &'static [u8] {
        match self {
            SoundEvent::MovePlaced => include_bytes!("../assets/click.wav"),
            SoundEvent::GameWon => include_bytes!("../assets/win.wav"),
            SoundEvent::GameDrawn => include_bytes!("../assets/draw.wav"),
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Display, Error)]
pub enum AudioError {
    #[display("failed to open audio output: {source}")]
    Output { source: StreamError },
    #[display("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("failed to decode {}: {source}", path.display())]
    Decode { path: PathBuf, source: DecoderError },
}

/// Encoded audio kept in memory so every trigger can decode a fresh copy
#[derive(Debug, Clone)]
pub struct Clip {
    bytes: Arc<[u8]>,
}

impl Clip {
    /// Wrap encoded bytes, checking they decode
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, DecoderError> {
        let clip = Self {
            bytes: bytes.into(),
        };
        clip.decoder()?;
        Ok(clip)
    }

    fn decoder(&self) -> Result<Decoder<Cursor<Arc<[u8]>>>, DecoderError> {
        Decoder::new(Cursor::new(Arc::clone(&self.bytes)))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Read and validate one clip
pub fn load_clip(path: &Path) -> Result<Clip, AudioError> {
    let bytes = fs::read(path).map_err(|source| AudioError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Clip::from_bytes(bytes).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// One optional clip per [`SoundEvent`]
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    clips: [Option<Clip>; 3],
}

impl SoundBank {
    /// The clips compiled into the binary
    pub fn bundled() -> Self {
        let mut bank = Self::default();

        for event in SoundEvent::ALL {
            match Clip::from_bytes(event.bundled().to_vec()) {
                Ok(clip) => bank.clips[event.slot()] = Some(clip),
                Err(e) => warn!(?event, "failed to decode bundled clip: {e}"),
            }
        }

        bank
    }

    /// Bundled clips, each replaced by its file in `dir` when that file
    /// loads. Clips are independent; a missing or broken file keeps the
    /// bundled one.
    pub fn load(dir: &Path) -> Self {
        let mut bank = Self::bundled();

        for event in SoundEvent::ALL {
            let path = dir.join(event.file_name());
            match load_clip(&path) {
                Ok(clip) => {
                    debug!(path = %path.display(), bytes = clip.len(), "loaded clip");
                    bank.clips[event.slot()] = Some(clip);
                }
                Err(e) => warn!("{e}, using bundled clip"),
            }
        }

        bank
    }

    pub fn get(&self, event: SoundEvent) -> Option<&Clip> {
        self.clips[event.slot()].as_ref()
    }

    pub fn loaded(&self) -> usize {
        self.clips.iter().flatten().count()
    }
}

/// Handle held by the UI. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SoundPlayer {
    event_tx: Option<Sender<SoundEvent>>,
}

impl SoundPlayer {
    /// A player that drops every trigger
    pub fn disabled() -> Self {
        Self { event_tx: None }
    }

    /// Spawn the playback thread
    pub fn start(bank: SoundBank, volume: f32) -> Self {
        if bank.loaded() == 0 {
            info!("no sound clips loaded, playing silently");
            return Self::disabled();
        }

        let (event_tx, event_rx) = mpsc::channel::<SoundEvent>();

        let spawned = thread::Builder::new()
            .name("audio".into())
            .spawn(move || match AudioEngine::new(bank, volume) {
                Ok(engine) => engine.run(event_rx),
                Err(e) => warn!("{e}"),
            });

        match spawned {
            Ok(_) => Self {
                event_tx: Some(event_tx),
            },
            Err(e) => {
                warn!("failed to spawn audio thread: {e}");
                Self::disabled()
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_sender(event_tx: Sender<SoundEvent>) -> Self {
        Self {
            event_tx: Some(event_tx),
        }
    }

    /// Best-effort send. If the engine died, the event is dropped.
    pub fn play(&self, event: SoundEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.event_tx.is_some()
    }
}

/// Owner of the output stream. Lives on the audio thread.
struct AudioEngine {
    // Must stay alive while clips play
    stream: OutputStream,
    bank: SoundBank,
    volume: f32,
}

impl AudioEngine {
    fn new(bank: SoundBank, volume: f32) -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|source| AudioError::Output { source })?;

        Ok(Self {
            stream,
            bank,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    /// Play events until every sender is gone
    fn run(self, event_rx: Receiver<SoundEvent>) {
        while let Ok(event) = event_rx.recv() {
            self.play(event);
        }
        debug!("audio thread exiting");
    }

    fn play(&self, event: SoundEvent) {
        let Some(clip) = self.bank.get(event) else {
            return;
        };

        match clip.decoder() {
            Ok(source) => {
                let sink = Sink::connect_new(self.stream.mixer());
                sink.set_volume(self.volume);
                sink.append(source);
                // Keeps playing after the handle is dropped
                sink.detach();
            }
            Err(e) => warn!(?event, "failed to decode clip: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mono 16-bit PCM WAV of `samples` silent frames
    fn silent_wav(samples: u32) -> Vec<u8> {
        let sample_rate: u32 = 8000;
        let data_len = samples * 2;
        let mut wav = Vec::with_capacity(44 + data_len as usize);
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&1u16.to_le_bytes()); // channels
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
        wav.extend_from_slice(&2u16.to_le_bytes()); // block align
        wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.resize(44 + data_len as usize, 0);
        wav
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("tictactoe-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_file_names() {
        assert_eq!(SoundEvent::MovePlaced.file_name(), "click.wav");
        assert_eq!(SoundEvent::GameWon.file_name(), "win.wav");
        assert_eq!(SoundEvent::GameDrawn.file_name(), "draw.wav");
    }

    #[test]
    fn test_valid_clip() {
        let clip = Clip::from_bytes(silent_wav(800)).unwrap();
        assert_eq!(clip.len(), 44 + 1600);
    }

    #[test]
    fn test_garbage_clip_rejected() {
        assert!(Clip::from_bytes(b"definitely not audio".to_vec()).is_err());
    }

    #[test]
    fn test_bundled_clips_decode() {
        let bank = SoundBank::bundled();
        assert_eq!(bank.loaded(), 3);
        for event in SoundEvent::ALL {
            assert_eq!(bank.get(event).map(Clip::len), Some(event.bundled().len()));
        }
    }

    #[test]
    fn test_missing_dir_falls_back_to_bundled() {
        let bank = SoundBank::load(Path::new("/nonexistent/tictactoe/sounds"));
        assert_eq!(bank.loaded(), 3);
        for event in SoundEvent::ALL {
            assert_eq!(bank.get(event).map(Clip::len), Some(event.bundled().len()));
        }
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_clip(Path::new("/nonexistent/click.wav")).unwrap_err();
        assert!(matches!(err, AudioError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/click.wav"));
    }

    #[test]
    fn test_clips_load_independently() {
        let dir = scratch_dir("bank");
        fs::write(dir.join("click.wav"), silent_wav(400)).unwrap();
        fs::write(dir.join("win.wav"), b"broken").unwrap();

        let bank = SoundBank::load(&dir);
        // Valid override replaces the bundled clip
        assert_eq!(bank.get(SoundEvent::MovePlaced).map(Clip::len), Some(44 + 800));
        // Broken and missing files keep the bundled ones
        let bundled_len = |event: SoundEvent| Some(event.bundled().len());
        assert_eq!(bank.get(SoundEvent::GameWon).map(Clip::len), bundled_len(SoundEvent::GameWon));
        assert_eq!(
            bank.get(SoundEvent::GameDrawn).map(Clip::len),
            bundled_len(SoundEvent::GameDrawn)
        );
        assert_eq!(bank.loaded(), 3);

        let err = load_clip(&dir.join("win.wav")).unwrap_err();
        assert!(matches!(err, AudioError::Decode { .. }));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_bank_starts_disabled() {
        let player = SoundPlayer::start(SoundBank::default(), 1.0);
        assert!(!player.is_enabled());
        player.play(SoundEvent::GameWon);
    }

    #[test]
    fn test_disabled_player_ignores_events() {
        let player = SoundPlayer::disabled();
        for event in SoundEvent::ALL {
            player.play(event);
        }
        assert!(!player.is_enabled());
    }
}
