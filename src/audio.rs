//! Sound cues for simulation events
//!
//! The host owns the decoded sounds. `AudioManager` turns `GameEvent`s into
//! play/pause/rewind calls on whatever `AudioSink` the host provides.

use crate::assets::SoundId;
use crate::sim::GameEvent;

/// Sound playback backend provided by the host
pub trait AudioSink {
    /// Start (or resume) a sound at the given volume (0.0 - 1.0)
    fn play(&mut self, sound: SoundId, volume: f32);
    fn pause(&mut self, sound: SoundId);
    /// Seek back to the start
    fn rewind(&mut self, sound: SoundId);
}

/// Sink that only logs; used when the host has no audio
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, sound: SoundId, volume: f32) {
        log::trace!("play {sound:?} at {volume:.2}");
    }

    fn pause(&mut self, sound: SoundId) {
        log::trace!("pause {sound:?}");
    }

    fn rewind(&mut self, sound: SoundId) {
        log::trace!("rewind {sound:?}");
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, sound: SoundId) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * sound.info().volume
        }
    }

    /// Restart a sound from the beginning
    fn restart<S: AudioSink + ?Sized>(&self, sink: &mut S, sound: SoundId) {
        let vol = self.effective_volume(sound);
        sink.rewind(sound);
        if vol > 0.0 {
            sink.play(sound, vol);
        }
    }

    /// React to one simulation event
    pub fn handle<S: AudioSink + ?Sized>(&self, event: &GameEvent, sink: &mut S) {
        match event {
            GameEvent::GameStarted => sink.pause(SoundId::Soundtrack),
            GameEvent::GameOver { .. } => self.restart(sink, SoundId::Soundtrack),
            GameEvent::ThrustOn => self.restart(sink, SoundId::Thrust),
            GameEvent::ThrustOff => sink.pause(SoundId::Thrust),
            GameEvent::MissileFired => self.restart(sink, SoundId::Missile),
            GameEvent::RocksDestroyed { .. } | GameEvent::ShipHit { .. } => {}
        }
    }

    pub fn handle_all<S: AudioSink + ?Sized>(&self, events: &[GameEvent], sink: &mut S) {
        for event in events {
            self.handle(event, sink);
        }
    }
}
