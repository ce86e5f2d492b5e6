//! Static asset catalog
//!
//! Images and sounds are loaded and decoded by the presentation host. The
//! simulation only refers to them by id and reads the metadata below.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Art by Kim Lathrop (non-commercial reuse, please credit)
const ART_BASE: &str = "http://commondatastorage.googleapis.com/codeskulptor-assets/lathrop";
const SOUND_BASE: &str = "http://commondatastorage.googleapis.com/codeskulptor-assets/sounddogs";

/// Image resources known to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageId {
    Debris,
    Nebula,
    Splash,
    Ship,
    Missile,
    Asteroid,
}

impl ImageId {
    pub const ALL: [ImageId; 6] = [
        ImageId::Debris,
        ImageId::Nebula,
        ImageId::Splash,
        ImageId::Ship,
        ImageId::Missile,
        ImageId::Asteroid,
    ];

    /// Metadata for this image
    pub fn info(self) -> ImageInfo {
        match self {
            ImageId::Debris => ImageInfo::new([320.0, 240.0], [640.0, 480.0]),
            ImageId::Nebula => ImageInfo::new([400.0, 300.0], [800.0, 600.0]),
            ImageId::Splash => ImageInfo::new([200.0, 150.0], [400.0, 300.0]),
            ImageId::Ship => ImageInfo::new([45.0, 45.0], [90.0, 90.0]).with_radius(35.0),
            ImageId::Missile => ImageInfo::new([5.0, 5.0], [10.0, 10.0])
                .with_radius(3.0)
                .with_lifespan(50),
            ImageId::Asteroid => ImageInfo::new([45.0, 45.0], [90.0, 90.0]).with_radius(40.0),
        }
    }

    /// Where the host should load this image from
    pub fn url(self) -> String {
        let file = match self {
            ImageId::Debris => "debris2_blue.png",
            ImageId::Nebula => "nebula_blue.s2014.png",
            ImageId::Splash => "splash.png",
            ImageId::Ship => "double_ship.png",
            ImageId::Missile => "shot2.png",
            ImageId::Asteroid => "asteroid_blue.png",
        };
        format!("{ART_BASE}/{file}")
    }
}

/// Immutable image descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Center of the source rectangle within the image
    pub center: Vec2,
    /// Source rectangle size (also drawn at this size)
    pub size: Vec2,
    /// Collision radius (0 if non-collidable)
    pub radius: f32,
    /// Ticks before an entity using this image expires (None = never)
    pub lifespan: Option<u32>,
    /// Multi-frame animation strip
    pub animated: bool,
}

impl ImageInfo {
    const fn new(center: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            center: Vec2::new(center[0], center[1]),
            size: Vec2::new(size[0], size[1]),
            radius: 0.0,
            lifespan: None,
            animated: false,
        }
    }

    const fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    const fn with_lifespan(mut self, ticks: u32) -> Self {
        self.lifespan = Some(ticks);
        self
    }
}

/// Sound resources known to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundId {
    Soundtrack,
    Missile,
    Thrust,
}

impl SoundId {
    pub const ALL: [SoundId; 3] = [SoundId::Soundtrack, SoundId::Missile, SoundId::Thrust];

    pub fn info(self) -> SoundInfo {
        match self {
            SoundId::Missile => SoundInfo { volume: 0.5 },
            SoundId::Soundtrack | SoundId::Thrust => SoundInfo { volume: 1.0 },
        }
    }

    pub fn url(self) -> String {
        let file = match self {
            SoundId::Soundtrack => "soundtrack.mp3",
            SoundId::Missile => "missile.mp3",
            SoundId::Thrust => "thrust.mp3",
        };
        format!("{SOUND_BASE}/{file}")
    }
}

/// Sound descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundInfo {
    /// Playback volume (0.0 - 1.0)
    pub volume: f32,
}
