//! Soundtrack catalogue and tunables.

use std::time::Duration;

use serde::Serialize;

const VASTOPIA_MP3: &str = "https://upload.wikimedia.org/wikipedia/commons/transcoded/8/81/Vastopia_-_Dark_Ambient_Music_for_Deep_Relaxation_and_Focus.ogg/Vastopia_-_Dark_Ambient_Music_for_Deep_Relaxation_and_Focus.ogg.mp3";
const VASTOPIA_OGG: &str = "https://upload.wikimedia.org/wikipedia/commons/8/81/Vastopia_-_Dark_Ambient_Music_for_Deep_Relaxation_and_Focus.ogg";
const VASTOPIA_LINK: &str = "https://commons.wikimedia.org/wiki/Special:FilePath/Vastopia_-_Dark_Ambient_Music_for_Deep_Relaxation_and_Focus.ogg";

const RASPBERRY_MP3: &str = "https://upload.wikimedia.org/wikipedia/commons/transcoded/8/8c/Raspberrymusic_-_Ambient_%2810_minutes%29.flac/Raspberrymusic_-_Ambient_%2810_minutes%29.flac.mp3";
const RASPBERRY_OGG: &str = "https://upload.wikimedia.org/wikipedia/commons/transcoded/8/8c/Raspberrymusic_-_Ambient_%2810_minutes%29.flac/Raspberrymusic_-_Ambient_%2810_minutes%29.flac.ogg";
const RASPBERRY_FLAC: &str = "https://upload.wikimedia.org/wikipedia/commons/8/8c/Raspberrymusic_-_Ambient_%2810_minutes%29.flac";
const RASPBERRY_LINK: &str =
    "https://commons.wikimedia.org/wiki/Special:FilePath/Raspberrymusic_-_Ambient_(10_minutes).flac";

const HAPPY_MP3: &str = "https://upload.wikimedia.org/wikipedia/commons/transcoded/e/ef/Ain%27t_we_got_fun_-_Billy_Jones.ogg/Ain%27t_we_got_fun_-_Billy_Jones.ogg.mp3";
const HAPPY_OGG: &str =
    "https://upload.wikimedia.org/wikipedia/commons/e/ef/Ain%27t_we_got_fun_-_Billy_Jones.ogg";
const HAPPY_LINK: &str =
    "https://commons.wikimedia.org/wiki/Special:FilePath/Ain%27t_we_got_fun_-_Billy_Jones.ogg";

/// A named piece of music with an ordered list of fallback sources. The
/// first source that starts playing wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub name: String,
    pub sources: Vec<String>,
}

impl Track {
    /// Builds a track from string slices.
    #[must_use]
    pub fn new(name: &str, sources: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            sources: sources.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// What the ambient channel is currently set up to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbientMode {
    /// The two-track playlist; each track plays once, then the next starts.
    Ambient,
    /// The finale track on a loop.
    Happy,
}

/// Audio tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    /// Ambient playlist, played in order and wrapping around.
    pub playlist: Vec<Track>,
    /// Looped once the story is finished.
    pub happy: Track,
    /// Minimum gap between two gesture-driven autoplay attempts.
    pub retry_throttle: Duration,
    /// Upper bound on waiting for a sound effect to finish.
    pub sfx_timeout: Duration,
    /// Upper bound on waiting for a single `play` or `resume` to start.
    pub playback_timeout: Duration,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            playlist: vec![
                Track::new("Vastopia", &[VASTOPIA_MP3, VASTOPIA_OGG, VASTOPIA_LINK]),
                Track::new(
                    "Raspberrymusic",
                    &[RASPBERRY_MP3, RASPBERRY_OGG, RASPBERRY_FLAC, RASPBERRY_LINK],
                ),
            ],
            happy: Track::new("Ain't we got fun", &[HAPPY_MP3, HAPPY_OGG, HAPPY_LINK]),
            retry_throttle: Duration::from_millis(350),
            sfx_timeout: Duration::from_millis(8000),
            playback_timeout: Duration::from_millis(4000),
        }
    }
}
