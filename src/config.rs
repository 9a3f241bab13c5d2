use serde::{Deserialize, Serialize};

const DEFAULT_MEDIA_ROOT: &str = "/music";
const DEFAULT_VOLUME: f64 = 1.0;

/// Player settings, read from the `config` block of the bundled library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// URL prefix audio files are served under.
    pub media_root: String,
    pub initial_volume: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            media_root: DEFAULT_MEDIA_ROOT.to_string(),
            initial_volume: DEFAULT_VOLUME,
        }
    }
}

impl PlayerConfig {
    pub fn normalized(mut self) -> Self {
        self.media_root = if self.media_root.is_empty() {
            DEFAULT_MEDIA_ROOT.to_string()
        } else {
            // "/" collapses to "", i.e. files served from the site root.
            self.media_root.trim_end_matches('/').to_string()
        };
        self.initial_volume = normalize_volume(self.initial_volume);
        self
    }
}

/// Map any stored volume into `[0, 1]`. Percent-style values (e.g. `80`) are
/// scaled down.
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg: PlayerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PlayerConfig::default());
        assert_eq!(cfg.media_root, "/music");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let cfg = PlayerConfig {
            media_root: "/audio/".to_string(),
            initial_volume: 0.5,
        }
        .normalized();
        assert_eq!(cfg.media_root, "/audio");
    }

    #[test]
    fn bare_slash_means_site_root() {
        let cfg = PlayerConfig {
            media_root: "/".to_string(),
            initial_volume: 0.5,
        }
        .normalized();
        assert_eq!(cfg.media_root, "");
    }

    #[test]
    fn volume_normalization() {
        assert_eq!(normalize_volume(0.3), 0.3);
        assert_eq!(normalize_volume(80.0), 0.8);
        assert_eq!(normalize_volume(-2.0), 0.0);
        assert_eq!(normalize_volume(f64::NAN), 1.0);
    }
}
