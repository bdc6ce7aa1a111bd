use serde::Deserialize;
use thiserror::Error;

/// Scroll offset (px) after which the nav switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;
/// Scroll distance (px) over which the hero fades out and shrinks.
pub const HERO_FADE_DISTANCE: f64 = 300.0;
pub const HERO_MIN_SCALE: f64 = 0.95;

// Carousel strides are item width plus the flex gap.
pub const PARTNER_STRIDE_PX: u32 = 196;
pub const PARTNER_LOOP_SECS: u32 = 20;
pub const VIDEO_STRIDE_PX: u32 = 404;
pub const VIDEO_LOOP_SECS: u32 = 30;
pub const CAROUSEL_COPIES: usize = 3;

pub const RING_SWEEP_MS: u32 = 1500;
pub const COUNT_UP_MS: u32 = 1200;
pub const COUNTER_STEPS: u32 = 60;
pub const COUNT_START_OFFSET_MS: u32 = 400;
pub const LABEL_FADE_OFFSET_MS: u32 = 1400;

const EMBEDDED_SITE_CONFIG: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid contact email address: {0:?}")]
    InvalidContactEmail(String),
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub company_name: String,
    pub legal_name: String,
    pub contact_email: String,
    pub copyright_year: u16,
    #[serde(default)]
    pub theme: Theme,
    pub logo_src: String,
    pub hero_background: String,
    pub default_video_thumbnail: String,
}

impl SiteConfig {
    /// Loads the configuration baked into the binary from `site.json`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE_CONFIG)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let email = self.contact_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ConfigError::InvalidContactEmail(self.contact_email.clone()));
        }
        Ok(())
    }

    pub fn copyright_line(&self) -> String {
        format!("© {} {}. All rights reserved.", self.copyright_year, self.legal_name)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: "Stargate".to_string(),
            legal_name: "Stargate Technology Consultancy".to_string(),
            contact_email: "info@stargategh.com".to_string(),
            copyright_year: 2026,
            theme: Theme::Light,
            logo_src: "/logow.png".to_string(),
            hero_background: "/skylinebg.jpeg".to_string(),
            default_video_thumbnail: "/images/default-video-thumb.svg".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = SiteConfig::load().expect("site.json should parse");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn theme_defaults_to_light_when_omitted() {
        let raw = r#"{
            "company_name": "Acme",
            "legal_name": "Acme Ltd",
            "contact_email": "hello@acme.test",
            "copyright_year": 2030,
            "logo_src": "/logo.png",
            "hero_background": "/bg.jpg",
            "default_video_thumbnail": "/thumb.svg"
        }"#;
        let config = SiteConfig::from_json(raw).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.copyright_line(), "© 2030 Acme Ltd. All rights reserved.");
    }

    #[test]
    fn rejects_contact_email_without_at_sign() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_SITE_CONFIG).unwrap();
        value["contact_email"] = serde_json::Value::String("nobody".into());
        let err = SiteConfig::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidContactEmail(ref e) if e == "nobody"));
    }

    #[test]
    fn reports_malformed_json() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
