//! Static page content: carousel memories and gallery reasons.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryItem {
    pub id: u32,
    pub image: String,
    pub caption: String,
    pub date: String,
    pub milestone: String,
}

impl MemoryItem {
    fn new(id: u32, image: &str, caption: &str, date: &str, milestone: &str) -> Self {
        Self {
            id,
            image: image.into(),
            caption: caption.into(),
            date: date.into(),
            milestone: milestone.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// `#RRGGBB` card color.
    pub color: String,
}

impl Reason {
    fn new(id: u32, title: &str, description: &str, icon: &str, color: &str) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Card color as RGB bytes; falls back to a soft pink for malformed values.
    pub fn rgb(&self) -> [u8; 3] {
        parse_hex_rgb(&self.color).unwrap_or([0xFB, 0xCF, 0xE8])
    }
}

fn parse_hex_rgb(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

pub fn default_memories() -> Vec<MemoryItem> {
    vec![
        MemoryItem::new(
            1,
            "/images/img1.jpg",
            "Our beautiful moments together",
            "Forever in my heart",
            "Special Memory",
        ),
        MemoryItem::new(
            2,
            "/images/img2.jpg",
            "Every smile you share lights up my world",
            "Always cherished",
            "Precious Moment",
        ),
        MemoryItem::new(
            3,
            "/images/img3.jpg",
            "Adventures we've shared, memories we've made",
            "Unforgettable",
            "Journey Together",
        ),
        MemoryItem::new(
            4,
            "/images/img4.jpg",
            "In your eyes, I found my home",
            "Eternal love",
            "Heart Connection",
        ),
        MemoryItem::new(
            5,
            "/images/img5.jpg",
            "Together we create magic in every moment",
            "Our story continues",
            "Love Story",
        ),
    ]
}

pub fn default_reasons() -> Vec<Reason> {
    vec![
        Reason::new(
            1,
            "Your Smile",
            "The way your smile lights up the room and makes my heart skip a beat every single time.",
            "😊",
            "#FBCFE8",
        ),
        Reason::new(
            2,
            "Your Kindness",
            "How you always put others first and show compassion in everything you do.",
            "💖",
            "#E9D5FF",
        ),
        Reason::new(
            3,
            "Your Strength",
            "The incredible resilience you show when facing challenges, inspiring me every day.",
            "💪",
            "#BFDBFE",
        ),
        Reason::new(
            4,
            "Your Laughter",
            "The sound of your laughter is my favorite melody in the whole world.",
            "😂",
            "#FEF08A",
        ),
        Reason::new(
            5,
            "Your Support",
            "How you always believe in me, even when I don't believe in myself.",
            "🙌",
            "#BBF7D0",
        ),
        Reason::new(
            6,
            "Your Intelligence",
            "Your brilliant mind and the way you see the world in such a unique perspective.",
            "🧠",
            "#C7D2FE",
        ),
    ]
}

/// Header strip above the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "I'm Sorry, My Love".into(),
            subtitle: "From the bottom of my heart".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPack {
    pub hero: Hero,
    pub memories: Vec<MemoryItem>,
    pub reasons: Vec<Reason>,
}

impl Default for ContentPack {
    fn default() -> Self {
        Self {
            hero: Hero::default(),
            memories: default_memories(),
            reasons: default_reasons(),
        }
    }
}

impl ContentPack {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let pack: Self = serde_json::from_str(source)?;
        pack.validated()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let pack: Self = toml::from_str(source)?;
        pack.validated()
    }

    /// Loads a pack, choosing the format by extension (`.json`, else TOML).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    // An explicitly empty memory list is left for `Carousel::new` to refuse.
    fn validated(self) -> Result<Self, ConfigError> {
        check_unique("memory", self.memories.iter().map(|m| m.id))?;
        check_unique("reason", self.reasons.iter().map(|r| r.id))?;
        Ok(self)
    }
}

fn check_unique(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_content() {
        let pack = ContentPack::default();
        assert_eq!(pack.memories.len(), 5);
        assert_eq!(pack.reasons.len(), 6);
        assert_eq!(pack.memories[0].image, "/images/img1.jpg");
        assert_eq!(pack.reasons[3].title, "Your Laughter");
        assert_eq!(pack.hero.title, "I'm Sorry, My Love");
    }

    #[test]
    fn hero_fields_override_independently() {
        let pack = ContentPack::from_toml_str(
            r#"
[hero]
title = "Happy Anniversary"
"#,
        )
        .unwrap();
        assert_eq!(pack.hero.title, "Happy Anniversary");
        assert_eq!(pack.hero.subtitle, Hero::default().subtitle);
        assert_eq!(pack.memories, default_memories());
    }

    #[test]
    fn omitted_lists_fall_back_to_defaults() {
        let pack = ContentPack::from_json_str(
            r#"{"memories":[{"id":7,"image":"a.png","caption":"c","date":"d","milestone":"m"}]}"#,
        )
        .unwrap();
        assert_eq!(pack.memories.len(), 1);
        assert_eq!(pack.memories[0].id, 7);
        assert_eq!(pack.reasons, default_reasons());
    }

    #[test]
    fn toml_pack_parses() {
        let pack = ContentPack::from_toml_str(
            r##"
[[reasons]]
id = 1
title = "Patience"
description = "Always."
icon = "*"
color = "#112233"
"##,
        )
        .unwrap();
        assert_eq!(pack.reasons.len(), 1);
        assert_eq!(pack.reasons[0].rgb(), [0x11, 0x22, 0x33]);
        assert_eq!(pack.memories, default_memories());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ContentPack::from_json_str(
            r##"{"reasons":[
                {"id":1,"title":"a","description":"","icon":"","color":"#000000"},
                {"id":1,"title":"b","description":"","icon":"","color":"#000000"}
            ]}"##,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateId { kind: "reason", id: 1 }));
    }

    #[test]
    fn malformed_color_falls_back() {
        let mut reason = default_reasons().remove(0);
        reason.color = "pink".into();
        assert_eq!(reason.rgb(), [0xFB, 0xCF, 0xE8]);
        reason.color = "#F9A8D4".into();
        assert_eq!(reason.rgb(), [0xF9, 0xA8, 0xD4]);
    }
}
