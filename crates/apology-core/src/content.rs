//! Personalization content of the card.
//!
//! Dates, names, the coupon code and the image paths are the only things
//! that differ between two copies of the card. They default to the values
//! the card ships with and may be overridden from a JSON file;
//! any field missing from the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Paths of the four illustrations, as served by the asset layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardImages {
    pub badger_sad: String,
    pub goose_sad_flowers: String,
    pub badger_soft_sad: String,
    pub us_together: String,
}

impl Default for CardImages {
    fn default() -> Self {
        Self {
            badger_sad: "/badger_sad.png".to_string(),
            goose_sad_flowers: "/goose_sad_flowers.png".to_string(),
            badger_soft_sad: "/badger_soft_sad.png".to_string(),
            us_together: "/us_together.png".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    /// The day that went wrong
    pub important_date: String,
    /// The day proposed to make up for it
    pub repair_date: String,
    pub coupon_code: String,
    pub sender: String,
    pub recipient: String,
    /// Name under the closing line
    pub signature: String,
    pub images: CardImages,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            important_date: "14 Februarie".to_string(),
            repair_date: "24 Februarie".to_string(),
            coupon_code: "TE-IUBESC-DENISA".to_string(),
            sender: "Gus 🦢".to_string(),
            recipient: "Bursucica Mea 🦡".to_string(),
            signature: "Gus".to_string(),
            images: CardImages::default(),
        }
    }
}

impl CardContent {
    /// Parse content from JSON text.
    pub fn from_json(path: &Path, text: &str) -> CardResult<Self> {
        serde_json::from_str(text).map_err(|source| CardError::ContentParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load content from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CardError::ContentRead {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json(path, &text)?;
        tracing::info!(path = %path.display(), "loaded card content");
        Ok(content)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> CardResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_card() {
        let content = CardContent::default();
        assert_eq!(content.important_date, "14 Februarie");
        assert_eq!(content.repair_date, "24 Februarie");
        assert_eq!(content.coupon_code, "TE-IUBESC-DENISA");
        assert_eq!(content.images.us_together, "/us_together.png");
    }

    #[test]
    fn signature_is_separate_from_sender() {
        let content = CardContent::default();
        assert_eq!(content.sender, "Gus 🦢");
        assert_eq!(content.signature, "Gus");

        let custom = CardContent::from_json(Path::new("inline"), r#"{ "sender": "Ion 🐻" }"#)
            .unwrap();
        assert_eq!(custom.sender, "Ion 🐻");
        assert_eq!(custom.signature, "Gus");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let content = CardContent::from_json(
            Path::new("inline"),
            r#"{ "coupon_code": "SORRY-2026", "images": { "us_together": "/us.jpg" } }"#,
        )
        .unwrap();
        assert_eq!(content.coupon_code, "SORRY-2026");
        assert_eq!(content.important_date, "14 Februarie");
        assert_eq!(content.images.us_together, "/us.jpg");
        assert_eq!(content.images.badger_sad, "/badger_sad.png");
    }

    #[test]
    fn empty_object_is_default() {
        let content = CardContent::from_json(Path::new("inline"), "{}").unwrap();
        assert_eq!(content, CardContent::default());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = CardContent::from_json(Path::new("inline"), "{ nope").unwrap_err();
        assert!(matches!(err, CardError::ContentParse { .. }));
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(
            CardContent::load_or_default(None).unwrap(),
            CardContent::default()
        );
    }
}
