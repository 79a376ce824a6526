use serde::{Deserialize, Serialize};

/// Display orientation of a portfolio piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Landscape
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    /// Portrait (reels, shorts)
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Parse a raw cell value; anything unrecognized is treated as landscape
    pub fn from_cell(raw: &str) -> Self {
        match raw.trim() {
            "9:16" => Self::Portrait,
            _ => Self::Landscape,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool credited on a portfolio piece
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    pub name: String,
    /// Logo URL, empty when the tool is not in the logo table
    #[serde(default)]
    pub logo: String,
}

/// Canonical video record consumed by the rest of the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Preview image URL; empty means the consumer renders a placeholder
    #[serde(default)]
    pub thumbnail: String,
    pub video_url: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// `None` means the record carries no software data at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<Vec<Software>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_from_client(&self, client: &str) -> bool {
        self.client.as_deref() == Some(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_from_cell() {
        assert_eq!(AspectRatio::from_cell("9:16"), AspectRatio::Portrait);
        assert_eq!(AspectRatio::from_cell(" 9:16 "), AspectRatio::Portrait);
        assert_eq!(AspectRatio::from_cell("16:9"), AspectRatio::Landscape);
        assert_eq!(AspectRatio::from_cell(""), AspectRatio::Landscape);
        assert_eq!(AspectRatio::from_cell("4:3"), AspectRatio::Landscape);
    }

    #[test]
    fn test_video_wire_format() {
        let video = Video {
            id: "1".to_string(),
            title: "Launch".to_string(),
            description: String::new(),
            thumbnail: String::new(),
            video_url: "https://vimeo.com/1".to_string(),
            aspect_ratio: AspectRatio::Portrait,
            client: None,
            software: None,
            timeline_image: None,
            tags: vec!["Commercial".to_string()],
        };

        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["videoUrl"], "https://vimeo.com/1");
        assert_eq!(json["aspectRatio"], "9:16");
        assert!(json.get("client").is_none());
        assert!(json.get("software").is_none());

        let back: Video = serde_json::from_value(json).unwrap();
        assert_eq!(back, video);
    }
}
