//! Static software name → logo URL table

use std::collections::HashMap;
use std::sync::LazyLock;

const TWEMOJI_BASE: &str = "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg";

static SOFTWARE_LOGOS: LazyLock<HashMap<&'static str, String>> = LazyLock::new(|| {
    let wikimedia = [
        ("Premiere Pro", "https://upload.wikimedia.org/wikipedia/commons/4/40/Adobe_Premiere_Pro_CC_icon.svg"),
        ("After Effects", "https://upload.wikimedia.org/wikipedia/commons/c/cb/Adobe_After_Effects_CC_icon.svg"),
        ("Photoshop", "https://upload.wikimedia.org/wikipedia/commons/a/af/Adobe_Photoshop_CC_icon.svg"),
        ("Illustrator", "https://upload.wikimedia.org/wikipedia/commons/f/fb/Adobe_Illustrator_CC_icon.svg"),
        ("DaVinci Resolve", "https://upload.wikimedia.org/wikipedia/commons/4/4d/DaVinci_Resolve_Studio.png"),
        ("Gemini", "https://upload.wikimedia.org/wikipedia/commons/8/8a/Google_Gemini_logo.svg"),
        ("ChatGPT", "https://upload.wikimedia.org/wikipedia/commons/0/04/ChatGPT_logo.svg"),
    ];

    // Tools without an official icon use an emoji stand-in
    let emoji = [
        ("Nano Banana", "1f34c"),
        ("Claude", "1f916"),
        ("Flow", "1f300"),
        ("Kling", "2728"),
        ("Sora", "1f320"),
        ("Veo", "1f3ac"),
    ];

    wikimedia
        .into_iter()
        .map(|(name, url)| (name, url.to_string()))
        .chain(
            emoji
                .into_iter()
                .map(|(name, code)| (name, format!("{TWEMOJI_BASE}/{code}.svg"))),
        )
        .collect()
});

/// Logo URL for an exact software name, empty when unknown
pub fn logo_for(name: &str) -> String {
    SOFTWARE_LOGOS.get(name).cloned().unwrap_or_default()
}
