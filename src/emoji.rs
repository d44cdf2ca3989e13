use std::sync::LazyLock;

use regex::{Captures, Regex};

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-zA-Z0-9_+\-]+):").expect("shortcode pattern is valid"));

/// Rewrites message text before it goes on the wire.
pub trait EmojiExpander: Send + Sync {
    fn expand(&self, text: &str) -> String;
}

/// Replaces known `:shortcode:` tokens with the glyph plus one trailing space.
/// Unknown shortcodes are kept as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcodeExpander;

impl EmojiExpander for ShortcodeExpander {
    fn expand(&self, text: &str) -> String {
        if !text.contains(':') {
            return text.to_string();
        }

        SHORTCODE
            .replace_all(text, |caps: &Captures| match emojis::get_by_shortcode(&caps[1]) {
                Some(emoji) => format!("{} ", emoji.as_str()),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExpander;

impl EmojiExpander for NoopExpander {
    fn expand(&self, text: &str) -> String {
        text.to_string()
    }
}
