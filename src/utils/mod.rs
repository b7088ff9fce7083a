pub mod serifu_constants;

pub use serifu_constants::{SerifuConstants, SOUND_EFFECT_REGEX};

/// 将音效描述拆分为名称与音译
///
/// `gasp (haa)` 得到 `("gasp", "haa")`；没有括号后缀时音译为空。
pub fn split_sound_spec(spec: &str) -> (&str, &str) {
    match SOUND_EFFECT_REGEX.captures(spec) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str()).trim();
            let transliteration = caps.get(2).map_or("", |m| m.as_str());
            (name, transliteration)
        }
        None => (spec, ""),
    }
}
