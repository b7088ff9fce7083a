use lazy_static::lazy_static;
use regex::Regex;

/// Serifu 标记语言的词法常量
///
/// 解析器与序列化器共用这一份定义。
pub struct SerifuConstants;

impl SerifuConstants {
    /// 跨页（两页展开）标记
    pub const PAGE_SPREAD_PREFIX: &'static str = "##";
    pub const PAGE_PREFIX: &'static str = "#";
    pub const PANEL_PREFIX: &'static str = "-";
    pub const SOUND_PREFIX: &'static str = "*";
    pub const SIDE_NOTE_PREFIX: &'static str = "!";
    /// 台词行中来源与内容的分隔符
    pub const TEXT_LINE_SEPARATOR: char = ':';
    /// 来源与样式的分隔符
    pub const STYLE_SEPARATOR: char = '/';
    pub const PRE_FORMATTED_BLOCK_START: &'static str = "/=";
    pub const PRE_FORMATTED_BLOCK_END: &'static str = "=/";
}

lazy_static! {
    // 音效：`名称 (音译)`，名称中不含左括号
    pub static ref SOUND_EFFECT_REGEX: Regex = Regex::new(r"(?s)^([^(]*)\((.*)\)$").unwrap();
}
