use crate::utils::{split_sound_spec, SerifuConstants};

/// 单行的分类结果，字段借用自输入行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Page { title: &'a str, is_spread: bool },
    Panel { id: &'a str },
    SoundEffect { name: &'a str, transliteration: &'a str },
    SideNote { content: &'a str },
    /// `content` 已去除首尾空白，预格式化块由解析器继续处理
    TextLine { source: &'a str, style: &'a str, content: &'a str },
    Blank,
    Unknown,
}

impl<'a> LineKind<'a> {
    /// 该类型在错误信息中的名称
    pub fn element_name(&self) -> &'static str {
        match self {
            LineKind::Page { .. } => "页",
            LineKind::Panel { .. } => "分格",
            LineKind::SoundEffect { .. } => "音效",
            LineKind::SideNote { .. } => "批注",
            LineKind::TextLine { .. } => "台词",
            LineKind::Blank | LineKind::Unknown => "未知标记",
        }
    }
}

/// 按固定优先级对一行分类
///
/// 前缀规则（页、分格、音效、批注）优先于分隔符规则（台词），
/// 否则前缀字符可能被当作来源名的一部分。
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(SerifuConstants::PAGE_SPREAD_PREFIX) {
        return LineKind::Page { title: rest.trim(), is_spread: true };
    }
    if let Some(rest) = trimmed.strip_prefix(SerifuConstants::PAGE_PREFIX) {
        return LineKind::Page { title: rest.trim(), is_spread: false };
    }
    if let Some(rest) = trimmed.strip_prefix(SerifuConstants::PANEL_PREFIX) {
        return LineKind::Panel { id: rest.trim() };
    }
    if let Some(rest) = trimmed.strip_prefix(SerifuConstants::SOUND_PREFIX) {
        let (name, transliteration) = split_sound_spec(rest.trim());
        return LineKind::SoundEffect { name, transliteration };
    }
    if let Some(rest) = trimmed.strip_prefix(SerifuConstants::SIDE_NOTE_PREFIX) {
        return LineKind::SideNote { content: rest.trim() };
    }
    if let Some((label, content)) = trimmed.split_once(SerifuConstants::TEXT_LINE_SEPARATOR) {
        let (source, style) = match label.split_once(SerifuConstants::STYLE_SEPARATOR) {
            Some((source, style)) => (source.trim(), style.trim()),
            None => (label.trim(), ""),
        };
        return LineKind::TextLine { source, style, content: content.trim() };
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Unknown
}

/// 预格式化块的起始形态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpening<'a> {
    /// 同一行内闭合，内容为两个标记之间的原文
    SingleLine(&'a str),
    /// 跨行块，携带开始标记之后的剩余文本
    MultiLine(&'a str),
}

/// 判断台词内容是否以预格式化块开始
pub fn block_opening(content: &str) -> Option<BlockOpening<'_>> {
    let rest = content.strip_prefix(SerifuConstants::PRE_FORMATTED_BLOCK_START)?;
    match rest.strip_suffix(SerifuConstants::PRE_FORMATTED_BLOCK_END) {
        Some(body) => Some(BlockOpening::SingleLine(body)),
        None => Some(BlockOpening::MultiLine(rest)),
    }
}

/// 判断一行是否为预格式化块的结束行
pub fn closes_block(line: &str) -> bool {
    line.trim().ends_with(SerifuConstants::PRE_FORMATTED_BLOCK_END)
}
