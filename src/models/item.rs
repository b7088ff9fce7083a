use serde::{Deserialize, Serialize};

/// 台词或具名文本块（旁白、招牌、标题等）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextLine {
    /// 说话人或文本来源
    pub source: String,
    /// 样式标签，可为空
    pub style: String,
    /// 是否为预格式化块（内容原样保留）
    pub is_pre_formatted: bool,
    pub content: String,
}

impl TextLine {
    pub fn new(source: impl Into<String>, style: impl Into<String>, content: impl Into<String>) -> Self {
        TextLine {
            source: source.into(),
            style: style.into(),
            is_pre_formatted: false,
            content: content.into(),
        }
    }

    pub fn pre_formatted(source: impl Into<String>, style: impl Into<String>, content: impl Into<String>) -> Self {
        TextLine {
            is_pre_formatted: true,
            ..TextLine::new(source, style, content)
        }
    }
}

/// 拟声词
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SoundEffect {
    pub name: String,
    /// 音译（读音），可为空
    pub transliteration: String,
}

impl SoundEffect {
    pub fn new(name: impl Into<String>, transliteration: impl Into<String>) -> Self {
        SoundEffect {
            name: name.into(),
            transliteration: transliteration.into(),
        }
    }
}

/// 作者批注，不属于对白
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SideNote {
    pub content: String,
}

impl SideNote {
    pub fn new(content: impl Into<String>) -> Self {
        SideNote { content: content.into() }
    }
}

/// 分格中的一个内容单元
///
/// JSON 中以 `type` 字段区分三种类型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    #[serde(rename = "text")]
    TextLine(TextLine),
    #[serde(rename = "soundEffect")]
    SoundEffect(SoundEffect),
    #[serde(rename = "sideNote")]
    SideNote(SideNote),
}

impl Item {
    /// 类型标识，与 JSON 中的 `type` 字段一致
    pub fn type_name(&self) -> &'static str {
        match self {
            Item::TextLine(_) => "text",
            Item::SoundEffect(_) => "soundEffect",
            Item::SideNote(_) => "sideNote",
        }
    }
}

impl From<TextLine> for Item {
    fn from(line: TextLine) -> Self {
        Item::TextLine(line)
    }
}

impl From<SoundEffect> for Item {
    fn from(sound: SoundEffect) -> Self {
        Item::SoundEffect(sound)
    }
}

impl From<SideNote> for Item {
    fn from(note: SideNote) -> Self {
        Item::SideNote(note)
    }
}
