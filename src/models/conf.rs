use serde::{Deserialize, Serialize};

/// 预格式化块在输入结束前仍未闭合时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockPolicy {
    /// 以已收集的内容隐式闭合
    #[default]
    Lenient,
    /// 视为解析错误
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 未闭合预格式化块的处理方式
    pub unterminated_block: BlockPolicy,
    /// 序列化时分格与内容行的缩进
    pub indent: String,
    /// 序列化时每个分格后是否输出空行
    pub blank_line_between_panels: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            unterminated_block: BlockPolicy::Lenient,
            indent: "    ".to_string(),
            blank_line_between_panels: true,
        }
    }
}

impl Conf {
    /// 从 JSON 读取配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn strict() -> Self {
        Conf {
            unterminated_block: BlockPolicy::Strict,
            ..Conf::default()
        }
    }
}
