//! 字符串进、字符串出的便捷接口
//!
//! 供需要 JSON 结果的调用方（脚本工具、前端桥接）使用。

use serde::Serialize;
use crate::models::{Conf, Script};
use crate::parser::{ParseError, SerifuParser};
use crate::writer::write_script;

/// 解析失败时返回的 JSON 结构
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub line: Option<usize>,
}

impl From<&ParseError> for ErrorReport {
    fn from(err: &ParseError) -> Self {
        ErrorReport {
            error: err.to_string(),
            line: err.line(),
        }
    }
}

/// 将脚本树编码为 JSON
pub fn script_to_json(script: &Script, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(script)
    } else {
        serde_json::to_string(script)
    }
}

/// 从 JSON 还原脚本树
pub fn script_from_json(json: &str) -> Result<Script, serde_json::Error> {
    serde_json::from_str(json)
}

/// 解析 Serifu 文本并返回 JSON
///
/// 成功时为脚本树，失败时为 `{"error": ..., "line": ...}`。
pub fn parse_serifu_text(text: &str, config: Option<Conf>) -> String {
    let parser = SerifuParser::with_config(config.unwrap_or_default());
    let encoded = match parser.parse(text) {
        Ok(script) => serde_json::to_string(&script),
        Err(e) => serde_json::to_string(&ErrorReport::from(&e)),
    };
    encoded.unwrap_or_else(|_| "{}".to_string())
}

/// 解析后按规范格式重新输出
pub fn format_serifu_text(text: &str, config: Option<Conf>) -> Result<String, ParseError> {
    let conf = config.unwrap_or_default();
    let script = SerifuParser::with_config(conf.clone()).parse(text)?;
    Ok(write_script(&script, &conf))
}

/// 将 JSON 形式的脚本树输出为 Serifu 文本
pub fn json_to_serifu_text(json: &str, config: Option<Conf>) -> Result<String, serde_json::Error> {
    let script = script_from_json(json)?;
    Ok(write_script(&script, &config.unwrap_or_default()))
}
