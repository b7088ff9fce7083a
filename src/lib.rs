pub mod models;
pub mod utils;
pub mod parser;
pub mod writer;
pub mod api;

pub use models::{
    Script,
    Page,
    Panel,
    Item,
    TextLine,
    SoundEffect,
    SideNote,
    Conf,
    BlockPolicy
};

pub use parser::{
    SerifuParser,
    ParseError,
    ParseResult
};

pub use writer::{
    write_script,
    format_item
};

pub use api::{
    ErrorReport,
    script_to_json,
    script_from_json,
    parse_serifu_text,
    format_serifu_text,
    json_to_serifu_text
};

/// 解析 Serifu 格式文本
///
/// # Arguments
///
/// * `script` - Serifu 格式的漫画脚本
/// * `config` - 配置对象
///
/// # Returns
///
/// 脚本树，或带行号的解析错误
pub fn parse(script: &str, config: &Conf) -> ParseResult<Script> {
    SerifuParser::with_config(config.clone()).parse(script)
}

/// 将脚本树输出为规范格式的 Serifu 文本
pub fn serialize(script: &Script, config: &Conf) -> String {
    write_script(script, config)
}
