use std::io;
use thiserror::Error;

/// 解析错误，全部为致命错误：出现即中止解析
#[derive(Error, Debug)]
pub enum ParseError {
    /// 元素出现在所需的上下文之前（页之前的分格、分格之前的内容）
    #[error("第 {line} 行：{element}出现在{context}之外")]
    Structural {
        line: usize,
        element: &'static str,
        context: &'static str,
    },

    /// 非空行不符合任何已知格式
    #[error("第 {line} 行：无法识别的标记 `{text}`")]
    Syntax { line: usize, text: String },

    /// 严格模式下预格式化块直到输入结束仍未闭合
    #[error("第 {line} 行：预格式化块未闭合")]
    UnterminatedBlock { line: usize },

    #[error("IO错误: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// 出错行号（从 1 开始），IO 错误没有行号
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Structural { line, .. }
            | ParseError::Syntax { line, .. }
            | ParseError::UnterminatedBlock { line } => Some(*line),
            ParseError::Io(_) => None,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, ParseError::Structural { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
