use std::io::{self, BufRead};
use log::{debug, trace, warn};
use crate::models::{BlockPolicy, Conf, Item, Page, Panel, Script, SideNote, SoundEffect, TextLine};
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::line_classifier::{block_opening, classify_line, closes_block, BlockOpening, LineKind};

/// 解析过程中当前所处的上下文
///
/// 索引指向正在构建的 `Script` 中的页与分格。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// 尚未打开任何页
    InScript,
    InPage { page: usize },
    InPanel { page: usize, panel: usize },
}

/// 一次解析的全部可变状态
struct ParseContext {
    script: Script,
    state: ParseState,
    line_number: usize,
}

impl ParseContext {
    fn new() -> Self {
        ParseContext {
            script: Script::new(),
            state: ParseState::InScript,
            line_number: 0,
        }
    }

    fn open_page(&mut self, title: &str, is_spread: bool) {
        debug!("第 {} 行：新页 `{}`（跨页: {}）", self.line_number, title, is_spread);
        self.script.pages.push(Page::new(title, is_spread));
        self.state = ParseState::InPage { page: self.script.pages.len() - 1 };
    }

    fn open_panel(&mut self, id: &str) -> ParseResult<()> {
        let page = match self.state {
            ParseState::InScript => {
                return Err(ParseError::Structural {
                    line: self.line_number,
                    element: "分格",
                    context: "页",
                });
            }
            ParseState::InPage { page } | ParseState::InPanel { page, .. } => page,
        };
        debug!("第 {} 行：新分格 `{}`", self.line_number, id);
        let panels = &mut self.script.pages[page].panels;
        panels.push(Panel::new(id));
        self.state = ParseState::InPanel { page, panel: panels.len() - 1 };
        Ok(())
    }

    /// 当前分格的位置，没有打开的分格时返回结构错误
    fn panel_slot(&self, element: &'static str) -> ParseResult<(usize, usize)> {
        match self.state {
            ParseState::InPanel { page, panel } => Ok((page, panel)),
            ParseState::InScript | ParseState::InPage { .. } => Err(ParseError::Structural {
                line: self.line_number,
                element,
                context: "分格",
            }),
        }
    }

    fn push_item(&mut self, (page, panel): (usize, usize), item: impl Into<Item>) {
        self.script.pages[page].panels[panel].push_item(item);
    }
}

/// Serifu 脚本解析器
///
/// 单次遍历输入行，逐步构建 Script → Page → Panel → Item 树。
#[derive(Debug, Clone, Default)]
pub struct SerifuParser {
    conf: Conf,
}

impl SerifuParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(conf: Conf) -> Self {
        SerifuParser { conf }
    }

    pub fn config(&self) -> &Conf {
        &self.conf
    }

    /// 解析整段文本
    pub fn parse(&self, script: &str) -> ParseResult<Script> {
        self.parse_lines(script.lines().map(Ok::<_, io::Error>))
    }

    /// 从按行读取的输入源解析
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> ParseResult<Script> {
        self.parse_lines(reader.lines())
    }

    /// 解析核心：消费一个行序列
    ///
    /// 任何错误都会立即中止解析，不返回部分结果。
    pub fn parse_lines<I, L>(&self, lines: I) -> ParseResult<Script>
    where
        I: IntoIterator<Item = io::Result<L>>,
        L: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let mut ctx = ParseContext::new();

        while let Some(raw) = lines.next() {
            let raw = raw?;
            let mut line: &str = raw.as_ref();
            ctx.line_number += 1;
            if ctx.line_number == 1 {
                line = line.trim_start_matches('\u{feff}');
            }

            let kind = classify_line(line);
            trace!("第 {} 行：{:?}", ctx.line_number, kind);

            match kind {
                LineKind::Page { title, is_spread } => ctx.open_page(title, is_spread),
                LineKind::Panel { id } => ctx.open_panel(id)?,
                LineKind::SoundEffect { name, transliteration } => {
                    let slot = ctx.panel_slot(kind.element_name())?;
                    ctx.push_item(slot, SoundEffect::new(name, transliteration));
                }
                LineKind::SideNote { content } => {
                    let slot = ctx.panel_slot(kind.element_name())?;
                    ctx.push_item(slot, SideNote::new(content));
                }
                LineKind::TextLine { source, style, content } => {
                    let slot = ctx.panel_slot(kind.element_name())?;
                    let text_line = match block_opening(content) {
                        None => TextLine::new(source, style, content),
                        Some(BlockOpening::SingleLine(body)) => TextLine::pre_formatted(source, style, body),
                        Some(BlockOpening::MultiLine(rest)) => {
                            let body = self.read_block(rest, &mut lines, &mut ctx)?;
                            TextLine::pre_formatted(source, style, body)
                        }
                    };
                    ctx.push_item(slot, text_line);
                }
                LineKind::Blank => {}
                LineKind::Unknown => {
                    return Err(ParseError::Syntax {
                        line: ctx.line_number,
                        text: line.to_string(),
                    });
                }
            }
        }

        debug!(
            "解析完成：{} 页，{} 个分格，{} 项内容",
            ctx.script.pages.len(),
            ctx.script.panel_count(),
            ctx.script.item_count()
        );
        Ok(ctx.script)
    }

    /// 收集跨行预格式化块，直到某行去空白后以结束标记结尾
    ///
    /// 块内的行原样保留，每行后接换行符；结束行本身不计入内容。
    fn read_block<I, L>(&self, rest: &str, lines: &mut I, ctx: &mut ParseContext) -> ParseResult<String>
    where
        I: Iterator<Item = io::Result<L>>,
        L: AsRef<str>,
    {
        let start_line = ctx.line_number;
        let mut block = String::new();
        if !rest.is_empty() {
            block.push_str(rest);
            block.push('\n');
        }

        for raw in lines {
            let raw = raw?;
            let line: &str = raw.as_ref();
            ctx.line_number += 1;
            if closes_block(line) {
                return Ok(block);
            }
            block.push_str(line);
            block.push('\n');
        }

        match self.conf.unterminated_block {
            BlockPolicy::Strict => Err(ParseError::UnterminatedBlock { line: start_line }),
            BlockPolicy::Lenient => {
                warn!("第 {} 行开始的预格式化块直到输入结束仍未闭合，按已读取内容处理", start_line);
                Ok(block)
            }
        }
    }
}
