use std::fmt;
use crate::models::{Conf, Item, Page, Panel, Script};
use crate::utils::SerifuConstants;

/// 将脚本树写回 Serifu 文本
///
/// 输出会规范化空白与缩进，不保证与手写输入逐字节一致，
/// 但重新解析后得到的树与原树相同。
pub fn write_script(script: &Script, conf: &Conf) -> String {
    let mut buffer = String::new();
    for page in &script.pages {
        write_page(&mut buffer, page, conf);
    }
    buffer
}

fn write_page(buffer: &mut String, page: &Page, conf: &Conf) {
    let marker = if page.is_spread {
        SerifuConstants::PAGE_SPREAD_PREFIX
    } else {
        SerifuConstants::PAGE_PREFIX
    };
    buffer.push_str(&format!("{} {}\n", marker, page.title));
    for panel in &page.panels {
        write_panel(buffer, panel, conf);
    }
    buffer.push('\n');
}

fn write_panel(buffer: &mut String, panel: &Panel, conf: &Conf) {
    buffer.push_str(&format!("{}{} {}\n", conf.indent, SerifuConstants::PANEL_PREFIX, panel.id));
    for item in panel.items() {
        buffer.push_str(&conf.indent);
        buffer.push_str(&format_item(item));
        buffer.push('\n');
    }
    if conf.blank_line_between_panels {
        buffer.push('\n');
    }
}

/// 单个内容项的文本形式（不含缩进与换行）
pub fn format_item(item: &Item) -> String {
    match item {
        Item::TextLine(line) => {
            let mut heading = line.source.clone();
            if !line.style.is_empty() {
                heading.push(SerifuConstants::STYLE_SEPARATOR);
                heading.push_str(&line.style);
            }
            heading.push(SerifuConstants::TEXT_LINE_SEPARATOR);
            if line.is_pre_formatted && line.content.contains('\n') {
                // 跨行块：开始标记独占一行，内容逐行原样写出，结束标记另起一行
                let mut body = line.content.clone();
                if !body.ends_with('\n') {
                    body.push('\n');
                }
                format!(
                    "{} {}\n{}{}",
                    heading,
                    SerifuConstants::PRE_FORMATTED_BLOCK_START,
                    body,
                    SerifuConstants::PRE_FORMATTED_BLOCK_END
                )
            } else if line.is_pre_formatted {
                format!(
                    "{} {}{}{}",
                    heading,
                    SerifuConstants::PRE_FORMATTED_BLOCK_START,
                    line.content,
                    SerifuConstants::PRE_FORMATTED_BLOCK_END
                )
            } else if line.content.is_empty() {
                heading
            } else {
                format!("{} {}", heading, line.content)
            }
        }
        Item::SoundEffect(sound) => {
            if sound.transliteration.is_empty() {
                format!("{} {}", SerifuConstants::SOUND_PREFIX, sound.name)
            } else {
                format!("{} {} ({})", SerifuConstants::SOUND_PREFIX, sound.name, sound.transliteration)
            }
        }
        Item::SideNote(note) => format!("{} {}", SerifuConstants::SIDE_NOTE_PREFIX, note.content),
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_script(self, &Conf::default()))
    }
}
