use serde::{Deserialize, Serialize};
use crate::models::item::Item;

/// 分格
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Panel {
    /// 分格标识，惯例为 `页.格`，不做校验
    pub id: String,
    /// 尚未收集到任何内容时为 `None`（JSON 中为 `null`）
    pub items: Option<Vec<Item>>,
}

impl Panel {
    pub fn new(id: impl Into<String>) -> Self {
        Panel {
            id: id.into(),
            items: None,
        }
    }

    pub fn push_item(&mut self, item: impl Into<Item>) {
        self.items.get_or_insert_with(Vec::new).push(item.into());
    }

    /// 按阅读顺序返回内容，空分格返回空切片
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// 漫画页
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    /// 是否为跨页
    pub is_spread: bool,
    pub panels: Vec<Panel>,
}

impl Page {
    pub fn new(title: impl Into<String>, is_spread: bool) -> Self {
        Page {
            title: title.into(),
            is_spread,
            panels: Vec::new(),
        }
    }
}

/// 整个脚本，树的根节点
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Script {
    pub pages: Vec<Page>,
}

impl Script {
    pub fn new() -> Self {
        Script { pages: Vec::new() }
    }

    pub fn panel_count(&self) -> usize {
        self.pages.iter().map(|p| p.panels.len()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| p.panels.iter())
            .map(|pn| pn.items().len())
            .sum()
    }
}
