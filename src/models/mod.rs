pub mod item;
pub mod script;
pub mod conf;

pub use item::{Item, TextLine, SoundEffect, SideNote};
pub use script::{Script, Page, Panel};
pub use conf::{Conf, BlockPolicy};
