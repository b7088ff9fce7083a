use serifu_rust::models::{BlockPolicy, Conf, Item, SideNote, SoundEffect, TextLine};
use serifu_rust::parser::serifu_parser::SerifuParser;
use serifu_rust::parser::ParseError;
use std::fs;
use std::path::Path;

fn load_fixture() -> String {
    let script_path = Path::new("tests/test_data/moriking.serifu");
    fs::read_to_string(script_path).expect("无法读取测试文件")
}

#[test]
fn test_fixture_structure() {
    let parser = SerifuParser::new();
    let script = parser.parse(&load_fixture()).expect("解析测试文件失败");

    let titles: Vec<&str> = script.pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["PAGE 1", "PAGE 2", "PAGES 3-4"]);
    assert_eq!(
        script.pages.iter().map(|p| p.is_spread).collect::<Vec<_>>(),
        vec![false, false, true],
        "只有第三页是跨页"
    );

    let panel_ids: Vec<&str> = script.pages[0].panels.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(panel_ids, vec!["1.1", "1.2", "1.3", "1.4", "1.5", "1.6"]);
    assert_eq!(script.panel_count(), 6 + 3 + 7);
}

#[test]
fn test_fixture_pre_formatted_blocks() {
    let script = SerifuParser::new().parse(&load_fixture()).unwrap();
    let items = script.pages[0].panels[0].items();

    assert_eq!(items.len(), 2, "1.1 分格中应有两个预格式化块");
    assert_eq!(
        items[0],
        Item::TextLine(TextLine::pre_formatted(
            "Contract Text",
            "",
            " The undersigned* agrees to sell his soul** for a thousand berries.***"
        ))
    );
    assert_eq!(
        items[1],
        Item::TextLine(TextLine::pre_formatted(
            "Sign",
            "",
            "Menu:\n- Pizza: 50 Yen\n- Okonomiyaki: 100 Yen\n- Beer: 200 Yen\n"
        ))
    );
}

#[test]
fn test_fixture_items() {
    let script = SerifuParser::new().parse(&load_fixture()).unwrap();
    let page1 = &script.pages[0];

    assert!(page1.panels[2].items.is_none(), "空分格的内容应为 None");
    assert!(page1.panels[2].is_empty());
    assert!(!page1.panels[3].is_empty());

    let panel_1_4 = page1.panels[3].items();
    assert_eq!(panel_1_4[0], Item::TextLine(TextLine::new("Menelaus", "Announcing", "")));
    assert_eq!(
        panel_1_4[3],
        Item::TextLine(TextLine::new(
            "Chapter Title",
            "",
            "Chapter 31: Giant Asian Hornet vs. Palawan Stag Beetle"
        ))
    );

    assert_eq!(page1.panels[4].items()[0], Item::SoundEffect(SoundEffect::new("gasp", "haa")));
    assert_eq!(
        script.pages[1].panels[0].items()[2],
        Item::SoundEffect(SoundEffect::new("ha ha ha", ""))
    );
    assert_eq!(
        script.pages[2].panels[0].items()[1],
        Item::SideNote(SideNote::new("Palawan towers over the crowd."))
    );
    assert_eq!(
        script.pages[2].panels[3].items()[1],
        Item::SoundEffect(SoundEffect::new("glare", "jiii"))
    );
}

#[test]
fn test_errors_report_line_numbers() {
    let parser = SerifuParser::new();

    let err = parser.parse("\n\n- 1.1").unwrap_err();
    assert!(matches!(err, ParseError::Structural { line: 3, .. }), "{:?}", err);

    let err = parser.parse("# PAGE 1\n- 1.1\nHello: there\njust words").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 4, .. }), "{:?}", err);
    assert!(err.is_syntax() && !err.is_structural());
    assert!(err.to_string().contains("just words"));
}

#[test]
fn test_strict_block_policy() {
    let parser = SerifuParser::with_config(Conf::strict());
    assert_eq!(parser.config().unterminated_block, BlockPolicy::Strict);
    let text = "# PAGE 1\n- 1.1\nSign:/=\nMenu:\n- Pizza: 50 Yen";
    let err = parser.parse(text).unwrap_err();
    assert_eq!(err.line(), Some(3));

    let lenient = SerifuParser::new().parse(text).unwrap();
    assert_eq!(
        lenient.pages[0].panels[0].items()[0],
        Item::TextLine(TextLine::pre_formatted("Sign", "", "Menu:\n- Pizza: 50 Yen\n"))
    );
}
