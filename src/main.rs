use serifu_rust::{parse, script_to_json, serialize, Conf};
use std::env;
use std::fs;
use std::process;

fn load_config(path: &str) -> Result<Conf, String> {
    let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
    Conf::from_json(&json).map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <serifu_file> [--text] [--config <conf.json>]", args[0]);
        return;
    }

    let file_path = &args[1];
    let as_text = args.iter().any(|a| a == "--text");
    let config = match args.iter().position(|a| a == "--config").and_then(|i| args.get(i + 1)) {
        Some(path) => match load_config(path) {
            Ok(conf) => conf,
            Err(e) => {
                eprintln!("读取配置失败: {}", e);
                process::exit(2);
            }
        },
        None => Conf::default(),
    };

    let content = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("读取文件失败: {}", e);
            process::exit(2);
        }
    };

    let script = match parse(&content, &config) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("解析失败: {}", e);
            process::exit(1);
        }
    };
    log::info!(
        "解析完成：{} 页，{} 个分格，{} 项内容",
        script.pages.len(),
        script.panel_count(),
        script.item_count()
    );

    if as_text {
        print!("{}", serialize(&script, &config));
    } else {
        match script_to_json(&script, true) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON 编码失败: {}", e);
                process::exit(1);
            }
        }
    }
}
