use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;
use std::time::Duration;

use puer_cafe::{
    Config,
    catalog::Catalog,
    services::{FortuneService, HistoryService, RevealService, stats},
    storage::FileStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    if config.gemini.has_key() {
        log::info!("Gemini API key configured, fortunes will be generated online");
    } else {
        log::info!("No Gemini API key, running in offline fallback mode");
    }

    // 组装服务
    let catalog = Catalog::builtin();
    let history_service = HistoryService::new(Arc::new(FileStorage::new(&config.storage.path)));
    let fortune_service = FortuneService::new(
        config.gemini.clone(),
        Duration::from_millis(config.reveal.fallback_delay_ms),
    );
    let reveal_service = RevealService::new(
        catalog.clone(),
        fortune_service,
        history_service.clone(),
        Duration::from_millis(config.reveal.min_delay_ms),
    );

    log::info!("Opening a blind box...");
    let reveal = reveal_service
        .open_box()
        .await
        .ok_or_else(|| anyhow::anyhow!("another reveal is already in flight"))?;

    println!();
    println!("你获得了: {} [{}]", reveal.prize.name, reveal.prize.rarity.label());
    println!("{}", reveal.prize.description);
    println!();
    println!("茶语签文: {}", reveal.fortune.fortune);
    println!("幸运元素: {}", reveal.fortune.lucky_element);

    let log = history_service.snapshot();
    let collection = stats(&log, catalog.len());
    println!();
    println!(
        "已收集 {}/{} 款茶品, 称号: {}",
        collection.unique_count,
        catalog.len(),
        collection.title.label()
    );

    Ok(())
}
