use egostrategy_signalboard::config::Config;
use egostrategy_signalboard::loader::RecordSet;
use egostrategy_signalboard::models::indicator::SignalLabel;
use egostrategy_signalboard::services::classifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new();

    // 加载数据，读取失败时得到内置示例
    let records = RecordSet::load_from_file(config.data_path());
    if let Some(snapshot) = records.snapshot() {
        println!("数据快照: {}", snapshot);
    }
    println!("股票数量: {}", records.len());

    let symbol = "600519.SH"; // 贵州茅台
    if let Some(stock) = records.get_by_symbol(symbol) {
        let indicators = classifier::classify(stock);
        println!("\n股票: {} ({})", stock.name, stock.symbol);
        println!("RSI:  {} {}", indicators.rsi.value, indicators.rsi.signal.label_zh());
        println!("PE:   {} {}", indicators.pe.value, indicators.pe.signal.label_zh());
        println!("PB:   {} {}", indicators.pb.value, indicators.pb.signal.label_zh());
        println!("ROE:  {} {}", indicators.roe.value, indicators.roe.signal.label_zh());
        println!("回撤: {} {}", indicators.drawdown.value, indicators.drawdown.signal.label_zh());
    } else {
        println!("未找到股票: {}", symbol);
    }

    // 按RSI列出超卖股票
    println!("\nRSI超卖:");
    for stock in records.all() {
        if classifier::rsi_signal(stock.rsi) == egostrategy_signalboard::models::indicator::RsiSignal::Oversold {
            println!("  {} {} RSI={:.2}", stock.symbol, stock.name, stock.rsi);
        }
    }

    Ok(())
}
