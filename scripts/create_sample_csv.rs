use anyhow::Context;
use egostrategy_signalboard::models::stock::RECORD_SCHEMA;
use std::fs;
use std::path::Path;

// symbol,name,价格,rsi,pe,pb,roe,最大回撤,技术评分,基本面评分,综合评分,技术面理由,基本面理由
const SAMPLE_ROWS: [&str; 5] = [
    "600519.SH,贵州茅台,1405.57,32.68,19.82,7.45,0.28,-0.35,6.5,9,15.5,['RSI接近超卖'],['ROE优秀']",
    "000858.SZ,五粮液,121.36,28.41,14.87,3.62,0.23,-0.52,7,8.5,15.5,['RSI超卖'],['估值偏低']",
    "000568.SZ,泸州老窖,118.9,41.25,13.9,4.18,0.31,-0.48,5.5,9,14.5,['均线粘合'],['ROE优秀']",
    "600809.SH,山西汾酒,182.4,45.02,17.66,5.91,0.33,-0.41,6,9,15,['缩量整理'],['业绩稳健']",
    "002304.SZ,洋河股份,72.15,25.37,13.12,1.42,0.12,-0.61,6.5,6,12.5,['RSI超卖'],['PB偏低']",
];

fn main() -> anyhow::Result<()> {
    let header: Vec<&str> = RECORD_SCHEMA.iter().map(|(name, _)| *name).collect();

    let mut content = header.join(",");
    content.push('\n');
    for row in SAMPLE_ROWS {
        content.push_str(row);
        content.push('\n');
    }

    // 确保目录存在
    let data_dir = Path::new("data");
    fs::create_dir_all(data_dir).context("创建data目录失败")?;

    let file_name = format!(
        "white_wine_stock_analysis_{}.csv",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = data_dir.join(&file_name);
    fs::write(&path, content).with_context(|| format!("写入{}失败", path.display()))?;

    println!("成功创建示例数据文件 {}", path.display());
    Ok(())
}
