use crate::models::view::AnalysisView;
use std::path::PathBuf;

pub struct Config {
    pub data_dir: String,
    pub data_file: String,
    pub chart_label_len: usize,
    pub default_view: AnalysisView,
}

impl Config {
    pub fn new() -> Self {
        Self {
            data_dir: "data".to_string(),
            data_file: "white_wine_stock_analysis_20250701_064525.csv".to_string(),
            chart_label_len: 4,
            default_view: AnalysisView::Overview,
        }
    }

    pub fn with_data_dir(mut self, dir: &str) -> Self {
        self.data_dir = dir.to_string();
        self
    }

    pub fn with_data_file(mut self, file: &str) -> Self {
        self.data_file = file.to_string();
        self
    }

    // 图表横轴标签保留的字符数
    pub fn with_chart_label_len(mut self, len: usize) -> Self {
        self.chart_label_len = len;
        self
    }

    pub fn with_default_view(mut self, view: AnalysisView) -> Self {
        self.default_view = view;
        self
    }

    /// 默认数据文件的完整路径
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.data_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = Config::new()
            .with_data_dir("tmp")
            .with_data_file("metrics.csv")
            .with_chart_label_len(2)
            .with_default_view(AnalysisView::Charts);

        assert_eq!(config.data_path(), PathBuf::from("tmp").join("metrics.csv"));
        assert_eq!(config.chart_label_len, 2);
        assert_eq!(config.default_view, AnalysisView::Charts);
    }

    #[test]
    fn test_default_points_at_bundled_snapshot() {
        let config = Config::default();
        assert_eq!(
            config.data_path(),
            PathBuf::from("data/white_wine_stock_analysis_20250701_064525.csv")
        );
        assert_eq!(config.chart_label_len, 4);
    }
}
