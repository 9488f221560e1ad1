// 公开导出的模块，供外部使用
pub mod models;
pub mod loader;
pub mod errors;
pub mod config;
pub mod services;

#[doc(hidden)]
pub mod util;

// 重新导出常用类型，方便使用
pub use models::stock::StockRecord;
pub use models::indicator::{IndicatorSet, ReasonReport};
pub use loader::RecordSet;
pub use services::classifier::{classify, split_reasons};
pub use services::dashboard::DashboardState;
pub use errors::{Result, SignalBoardError};
