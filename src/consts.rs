/// ls-refs 请求的占比,剩余部分为 fetch
pub const LS_REFS_RATIO: f64 = 0.8;

/// fetch 使用的占位 want-ref,40个0,用于探测代理的 miss 路径
pub const PLACEHOLDER_WANT_REF: &str = "0000000000000000000000000000000000000000";

/// 单次请求的默认超时时间
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 每完成多少个请求打印一次进度
pub const PROGRESS_INTERVAL: i32 = 10;
