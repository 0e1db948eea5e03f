use std::collections::HashMap;

use serde::Serialize;

use crate::latency::DurationStats;

/// git protocol v2 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LsRefs,
    Fetch,
}

/// 单次请求的完整记录
#[derive(Debug, Clone)]
pub struct TestResult {
    pub success: bool,

    // 整个请求的耗时,毫秒
    pub duration_ms: f64,

    pub repo: String,

    pub operation: Operation,

    // 响应头X-Served-By,标识处理请求的后端实例,缺失时为空
    pub served_by: String,

    // 失败原因,成功时为空
    pub error: String,
}

/// 压测汇总统计
#[derive(Debug, Clone, Serialize)]
pub struct LoadTestStats {
    // 请求总数
    pub total_requests: usize,

    // 成功的请求总数
    pub successful: usize,

    // 失败的请求总数
    pub failed: usize,

    pub success_rate: f64,

    // 压测实际时长
    pub total_duration_sec: f64,

    pub requests_per_sec: f64,

    // 成功请求的延迟分布
    pub duration_ms: DurationStats,

    // 各后端实例处理的请求数
    pub server_distribution: HashMap<String, u32>,

    // 各仓库收到的请求数
    pub repo_distribution: HashMap<String, u32>,

    // 各类错误的出现次数
    pub errors: HashMap<String, u32>,
}
