use std::fs;
use std::io;

use crate::model::LoadTestStats;

/// 打印压测结果摘要
pub fn print_summary(stats: &LoadTestStats) {
    println!("\n{}", "=".repeat(60));
    println!("LOAD TEST RESULTS");
    println!("{}", "=".repeat(60));

    println!("\nTotal Requests:    {}", stats.total_requests);
    println!("Successful:        {}", stats.successful);
    println!("Failed:            {}", stats.failed);
    println!("Success Rate:      {:.2}%", stats.success_rate);
    println!("Total Duration:    {:.2}s", stats.total_duration_sec);
    println!("Requests/sec:      {:.2}", stats.requests_per_sec);

    println!("\nResponse Times (ms):");
    println!("  Min:             {:.2}", stats.duration_ms.min);
    println!("  Max:             {:.2}", stats.duration_ms.max);
    println!("  Mean:            {:.2}", stats.duration_ms.mean);
    println!("  Median:          {:.2}", stats.duration_ms.median);
    println!("  P95:             {:.2}", stats.duration_ms.p95);
    println!("  P99:             {:.2}", stats.duration_ms.p99);

    if !stats.server_distribution.is_empty() {
        println!("\nServer Distribution:");
        let mut servers: Vec<_> = stats.server_distribution.iter().collect();
        servers.sort_by(|a, b| a.0.cmp(b.0));
        for (server, count) in servers {
            let pct = *count as f64 / stats.total_requests as f64 * 100.0;
            println!("  {:20} {:6} ({:5.2}%)", server, count, pct);
        }
    }

    if !stats.errors.is_empty() {
        println!("\nErrors:");
        // 出现次数多的排前面
        let mut errors: Vec<_> = stats.errors.iter().collect();
        errors.sort_by(|a, b| b.1.cmp(a.1));
        for (error, count) in errors {
            println!("  {:40} {:6}", error, count);
        }
    }

    println!("\n{}\n", "=".repeat(60));
}

/// 将完整统计写入json文件
pub fn save_json(stats: &LoadTestStats, path: &str) -> io::Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json)
}
