use clap::Parser;
use serde_json;

mod bench;
mod client;
mod cmd;
mod latency;
mod model;
mod pktline;
mod report;
pub mod consts;

fn main() {
    // 解析命令行参数
    let params = cmd::Cli::parse();
    println!(
        "benchmark parameters: {}",
        serde_json::to_string(&params.clone()).unwrap()
    );

    let stats = bench::run_load_test(&params);
    report::print_summary(&stats);

    if let Some(path) = &params.output {
        match report::save_json(&stats, path) {
            Ok(_) => println!("results saved to {}", path),
            Err(e) => eprintln!("failed to save results to {}: {}", path, e),
        }
    }

    // 成功率低于95%时以非0退出码结束
    if stats.success_rate < 95.0 {
        std::process::exit(1);
    }
}
