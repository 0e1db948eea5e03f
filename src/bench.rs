use std::collections::HashMap;
use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time;

use rand::Rng;

use crate::client::GitProtocolV2Client;
use crate::cmd::Cli;
use crate::consts::{DEFAULT_TIMEOUT_SECS, LS_REFS_RATIO, PLACEHOLDER_WANT_REF, PROGRESS_INTERVAL};
use crate::latency::DurationStats;
use crate::model::{LoadTestStats, Operation, TestResult};

/// pick a random repository and operation for the next request.
/// rng可注入,便于测试固定序列
fn pick_request<R: Rng>(rng: &mut R, repos: &[String]) -> (String, Operation) {
    let repo = repos[rng.gen_range(0..repos.len())].clone();
    let operation = if rng.gen_range(0.0..1.0) < LS_REFS_RATIO {
        Operation::LsRefs
    } else {
        Operation::Fetch
    };
    (repo, operation)
}

/// 单个worker的压测循环,结果只属于当前worker
fn worker_task<R: Rng>(
    worker_id: i32,
    client: &GitProtocolV2Client,
    params: &Cli,
    rng: &mut R,
) -> Vec<TestResult> {
    let mut results = Vec::with_capacity(params.requests as usize);

    for i in 0..params.requests {
        let (repo, operation) = pick_request(rng, &params.repos);

        let outcome = match operation {
            Operation::LsRefs => client.ls_refs(&repo),
            // fetch固定使用占位want-ref,探测代理的miss路径
            Operation::Fetch => client.fetch(&repo, PLACEHOLDER_WANT_REF),
        };

        results.push(TestResult {
            success: outcome.success,
            duration_ms: outcome.duration_ms,
            repo,
            operation,
            served_by: outcome.served_by,
            error: outcome.error,
        });

        if (i + 1) % PROGRESS_INTERVAL == 0 {
            print!(
                "worker {}: {}/{} requests\r",
                worker_id,
                i + 1,
                params.requests
            );
            _ = std::io::stdout().flush();
        }

        // think time
        if params.think_time > 0 {
            thread::sleep(time::Duration::from_millis(params.think_time));
        }
    }

    results
}

/// 启动所有worker,全部结束后汇总统计
pub fn run_load_test(params: &Cli) -> LoadTestStats {
    println!("starting load test:");
    println!("  target: {}", params.url);
    println!("  workers: {}", params.workers);
    println!("  requests per worker: {}", params.requests);
    println!("  total requests: {}", params.workers * params.requests);
    println!("  repositories: {}", params.repos.len());

    let (tx, rx): (
        mpsc::Sender<Vec<TestResult>>,
        mpsc::Receiver<Vec<TestResult>>,
    ) = mpsc::channel();

    let mut handles = vec![];

    let start_time = time::Instant::now();
    for worker_id in 0..params.workers {
        let thread_sender = tx.clone();
        let param = params.clone();

        let handle = thread::Builder::new()
            .name(format!("worker-{:0>4}", worker_id))
            .spawn(move || {
                let client =
                    GitProtocolV2Client::new(param.url.as_str(), DEFAULT_TIMEOUT_SECS).unwrap();
                let mut rng = rand::thread_rng();
                let results = worker_task(worker_id, &client, &param, &mut rng);
                thread_sender.send(results).unwrap();
            });
        handles.push(handle.unwrap());
    }
    for handle in handles {
        _ = handle.join();
    }
    drop(tx);
    let total_duration = time::Instant::now().duration_since(start_time);

    // 按worker完成顺序整体合并,无并发写
    let mut all_results = Vec::new();
    for worker_results in rx.iter() {
        all_results.extend(worker_results);
    }

    compute_statistics(&all_results, total_duration.as_secs_f64())
}

/// 根据全部请求结果计算汇总统计
pub fn compute_statistics(results: &[TestResult], total_duration_sec: f64) -> LoadTestStats {
    let total_requests = results.len();
    let successful = results.iter().filter(|r| r.success).count();
    let failed = total_requests - successful;

    let durations: Vec<f64> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.duration_ms)
        .collect();

    let mut server_distribution: HashMap<String, u32> = HashMap::new();
    let mut repo_distribution: HashMap<String, u32> = HashMap::new();
    let mut errors: HashMap<String, u32> = HashMap::new();
    for r in results {
        if !r.served_by.is_empty() {
            *server_distribution.entry(r.served_by.clone()).or_insert(0) += 1;
        }
        *repo_distribution.entry(r.repo.clone()).or_insert(0) += 1;
        if !r.success {
            *errors.entry(r.error.clone()).or_insert(0) += 1;
        }
    }

    // 防止除0
    let success_rate = if total_requests == 0 {
        0.0
    } else {
        successful as f64 / total_requests as f64 * 100.0
    };
    let requests_per_sec = if total_duration_sec > 0.0 {
        total_requests as f64 / total_duration_sec
    } else {
        0.0
    };

    LoadTestStats {
        total_requests,
        successful,
        failed,
        success_rate,
        total_duration_sec,
        requests_per_sec,
        duration_ms: DurationStats::compute(&durations),
        server_distribution,
        repo_distribution,
        errors,
    }
}
