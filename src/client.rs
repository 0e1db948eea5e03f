use std::time;

use crate::pktline;

/// 单次请求的原始结果,由worker补充repo和operation后转成TestResult
pub struct RequestOutcome {
    pub success: bool,
    pub duration_ms: f64,
    pub served_by: String,
    pub error: String,
}

/// git protocol v2 客户端,持有一个复用连接的http会话
pub struct GitProtocolV2Client {
    base_url: String,
    session: reqwest::blocking::Client,
}

impl GitProtocolV2Client {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<GitProtocolV2Client, reqwest::Error> {
        let session = reqwest::blocking::Client::builder()
            .timeout(time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(GitProtocolV2Client {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn ls_refs(&self, repo_path: &str) -> RequestOutcome {
        self.upload_pack(repo_path, pktline::encode_ls_refs())
    }

    pub fn fetch(&self, repo_path: &str, want_ref: &str) -> RequestOutcome {
        self.upload_pack(repo_path, pktline::encode_fetch(want_ref))
    }

    // 发送git-upload-pack请求,无论成功失败都测量整体耗时
    fn upload_pack(&self, repo_path: &str, payload: Vec<u8>) -> RequestOutcome {
        let url = format!("{}/{}/git-upload-pack", self.base_url, repo_path);

        let start = time::Instant::now();
        let response = self
            .session
            .post(url.as_str())
            .header("Content-Type", "application/x-git-upload-pack-request")
            .header("Git-Protocol", "version=2")
            .header("Accept", "application/x-git-upload-pack-result")
            .body(payload)
            .send();

        match response {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let served_by = resp
                    .headers()
                    .get("X-Served-By")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                // 先读完响应体再计时,耗时包含body传输
                let body = resp.bytes();
                let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

                if status != 200 {
                    return RequestOutcome {
                        success: false,
                        duration_ms,
                        served_by: String::new(),
                        error: format!("HTTP {}", status),
                    };
                }

                match body {
                    Ok(bytes) if bytes.is_empty() => RequestOutcome {
                        success: false,
                        duration_ms,
                        served_by: String::new(),
                        error: String::from("Empty response"),
                    },
                    Ok(_) => RequestOutcome {
                        success: true,
                        duration_ms,
                        served_by,
                        error: String::new(),
                    },
                    Err(e) => RequestOutcome {
                        success: false,
                        duration_ms,
                        served_by: String::new(),
                        error: e.to_string(),
                    },
                }
            }
            Err(e) => RequestOutcome {
                success: false,
                duration_ms: start.elapsed().as_secs_f64() * 1000.0,
                served_by: String::new(),
                error: e.to_string(),
            },
        }
    }
}
