use clap::Parser;

#[derive(Parser, serde::Serialize, Clone)]
#[command(name = "git-proxy-benchmark")]
#[command(version = "1.0")]
#[command(about = "git caching proxy load benchmark tool", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "http://localhost:8080")]
    pub url: String,
    #[arg(long, default_value_t = 10)]
    pub workers: i32,
    #[arg(long, default_value_t = 100)]
    pub requests: i32,
    #[arg(long, default_value_t = 100)]
    pub think_time: u64,
    #[arg(long, num_args = 1.., default_values_t = [
        String::from("github.com/kubernetes/kubernetes"),
        String::from("github.com/golang/go"),
        String::from("github.com/torvalds/linux"),
        String::from("github.com/hashicorp/terraform"),
    ])]
    pub repos: Vec<String>,
    #[arg(long)]
    pub output: Option<String>,
}
