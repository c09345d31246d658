use clap::Parser;
use og_preview::Previews;
use og_preview::report::write_report;

mod args;
use args::{Args, convert_format};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut previews = Previews::new();
    if let Some(path) = &args.config {
        previews = match previews.with_config_file(path) {
            Ok(previews) => previews,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return;
            }
        };
    }
    if !args.urls.is_empty() {
        previews = previews.with_urls(args.urls);
    }
    if let Some(timeout) = args.timeout {
        previews = previews.with_timeout(timeout);
    }
    if let Some(user_agent) = args.user_agent {
        previews = previews.with_user_agent(user_agent);
    }

    let start_time = std::time::Instant::now();
    ::log::info!(
        "Fetching {} pages (timeout {}s)",
        previews.config().urls.len(),
        previews.config().timeout_secs
    );

    let rows = match previews.collect().await {
        Ok(rows) => rows,
        Err(e) => {
            ::log::error!("Failed to start fetcher: {}", e);
            return;
        }
    };

    ::log::info!(
        "Finished {} pages in {:.2} seconds",
        rows.len(),
        start_time.elapsed().as_secs_f64()
    );

    let stdout = std::io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &rows, convert_format(args.format)) {
        ::log::error!("Failed to write report: {}", e);
    }
}
