use page_stats::config::{get_config, init_config};
use page_stats::errors::PageStatsError;
use page_stats::runtime::modes::run_server;
use page_stats::system::init_logging;

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_config();

    let config = get_config();
    let log_guard = match init_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    if let Err(e) = run_server().await {
        match e.downcast_ref::<PageStatsError>() {
            Some(err) => eprintln!("{}", err.format_colored()),
            None => eprintln!("[ERROR] {:#}", e),
        }
        // 退出前刷新非阻塞日志
        drop(log_guard);
        std::process::exit(1);
    }
}
