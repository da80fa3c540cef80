use mi_http_server::build_app;
use mi_http_server::infrastructure::{config::load_config, database::DatabaseManager, logger};
use std::env;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数为配置文件路径（可选）
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    let _log_guard = logger::init_logging(&config.logging)?;

    let database = match DatabaseManager::new(&config.database).await {
        Ok(database) => database,
        Err(e) => {
            error!("连接数据库失败: {}", e);
            return Err(e.into());
        }
    };
    database.ensure_schema().await?;

    let app = build_app(database.item_store());

    let listener = TcpListener::bind(config.http.listen_addr()).await?;
    info!("🚀 商品服务运行在 http://{}", listener.local_addr()?);
    info!("   PUT/POST /item           - 增加商品");
    info!("   POST     /item/:item_id  - 修改商品");
    info!("   GET      /item/:item_id  - 查询商品（暂未实现）");
    info!("   DELETE   /item/:item_id  - 删除商品（暂未实现）");

    axum::serve(listener, app).await?;
    Ok(())
}
