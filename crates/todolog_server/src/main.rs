use log::{error, info};
use std::process::ExitCode;
use todolog_core::db::open_db;
use todolog_core::{init_logging, FacadeAuditLog, SqliteTodoStore, TodoService};
use todolog_server::{run, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::from_env();

    if let Err(message) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        // Logging is not up yet, so this failure goes to stderr directly.
        eprintln!("logging bootstrap failed: {message}");
        return ExitCode::FAILURE;
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=server_start module=server status=error error_code=db_open_failed db={} error={err}",
                config.db_path
            );
            return ExitCode::FAILURE;
        }
    };

    let store = match SqliteTodoStore::try_new(conn) {
        Ok(store) => store,
        Err(err) => {
            error!(
                "event=server_start module=server status=error error_code=store_not_ready error={err}"
            );
            return ExitCode::FAILURE;
        }
    };

    let service = TodoService::new(store, FacadeAuditLog);
    let state = AppState::new(service);

    let listener = match TcpListener::bind(&config.addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(
                "event=server_start module=server status=error error_code=bind_failed addr={} error={err}",
                config.addr
            );
            return ExitCode::FAILURE;
        }
    };

    info!(
        "event=server_start module=server status=ok addr={} db={}",
        config.addr, config.db_path
    );

    if let Err(err) = run(listener, state).await {
        error!("event=server_stop module=server status=error error={err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
