//! Serve command - run the in-memory reference task service

use tasklist::output::{OperationResult, OutputMode};
use tasklist::server::{TaskBoard, TaskServer};

/// Serve tasks on `host:port` until interrupted
pub fn serve(host: &str, port: u16, mode: OutputMode) -> anyhow::Result<()> {
    let server = TaskServer::bind(&format!("{host}:{port}"), TaskBoard::new())?;

    OperationResult {
        success: true,
        message: format!("Serving tasks at {}", server.base_url()),
    }
    .render(mode);
    if mode == OutputMode::Human {
        println!("Press Ctrl+C to stop");
    }

    server.run();
    Ok(())
}
