//! Linkstash RPC server: newline-delimited JSON over stdin/stdout.
//!
//! Protocol: one JSON object per line.
//! Request:  {"action":"add", "url":"https://... #tag", "force":"0"}
//! Response: {"result":true, "error":false, "id":"12", "url":"...", ...}
//!
//! Each request runs to completion on its own blocking worker, so a slow
//! fetch never holds up other requests. Responses are written as they finish.
//! Requests without an `action` get no response line.

use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info};

use linkstash::app::App;
use linkstash::dispatcher::dispatch_line;

fn main() {
    linkstash::logging::init();

    // The blocking HTTP client must be built outside the async runtime.
    let app = match App::new(None) {
        Ok(app) => Arc::new(app),
        Err(e) => {
            error!(error = %e, "failed to initialise linkstash");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to start runtime");
            std::process::exit(1);
        }
    };

    runtime.block_on(serve(app));
}

async fn serve(app: Arc<App>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(line) = rx.recv().await {
            let written = async {
                stdout.write_all(line.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await
            }
            .await;
            if let Err(e) = written {
                error!(error = %e, "stdout closed");
                break;
            }
        }
    });

    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    let _ = tx.send(ready.to_string());
    info!(
        fetch_timeout_secs = app.settings().fetch.timeout_secs,
        "ready for requests"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "failed to read request");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let app = Arc::clone(&app);
        let tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            if let Some(response) = dispatch_line(&app, &line) {
                let _ = tx.send(response);
            }
        });
    }

    // The writer drains until every in-flight worker has dropped its sender.
    drop(tx);
    if let Err(e) = writer.await {
        error!(error = %e, "response writer failed");
    }
    info!("stdin closed, shutting down");
}
