use std::sync::Arc;

use colored::Colorize;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use super::open::render_view;
use crate::error::RainbowError;
use crate::navigator::Navigator;
use crate::views::Renderer;

/// Navigate to each path read from stdin
///
/// Views render when their data binds. A line arriving before the previous
/// view has bound supersedes it, and the superseded view is never printed.
pub async fn handle_browse(mut navigator: Navigator, json: bool) -> crate::Result<()> {
    let renderer = Arc::new(Renderer::new()?);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<JoinHandle<()>> = None;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, leaving browser");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        let mut view = match navigator.navigate(path) {
            Ok(view) => view,
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                continue;
            }
        };

        let renderer = Arc::clone(&renderer);
        pending = Some(tokio::spawn(async move {
            let output = match view.settle().await {
                Ok(state) => render_view(&renderer, &view, &state, json),
                Err(e) => Err(e),
            };
            match output {
                Ok(output) => println!("{}", output),
                Err(RainbowError::Superseded(path)) => debug!("View for {} was superseded", path),
                Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
            }
        }));
    }

    // Let the last view finish before stdin closing ends the session
    if let Some(task) = pending {
        task.await.ok();
    }
    Ok(())
}
