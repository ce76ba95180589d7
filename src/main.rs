//! Replays a recorded editor session and prints what would be applied.
//!
//! ```sh
//! stampdesk session.json
//! ```
//!
//! Apply events are answered locally: each request is printed to stdout as
//! JSON and treated as successful. Remaining placed stamps are printed last.
//! Scripts without their own settings use the user's settings file.

use anyhow::{Context, Result};
use stampdesk::apply::{ApplyReceipt, ApplyRequest};
use stampdesk::script::Script;
use stampdesk::settings::EditorSettings;
use stampdesk::{EditorResult, logging};
use std::path::PathBuf;

fn main() -> Result<()> {
    logging::init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: stampdesk <script.json>")?;
    let mut script =
        Script::load(&path).with_context(|| format!("Failed to load {}", path.display()))?;
    if script.settings.is_none() {
        script.settings = Some(EditorSettings::load());
    }

    let backend = |request: &ApplyRequest| -> EditorResult<ApplyReceipt> {
        println!("{}", serde_json::to_string_pretty(request)?);
        Ok(ApplyReceipt {
            download_url: format!("/download/{}", request.session_id),
            signed_session_id: Some(request.session_id.clone()),
        })
    };

    let editor = script.run(&backend).context("Replay failed")?;
    let remaining: Vec<_> = editor.stamps().iter().collect();
    println!("{}", serde_json::to_string_pretty(&remaining)?);
    Ok(())
}
