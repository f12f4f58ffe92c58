//! Submit compiled prompts to the session API, one at a time.

use uuid::Uuid;

use crate::domain::PromptRef;
use crate::domain::prompt::with_uniqueness_token;
use crate::ports::{ProjectStore, SessionClient};

/// Tally of one launch sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchReport {
    /// Prompts sent to the API, whatever the response.
    pub submitted: usize,
    /// Entries skipped because they were missing or empty.
    pub skipped: usize,
    /// Submissions answered with a non-2xx status or a transport failure.
    pub failed: usize,
}

/// Launch every prompt reference in order.
///
/// Missing or empty entries are skipped with a diagnostic, and a failed
/// submission never stops the remaining ones.
pub fn execute<P, C>(project: &P, client: &C, prompts: &[PromptRef]) -> LaunchReport
where
    P: ProjectStore + ?Sized,
    C: SessionClient + ?Sized,
{
    let mut report = LaunchReport::default();

    for entry in prompts {
        let Some((text, source)) = load_prompt(project, entry) else {
            report.skipped += 1;
            continue;
        };

        println!("Launching prompt: {}", source);
        let prompt = with_uniqueness_token(&text, &Uuid::new_v4().to_string());
        let response = client.post_prompt(&prompt);
        println!("Response: {} {}", response.status_code, response.text);

        report.submitted += 1;
        if !response.is_success() {
            tracing::warn!(status = response.status_code, %source, "session launch failed");
            report.failed += 1;
            continue;
        }
        match response.json() {
            Ok(body) => tracing::debug!(session_id = ?body.get("session_id"), "session created"),
            Err(err) => tracing::debug!(error = %err, "session response was not JSON"),
        }
    }

    report
}

/// Load prompt text and a human-readable source label, or `None` when the entry is skipped.
fn load_prompt<P: ProjectStore + ?Sized>(
    project: &P,
    entry: &PromptRef,
) -> Option<(String, String)> {
    match entry {
        PromptRef::Inline(text) => {
            if text.trim().is_empty() {
                println!("Prompt content empty, skipping launch.");
                return None;
            }
            Some((text.clone(), entry.to_string()))
        }
        PromptRef::File(path) => {
            let resolved = project.resolve(path);
            match project.read_prompt(path) {
                Ok(Some(text)) if !text.trim().is_empty() => {
                    Some((text, resolved.display().to_string()))
                }
                Ok(Some(_)) => {
                    println!("Prompt file empty: {}, skipping launch.", resolved.display());
                    None
                }
                Ok(None) => {
                    println!("Prompt file missing: {}, skipping launch.", resolved.display());
                    None
                }
                Err(err) => {
                    println!(
                        "Prompt file unreadable: {} ({}), skipping launch.",
                        resolved.display(),
                        err
                    );
                    None
                }
            }
        }
    }
}
