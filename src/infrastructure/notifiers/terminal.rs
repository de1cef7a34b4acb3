use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use yansi::Paint;

use crate::domain::models::Notifier;

/// Prints alerts to the terminal. When `blocking` is set, the alert waits for
/// the user to press enter before control returns to the storefront.
#[derive(Default)]
pub struct TerminalNotifier {
    blocking: bool,
}

impl TerminalNotifier {
    pub fn blocking() -> TerminalNotifier {
        return TerminalNotifier { blocking: true };
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, text: &str) -> Result<()> {
        tracing::debug!(text, "Alert");
        println!("{}", Paint::yellow(format!("! {text}")).bold());

        if self.blocking {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("Press enter to continue")
                .allow_empty(true)
                .report(false)
                .interact_text()?;
        }

        return Ok(());
    }
}
