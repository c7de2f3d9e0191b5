// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::toast::{Severity, ToastMessage};

/// Top-level messages consumed by `App::update`. The toast variants forward
/// controller messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the demo toast of a severity through the payload controller.
    ShowToast(Severity),
    /// Raise or lower the banner flag.
    ToggleBanner,
    /// Message for the payload-driven toast.
    Toast(ToastMessage),
    /// Message for the flag-driven banner.
    Banner(ToastMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
