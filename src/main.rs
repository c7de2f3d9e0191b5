// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
iced_toast - toast notification showcase

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
                          (overrides ICED_TOAST_CONFIG_DIR)

ENVIRONMENT:
  RUST_LOG                Log filter (default: iced_toast=info)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "ignoring invalid argument");
            None
        }
    }
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_arg(&mut args, "--lang"),
        config_dir: optional_arg(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}
