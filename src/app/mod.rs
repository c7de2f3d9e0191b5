// SPDX-License-Identifier: MPL-2.0
//! Application root state for the toast showcase.
//!
//! The `App` owns both bindings the toast controllers observe: an optional
//! payload for the self-driven toast and a flag for the banner. Every handler
//! mutates a binding first and then lets the matching controller observe it.

mod message;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ToastConfig};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{Binding, FlagToast, PayloadToast, ToastMessage, ToastState};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Effective theme, resolved when the mode is set.
    theme: Theme,
    toast_config: ToastConfig,
    /// Clock of the last update, used to sample running transitions.
    now: Instant,
    payload: Binding<Option<ToastState>>,
    toast: PayloadToast,
    banner_flag: Binding<bool>,
    banner: FlagToast,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toast_phase", &self.toast.phase())
            .field("banner_phase", &self.banner.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    config::paths::init_cli_override(flags.config_dir.clone());

    // Iced 0.14 requires `Fn` for boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and surfaces a config warning as the first toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags.lang, config, config_warning)
    }

    fn with_config(
        lang: Option<String>,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(lang, &config);
        let banner = update::banner(&i18n, &config.toast);
        let now = Instant::now();

        let mut app = App {
            toast: PayloadToast::new(config.toast.padding()),
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.theme(),
            toast_config: config.toast,
            now,
            payload: Binding::new(None),
            banner_flag: Binding::new(false),
            banner,
            i18n,
        };

        let task = match config_warning {
            Some(key) => {
                let warning = ToastState::warning(app.i18n.tr(&key))
                    .with_duration(app.toast_config.duration())
                    .with_animation(app.toast_config.animation());
                app.payload.set(Some(warning));
                app.toast.observe(&app.payload, now).map(Message::Toast)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Switches the theme mode, detecting the system theme once if needed.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        if mode != self.theme_mode {
            self.theme_mode = mode;
            self.theme = mode.theme();
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(&self.toast, &self.banner, self.now)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Toast(ToastMessage::Frame(at)) | Message::Banner(ToastMessage::Frame(at)) => *at,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            toast_config: &self.toast_config,
            payload: &mut self.payload,
            toast: &mut self.toast,
            banner_flag: &mut self.banner_flag,
            banner: &mut self.banner,
            now: self.now,
        };

        match message {
            Message::ShowToast(severity) => update::handle_show_toast(&mut ctx, severity),
            Message::ToggleBanner => update::handle_toggle_banner(&mut ctx),
            Message::Toast(toast_message) => update::handle_toast_message(&mut ctx, toast_message),
            Message::Banner(banner_message) => {
                update::handle_banner_message(&mut ctx, banner_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toast: &self.toast,
            banner: &self.banner,
            banner_raised: *self.banner_flag.get(),
            duration_secs: self.toast_config.duration().as_secs_f64(),
            now: self.now,
        })
    }
}
