// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the toast overlay.
//!
//! The `App` struct owns a notification `Manager` and a diagnostics
//! collector, offers one button per kind and per preset, and drives the
//! manager's countdowns with a periodic tick while toasts are on screen.
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::notifications::MaxVisible;
use crate::notifications::{self, Kind, Manager, Notification, Preset, Settings};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::Toast;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 520;

/// Root Iced application state.
pub struct App {
    notifications: Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_toasts", &self.notifications.len())
            .field("diagnostic_events", &self.diagnostics.len())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::Message),
    Show(Kind),
    ShowPreset(Preset),
    ClearAll,
    /// Copy the diagnostics report to the clipboard.
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Explicit settings file, bypassing the default config location.
    pub config_path: Option<PathBuf>,
    /// Overrides `[queue] max_visible` from the settings file.
    pub max_visible: Option<usize>,
}

/// Builds the window settings.
#[must_use]
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
    // iced 0.14 boots through `Fn`, so the flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the configuration requested by `flags`.
///
/// Returns the config and an optional warning to surface as a toast.
fn load_config(flags: &Flags) -> (Config, Option<String>) {
    match &flags.config_path {
        Some(path) => match config::load_from_path(path) {
            Ok(config) => (config, None),
            Err(err) => (
                Config::default(),
                Some(format!("Could not read {}: {err}", path.display())),
            ),
        },
        None => {
            let (config, warning) = config::load();
            let warning = warning.map(|_| "Settings file is invalid, using defaults".to_string());
            (config, warning)
        }
    }
}

impl App {
    /// Initializes the manager from configuration and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = load_config(&flags);

        let mut settings = Settings::from(&config);
        if let Some(max_visible) = flags.max_visible {
            settings.max_visible = MaxVisible::new(max_visible);
        }

        let diagnostics = DiagnosticsCollector::default();
        let mut manager = Manager::with_settings(settings);
        manager.set_diagnostics(diagnostics.handle());

        let mut app = App {
            notifications: manager,
            diagnostics,
        };

        if let Some(warning) = warning {
            // Warning toasts always carry a message here, push cannot fail.
            let _ = app
                .notifications
                .push(Notification::warning(warning).with_title("Settings"));
        }
        app.diagnostics.process_pending();

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => "Toastline".to_string(),
            n => format!("Toastline ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notifications() {
            time::every(self.notifications.settings().tick_interval.as_duration())
                .map(|_| Message::Notification(notifications::Message::Tick))
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Show(kind) => {
                // Sample messages are never blank.
                let _ = self.notifications.add(kind, sample_message(kind));
                Task::none()
            }
            Message::ShowPreset(preset) => {
                self.notifications.show_preset(preset);
                Task::none()
            }
            Message::ClearAll => {
                self.notifications.clear_all();
                Task::none()
            }
            Message::ExportDiagnostics => match self.diagnostics.export_json() {
                Ok(json) => {
                    let _ = self.notifications.push(
                        Notification::success("Diagnostics copied to clipboard.")
                            .with_title("Diagnostics"),
                    );
                    iced::clipboard::write(json)
                }
                Err(err) => {
                    let _ = self.notifications.push(
                        Notification::error(format!("Export failed: {err}"))
                            .with_title("Diagnostics"),
                    );
                    Task::none()
                }
            },
        };
        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        let kind_buttons = Kind::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, kind| row.push(action_button(kind.as_str(), Message::Show(*kind))),
        );

        let preset_buttons = Preset::ALL.iter().fold(
            Column::new().spacing(spacing::XS),
            |column, preset| column.push(action_button(preset.key(), Message::ShowPreset(*preset))),
        );

        let controls = Row::new()
            .spacing(spacing::XS)
            .push(action_button("clear all", Message::ClearAll))
            .push(action_button("export diagnostics", Message::ExportDiagnostics));

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(Text::new("Kinds").size(typography::TITLE_SM))
            .push(kind_buttons)
            .push(Text::new("Presets").size(typography::TITLE_SM))
            .push(preset_buttons)
            .push(controls)
            .push(
                Text::new(format!(
                    "{} active, {} diagnostic events",
                    self.notifications.len(),
                    self.diagnostics.len()
                ))
                .size(typography::CAPTION),
            );

        let base = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Top);

        let overlay = Toast::view_overlay(&self.notifications).map(Message::Notification);

        Stack::new().push(base).push(overlay).into()
    }
}

fn action_button(label: &str, message: Message) -> Element<'static, Message> {
    button(Text::new(label.to_string()).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding(spacing::XS)
        .on_press(message)
        .into()
}

/// Placeholder message used by the per-kind buttons.
fn sample_message(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "Your changes were saved.",
        Kind::Error => "We couldn't reach the server. Please try again.",
        Kind::Warning => "Your session will expire soon.",
        Kind::Info => "New photos were added to the gallery.",
        Kind::Love => "Thank you for being part of our day!",
        Kind::Celebration => "See you at the party!",
        Kind::Magic => "Something special is waiting in the gallery.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEventKind;
    use std::fs;
    use tempfile::tempdir;

    fn app_with(flags: Flags) -> App {
        App::new(flags).0
    }

    fn explicit_config(contents: &str) -> (tempfile::TempDir, Flags) {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, contents).expect("write config");
        let flags = Flags {
            config_path: Some(path),
            max_visible: None,
        };
        (dir, flags)
    }

    #[test]
    fn config_file_sets_capacity() {
        let (_dir, flags) = explicit_config("[queue]\nmax_visible = 2\n");
        let mut app = app_with(flags);

        for kind in Kind::ALL {
            let _ = app.update(Message::Show(kind));
        }
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn max_visible_flag_overrides_config() {
        let (_dir, mut flags) = explicit_config("[queue]\nmax_visible = 2\n");
        flags.max_visible = Some(4);
        let app = app_with(flags);

        assert_eq!(app.notifications.settings().max_visible.value(), 4);
    }

    #[test]
    fn unreadable_config_shows_warning_toast() {
        let (_dir, flags) = explicit_config("[queue\n");
        let app = app_with(flags);

        let views = app.notifications.views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].kind, Kind::Warning);
        assert!(app.diagnostics.iter().any(|event| matches!(
            event.kind,
            DiagnosticEventKind::Warning { .. }
        )));
    }

    #[test]
    fn buttons_route_to_manager() {
        let (_dir, flags) = explicit_config("");
        let mut app = app_with(flags);

        let _ = app.update(Message::ShowPreset(Preset::Offline));
        let _ = app.update(Message::Show(Kind::Love));
        assert_eq!(app.notifications.len(), 2);
        assert_eq!(app.title(), "Toastline (2)");

        let _ = app.update(Message::ClearAll);
        assert!(app.notifications.is_empty());
        assert_eq!(app.notifications.pending_timers(), 0);
        assert_eq!(app.title(), "Toastline");
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let (_dir, flags) = explicit_config("");
        let mut app = app_with(flags);
        let _ = app.update(Message::ShowPreset(Preset::PhotoUploaded));
        let id = app.notifications.views()[0].id;

        let _ = app.update(Message::Notification(notifications::Message::Dismiss(id)));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn diagnostics_collect_lifecycle_events() {
        let (_dir, flags) = explicit_config("");
        let mut app = app_with(flags);
        let _ = app.update(Message::Show(Kind::Error));

        assert!(app.diagnostics.len() >= 2, "shown + error mirror expected");
    }

    #[test]
    fn export_diagnostics_confirms_with_its_own_toast() {
        let (_dir, flags) = explicit_config("");
        let mut app = app_with(flags);

        let _ = app.update(Message::ExportDiagnostics);

        let views = app.notifications.views();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].kind, Kind::Success);
        assert_eq!(views[0].title.as_deref(), Some("Diagnostics"));
        assert_eq!(views[0].message, "Diagnostics copied to clipboard.");
    }

    #[test]
    fn every_kind_has_a_sample_message() {
        for kind in Kind::ALL {
            assert!(!sample_message(kind).trim().is_empty());
        }
    }
}
