#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::Path, process};

use iced::{Settings, Size};
use tracing::error;

use login_gui::{
    app::App,
    args::{parse_args, usage, Arg},
    config::{self, Config},
    logger, VERSION,
};
use login_ui::{component::text, font, theme};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let app_name = args
        .first()
        .and_then(|a| Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("login-gui")
        .to_string();

    let mut config_path = None;
    for arg in parse_args(&args)? {
        match arg {
            Arg::Version => {
                eprintln!("{}", VERSION);
                process::exit(0);
            }
            Arg::Help => {
                eprintln!("{}", usage(&app_name, VERSION));
                process::exit(0);
            }
            Arg::ConfigPath(path) => config_path = Some(path),
        }
    }

    let config = match config_path {
        Some(path) => Config::from_file(&path)?,
        None => Config::from_file_or_default(&config::default_path()?)?,
    };

    let log_level = match logger::parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    logger::setup_logger(log_level)?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("login-gui".to_string()),
        antialiasing: false,
        default_text_size: text::BODY_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size::new(600.0, 500.0),
        min_size: Some(Size::new(400.0, 400.0)),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
