// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::ui::theming::ThemeMode;

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    match value {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(format!(
            "unknown theme '{other}' (expected light, dark, or system)"
        )),
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let theme = match args.opt_value_from_fn("--theme", parse_theme) {
        Ok(theme) => theme,
        Err(err) => {
            eprintln!("{err}");
            None
        }
    };

    app::run(Flags { theme })
}
