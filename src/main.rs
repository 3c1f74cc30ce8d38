// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::toast::Position;
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        log::warn!("ignoring --config: {err}");
        None
    });
    let position: Option<Position> = args.opt_value_from_str("--position").unwrap_or_else(|err| {
        log::warn!("ignoring --position: {err}");
        None
    });

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("unused arguments: {rest:?}");
    }

    app::run(Flags {
        config_path,
        position,
    })
}
