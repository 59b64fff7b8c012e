// SPDX-License-Identifier: MPL-2.0
//! Binary entry point: parses CLI arguments and launches the Iced loop.

use iced_tint::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
