use iced_folio::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        profile_path: args
            .opt_value_from_str::<_, PathBuf>("--profile")
            .unwrap_or(None),
    };

    app::run(flags)
}
