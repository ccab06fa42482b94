// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};

const HELP: &str = "\
Iced Toast

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  -h, --help                Print help information
  --config-dir <PATH>       Directory containing settings.toml
  --display-secs <SECONDS>  How long alerts stay up before dismissing
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        config_dir: parse_optional(&mut args, "--config-dir"),
        display_secs: parse_optional(&mut args, "--display-secs"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: ignoring unrecognized arguments: {remaining:?}");
    }

    app::run(flags)
}

/// Reads an optional `--key value` argument, warning instead of failing when
/// the value does not parse.
fn parse_optional<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Warning: {e}");
            None
        }
    }
}
