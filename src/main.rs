// SPDX-License-Identifier: MPL-2.0
use toastline::app::{self, Flags};

const HELP: &str = "\
toastline - toast notification demo

USAGE:
  toastline [OPTIONS]

OPTIONS:
  --config <path>       Read settings from this TOML file
  --max-visible <n>     Maximum toasts on screen (1-20)
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(std::path::PathBuf::from(s))
        })?,
        max_visible: args.opt_value_from_str("--max-visible")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
