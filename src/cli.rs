use clap::Parser;

/// Print the local date and time in ISO 8601 form once per second
#[derive(Parser, Debug)]
#[command(
    name = "isoclock",
    version,
    long_about = "Print the current local date and time once per second in ISO 8601 \
                  form (YYYY-MM-DDTHH:MM:SS±HHMM) until interrupted. The time zone \
                  comes from the host (e.g. the TZ environment variable)."
)]
pub struct Cli {}
