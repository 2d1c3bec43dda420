mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{HeadlessReport, print_json, print_plain, print_report_json, print_report_plain, print_themes};
