// file: src/parser/patterns.rs
// description: compiled regex patterns for version token detection
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // first `major.minor` token; any patch or suffix after it is ignored
    pub static ref VERSION_TOKEN: Regex = Regex::new(
        r"(?:^|[^0-9.])([0-9]+)\.([0-9]+)"
    ).expect("VERSION_TOKEN regex is valid");
}
