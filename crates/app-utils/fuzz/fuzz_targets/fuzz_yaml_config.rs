//! Fuzz target for YamlParser::parse
//!
//! Any configuration that parses must also pass validation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use app_utils::config::{ConfigParser, YamlParser};

fuzz_target!(|data: &str| {
    if let Ok(config) = YamlParser.parse(data) {
        assert!(config.validate().is_ok());
        assert!(config.page_size > 0);
    }
});
