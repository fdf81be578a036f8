#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = pdp_extract::adapters::jsonl::source::parse_json_lines(text);
    }
});
