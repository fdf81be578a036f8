#![no_main]
use libfuzzer_sys::fuzz_target;

use pdp_extract::adapters::memory_log::MemoryLog;
use pdp_extract::domain::extract::ListingExtractor;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(text) {
            let extractor = ListingExtractor::new(std::sync::Arc::new(MemoryLog::new()));
            if let Ok(record) = extractor.parse_listing(&json, "12345") {
                let line = record.to_json_line().expect("record serializes");
                assert_eq!(line.matches('\n').count(), 1);
            }
        }
    }
});
