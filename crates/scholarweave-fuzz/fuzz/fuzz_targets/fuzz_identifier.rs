#![no_main]

use libfuzzer_sys::fuzz_target;
use scholarweave::identifier::normalize_identifier;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = normalize_identifier(raw);
    }
});
