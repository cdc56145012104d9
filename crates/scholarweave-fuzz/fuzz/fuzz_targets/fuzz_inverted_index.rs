#![no_main]

use libfuzzer_sys::fuzz_target;
use scholarweave::abstract_text::{InvertedIndex, reconstruct};

fuzz_target!(|data: &[u8]| {
    // Negative, colliding and huge positions must all be survivable
    if let Ok(index) = serde_json::from_slice::<InvertedIndex>(data) {
        let _ = reconstruct("", &index);
    }
});
