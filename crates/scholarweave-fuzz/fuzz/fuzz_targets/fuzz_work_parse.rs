#![no_main]

use libfuzzer_sys::fuzz_target;
use scholarweave::models::{Paper, WorkList};
use scholarweave::normalize::normalize_paper;

fuzz_target!(|data: &[u8]| {
    // Decoding may fail; mapping a decoded page must not panic
    if let Ok(list) = serde_json::from_slice::<WorkList>(data) {
        for work in list.results {
            let mut paper = Paper::from(work);
            let _ = normalize_paper(&mut paper);
        }
    }
});
