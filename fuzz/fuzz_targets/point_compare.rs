#![no_main]

use enlace::point::compare_points;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split arbitrary bytes into two candidate point strings; comparison
    // must reject malformed input with an error, never panic
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some((a, b)) = input.split_once('|') {
            let _ = compare_points(a, b);
        }
    }
});
