#![no_main]

use halow_chanmap::host::mmrc::{is_active_row, parse_mmrc_table, row_throughput_kbps};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Column offsets must never split a multi-byte character
    for line in text.lines() {
        let _ = is_active_row(line);
        let _ = row_throughput_kbps(line);
    }

    if let Some(kbps) = parse_mmrc_table(&text) {
        assert!(kbps >= 1);
    }
});
