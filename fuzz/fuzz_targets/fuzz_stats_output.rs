#![no_main]

use halow_chanmap::host::morse_cli::{apply_stats, parse_int_prefix, parse_stat_line};
use halow_chanmap::StatSlot;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for line in text.lines() {
        if let Some((key, value)) = parse_stat_line(line) {
            assert!(!key.is_empty());
            let _ = parse_int_prefix(value);
        }
    }

    let mut slots = [StatSlot::new("noise"), StatSlot::new("rx_packets")];
    let found = apply_stats(&text, &mut slots);
    assert!(found <= text.lines().count());
});
