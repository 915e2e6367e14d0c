use std::fmt;

/// Formats a byte count with a binary unit suffix, keeping three significant
/// digits: `1.00KB`, `10.0MB`, `100GB`. Plain bytes are printed whole.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MemoryDbgHelper(pub u64);

const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

impl MemoryDbgHelper {
    fn scaled(self) -> (f64, &'static str) {
        let mut amount = self.0 as f64;
        let mut unit = 0;
        while amount >= 1024.0 && unit + 1 < UNITS.len() {
            amount /= 1024.0;
            unit += 1;
        }
        (amount, UNITS[unit])
    }
}

impl fmt::Display for MemoryDbgHelper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (amount, unit) = self.scaled();
        let precision = match (unit, amount) {
            ("B", _) => 0,
            (_, a) if a < 10.0 => 2,
            (_, a) if a < 100.0 => 1,
            _ => 0,
        };
        write!(f, "{:.*}{}", precision, amount, unit)
    }
}

impl fmt::Debug for MemoryDbgHelper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[test]
fn memory_dbg_helper() {
    let cases = [
        (1, "1B"),
        (100, "100B"),
        (1023, "1023B"),
        (1024, "1.00KB"),
        (10 * 1024, "10.0KB"),
        (100 * 1024, "100KB"),
        (1536 * 1024, "1.50MB"),
        (1024u64.pow(3) * 10, "10.0GB"),
        (1024u64.pow(4) * 100, "100TB"),
        (1024u64.pow(6), "1.00EB"),
        (u64::MAX, "16.0EB"),
    ];

    for (bytes, expected) in cases {
        assert_eq!(MemoryDbgHelper(bytes).to_string(), expected);
        assert_eq!(format!("{:?}", MemoryDbgHelper(bytes)), expected);
    }
}
