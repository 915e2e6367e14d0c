/// Length of a NUL-terminated UTF-16 buffer, or the whole buffer when no
/// terminator is present.
pub fn wstrlens(buffer: &[u16]) -> usize {
    buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len())
}

/// Decodes a fixed-size UTF-16 field such as `DXGI_ADAPTER_DESC::Description`.
pub fn wide_to_string(buffer: &[u16]) -> String {
    String::from_utf16_lossy(&buffer[..wstrlens(buffer)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(text: &str, len: usize) -> Vec<u16> {
        let mut buffer: Vec<u16> = text.encode_utf16().collect();
        buffer.resize(len, 0);
        buffer
    }

    #[test]
    fn stops_at_the_first_nul() {
        let buffer = padded("Microsoft Basic Render Driver", 128);
        assert_eq!(wstrlens(&buffer), 29);
        assert_eq!(wide_to_string(&buffer), "Microsoft Basic Render Driver");
    }

    #[test]
    fn unterminated_buffer_is_used_whole() {
        let buffer: Vec<u16> = "GPU".encode_utf16().collect();
        assert_eq!(wstrlens(&buffer), 3);
        assert_eq!(wide_to_string(&buffer), "GPU");
    }

    #[test]
    fn empty_description() {
        assert_eq!(wide_to_string(&[0; 128]), "");
        assert_eq!(wide_to_string(&[]), "");
    }
}
