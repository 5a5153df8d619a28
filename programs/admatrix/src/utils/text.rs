/// Returns true if a zero-padded byte field carries any text.
pub fn has_text(buf: &[u8]) -> bool {
    buf.iter().any(|b| *b != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_padded_fields() {
        assert!(!has_text(&[0u8; 48]));

        let mut handle = [0u8; 48];
        handle[..9].copy_from_slice(b"pay@me.io");
        assert!(has_text(&handle));
    }
}
