//! Foreground color selection.

use crate::types::{Color, Digest};

/// Take the first three digest bytes as red, green and blue.
#[must_use = "returns the picked color"]
pub const fn pick_color(digest: &Digest) -> Color {
    let [red, green, blue, ..] = *digest.as_bytes();
    Color::new(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_three_bytes_become_rgb() {
        let mut bytes = [0u8; 16];
        bytes[..3].copy_from_slice(&[100, 150, 200]);
        assert_eq!(pick_color(&Digest::new(bytes)), Color::new(100, 150, 200));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let a = Digest::new([1, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let b = Digest::new([1, 2, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9]);
        assert_eq!(pick_color(&a), pick_color(&b));
    }

    #[test]
    fn hey_ho_color() {
        let digest = crate::hash::hash("hey ho");
        assert_eq!(pick_color(&digest), Color::new(172, 137, 160));
    }
}
