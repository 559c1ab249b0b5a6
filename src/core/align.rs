use tracing::debug;

/// Right-pad `s` with `pad` until it is `width` characters long.
pub fn pad_right(s: &str, width: usize, pad: char) -> String {
    let len = s.chars().count();
    let mut padded = String::with_capacity(s.len() + width.saturating_sub(len));
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(pad, width.saturating_sub(len)));
    padded
}

/// Pad the shorter of the two strings on the right so both have
/// `max(len(s1), len(s2))` characters.
pub fn align_strings(s1: &str, s2: &str, pad: char) -> (String, String) {
    let width = s1.chars().count().max(s2.chars().count());
    debug!("Aligning {:?} and {:?} to width {}", s1, s2, width);
    (pad_right(s1, width, pad), pad_right(s2, width, pad))
}

/// Walk both strings position by position up to the longer length.
/// `None` marks a padded position.
pub fn aligned_positions<'a>(
    s1: &'a str,
    s2: &'a str,
) -> impl Iterator<Item = (Option<char>, Option<char>)> + 'a {
    let width = s1.chars().count().max(s2.chars().count());
    let mut a = s1.chars();
    let mut b = s2.chars();
    (0..width).map(move |_| (a.next(), b.next()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_shorter_side_only() {
        let (a, b) = align_strings("AB12CD", "AB12CD99", ' ');
        assert_eq!(a, "AB12CD  ");
        assert_eq!(b, "AB12CD99");

        let (a, b) = align_strings("LONGER1", "SHORT", '_');
        assert_eq!(a, "LONGER1");
        assert_eq!(b, "SHORT__");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let (a, b) = align_strings("ÄÖÜ", "ABCD", ' ');
        assert_eq!(a.chars().count(), 4);
        assert_eq!(b.chars().count(), 4);
    }

    #[test]
    fn positions_mark_padding() {
        let positions: Vec<_> = aligned_positions("AB", "ABC").collect();
        assert_eq!(
            positions,
            vec![
                (Some('A'), Some('A')),
                (Some('B'), Some('B')),
                (None, Some('C')),
            ]
        );
    }
}
