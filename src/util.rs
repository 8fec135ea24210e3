// Word-level casing helpers shared by the renderers. Every renderer first
// throws away the word's internal casing, so each helper starts from the
// lowercased word and only then applies the first-letter rule. The first
// character may be multi-byte, so it is recased as a char, never as a byte
// slice.

pub(crate) fn titlecase_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => lower,
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn titlecase_word() {
        let tests = [
            ("dog", "Dog"),
            ("DOG", "Dog"),
            ("Dog", "Dog"),
            ("dOG", "Dog"),
            ("x", "X"),
            ("id9", "Id9"),
            ("9id", "9id"),
            ("über", "Über"),
            ("ÜBER", "Über"),
            ("é", "É"),
        ];
        for test in tests {
            assert_eq!(super::titlecase_word(test.0), test.1);
        }
    }
}
