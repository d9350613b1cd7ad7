use std::sync::LazyLock;

use regex::Regex;

// Loose on purpose: local part, '@', domain containing a dot. No whitespace
// or extra '@' anywhere. Whitespace is the ECMAScript `\s` set, which differs
// from Unicode White_Space (it has U+FEFF and lacks U+0085).
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = r"[^@\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]+";
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("static regex should not panic")
});

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_addresses() {
        for email in [
            "a@b.co",
            "ann@example.com",
            "first.last+tag@sub.domain.org",
            "a@b.c.d",
            "имя@пример.рф",
            "a@b..c",
            "a\u{85}b@c.co",
            "a@b.c\u{200B}",
        ] {
            assert!(validate_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "a@b",
            "a b@c.co",
            "@b.co",
            "a@.co",
            "a@b.",
            "a@@b.co",
            "a@b@c.co",
            "ann@example.com ",
            " ann@example.com",
            "ann@exa\tmple.com",
            "bad-email",
            "a\u{FEFF}b@c.co",
            "a\u{A0}b@c.co",
            "a@b.c\u{3000}",
            "a@b\u{2028}.co",
        ] {
            assert!(!validate_email(email), "{email:?} should be rejected");
        }
    }
}
