/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Whitespace as far as trimming is concerned: Unicode whitespace and
/// control characters
pub fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

/// Host name character classification
/// Returns: 0=invalid, 1=valid, 2=uppercase
const HOST_CHAR_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 1;
        i += 1;
    }
    table[b'.' as usize] = 1;
    table[b'-' as usize] = 1;
    table[b'_' as usize] = 1;

    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 2;
        i += 1;
    }

    table
};

/// Check if a character may appear in a host name.
/// Non-ASCII characters are accepted as internationalized labels.
pub fn is_host_char(c: char) -> bool {
    if c.is_ascii() {
        HOST_CHAR_TABLE[c as usize] != 0
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

/// Characters allowed in the local part of an email address besides
/// ASCII alphanumerics. `/` is left out so `//user@host` stays a URL.
const EMAIL_LOCAL_SPECIALS: &[u8] = b".!#$%&'*+=?^_`{|}~-";

pub fn is_email_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(&b)
}

/// Separators tolerated between the digits of a phone number
pub fn is_phone_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '.' | '(' | ')' | '/')
}
