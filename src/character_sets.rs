const WORD: u8 = 0b001;
const URI_RESERVED: u8 = 0b010;
const HOST_DELIMITER: u8 = 0b100;

/// Byte classification for the component scanner and the URI codec.
/// Each entry is a bit set of `WORD`, `URI_RESERVED` and `HOST_DELIMITER`.
const CHAR_CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Word bytes: A-Z, a-z, 0-9, _
    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] |= WORD;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] |= WORD;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] |= WORD;
        i += 1;
    }
    table[b'_' as usize] |= WORD;

    // Escapes that decode to one of these bytes are left as written
    let reserved = b";/?:@&=+$,#";
    let mut i = 0;
    while i < reserved.len() {
        table[reserved[i] as usize] |= URI_RESERVED;
        i += 1;
    }

    // Bytes that end a host
    table[b'/' as usize] |= HOST_DELIMITER;
    table[b':' as usize] |= HOST_DELIMITER;

    table
};

/// Check if a byte is an ASCII word character (`[A-Za-z0-9_]`)
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    CHAR_CLASS_TABLE[b as usize] & WORD != 0
}

/// Check if a byte belongs to the reserved set that URI decoding keeps escaped
#[inline]
pub fn is_uri_reserved(b: u8) -> bool {
    CHAR_CLASS_TABLE[b as usize] & URI_RESERVED != 0
}

/// Check if a byte terminates a host (`/` or `:`)
#[inline]
pub fn is_host_delimiter(b: u8) -> bool {
    CHAR_CLASS_TABLE[b as usize] & HOST_DELIMITER != 0
}

/// Value of an ASCII hex digit
#[inline]
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
