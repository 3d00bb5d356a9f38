//! The fixed 33-letter cipher alphabet.
//!
//! Cyrillic majuscules А–Я with Ё inserted at position 6, giving a bijective
//! mapping between letters and positions 0..=32. Position lookup is code
//! point arithmetic: А–Я occupy the contiguous range U+0410..=U+042F, and Ё
//! (U+0401) is special-cased.

/// Number of letters in the alphabet.
pub(crate) const SIZE: u8 = 33;

/// The alphabet in position order. Position `i` holds the letter mapped
/// to index `i`.
pub(crate) const LETTERS: [char; SIZE as usize] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Returns the alphabet position of an uppercase letter.
///
/// # Parameters
/// - `c`: An already-uppercased character.
///
/// # Returns
/// The position in 0..=32, or `None` if the character is not in the alphabet.
pub(crate) fn position(c: char) -> Option<u8> {
    match c {
        'Ё' => Some(6),
        'А'..='Е' => Some((c as u32 - 'А' as u32) as u8),
        // Ж and up shift one position to make room for Ё.
        'Ж'..='Я' => Some((c as u32 - 'А' as u32) as u8 + 1),
        _ => None,
    }
}

/// Returns the letter at the given alphabet position.
///
/// Total over validated input: every index produced by [`position`] maps
/// back to its letter.
///
/// # Parameters
/// - `index`: Alphabet position in 0..=32.
pub(crate) fn letter(index: u8) -> char {
    LETTERS[index as usize]
}
