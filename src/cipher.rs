//! Cipher: polyalphabetic substitution over the fixed 33-letter alphabet.
//!
//! The key text is validated and converted to alphabet indices once, at
//! construction. Both transforms validate their input eagerly, convert it
//! to an index sequence, combine it with the cyclically repeated key modulo
//! the alphabet size, and map the result back to letters.

use log::{debug, trace};

use crate::alphabet;
use crate::error::CipherError;

/// Polyalphabetic substitution cipher with an owned numeric key.
///
/// Immutable after construction: the key is derived once by
/// [`new`](Self::new) and both transforms take `&self`, so an instance is
/// safe to share across callers without synchronization.
///
/// Key material is cleared when the instance is dropped.
pub struct Cipher {
    key: Vec<u8>,
}

impl Cipher {
    /// Creates a new Cipher from a textual key.
    ///
    /// The key is normalized to uppercase and converted to a sequence of
    /// alphabet indices. During encryption and decryption the sequence is
    /// repeated cyclically over the length of the text.
    ///
    /// # Parameters
    /// - `key_text`: The key. Must be non-empty and contain only alphabet
    ///   letters (either case).
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the key is empty or contains
    /// a character outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use modalpha::Cipher;
    ///
    /// let cipher = Cipher::new("КЛЮЧ").unwrap();
    /// assert_eq!(cipher.encrypt("ТЕКСТ").unwrap(), "ЭРИИЭ");
    /// ```
    ///
    /// ```
    /// use modalpha::Cipher;
    ///
    /// assert!(Cipher::new("").is_err());
    /// assert!(Cipher::new("КЛЮЧ1").is_err());
    /// ```
    pub fn new(key_text: &str) -> Result<Self, CipherError> {
        let key = text_to_indices(key_text)
            .map_err(|c| CipherError::InvalidKey(not_in_alphabet(c)))?;
        if key.is_empty() {
            return Err(CipherError::InvalidKey("must not be empty".into()));
        }
        debug!("derived key of {} alphabet indices", key.len());
        Ok(Cipher { key })
    }

    /// Encrypts open text.
    ///
    /// Each character at position `i` is replaced by the letter at
    /// `(p[i] + key[i mod key_len]) mod 33`. The output has the same number
    /// of characters as the input and consists of uppercase letters only.
    ///
    /// # Parameters
    /// - `open_text`: The text to encrypt. Must be non-empty and contain
    ///   only alphabet letters (either case).
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidPlainText`] if the text is empty or
    /// contains a character outside the alphabet (whitespace, punctuation,
    /// digits, non-alphabet letters).
    ///
    /// # Examples
    ///
    /// ```
    /// use modalpha::Cipher;
    ///
    /// let cipher = Cipher::new("КЛЮЧ").unwrap();
    /// assert_eq!(cipher.encrypt("привет").unwrap(), cipher.encrypt("ПРИВЕТ").unwrap());
    /// assert!(cipher.encrypt("С ПРОБЕЛОМ").is_err());
    /// ```
    pub fn encrypt(&self, open_text: &str) -> Result<String, CipherError> {
        let plain = text_to_indices(open_text)
            .map_err(|c| CipherError::InvalidPlainText(not_in_alphabet(c)))?;
        if plain.is_empty() {
            return Err(CipherError::InvalidPlainText("must not be empty".into()));
        }
        trace!("encrypting {} characters", plain.len());
        let encrypted: Vec<u8> = plain
            .iter()
            .enumerate()
            .map(|(i, &p)| (p + self.key_at(i)) % alphabet::SIZE)
            .collect();
        Ok(indices_to_text(&encrypted))
    }

    /// Decrypts cipher text.
    ///
    /// Exact inverse of [`encrypt`](Self::encrypt) for the same key: each
    /// character at position `i` is replaced by the letter at
    /// `(c[i] + 33 - key[i mod key_len]) mod 33`. The modulus is added
    /// before the remainder so the subtraction never underflows.
    ///
    /// # Parameters
    /// - `cipher_text`: The text to decrypt. Must be non-empty and contain
    ///   only alphabet letters (either case).
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidCipherText`] if the text is empty or
    /// contains a character outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use modalpha::Cipher;
    ///
    /// let cipher = Cipher::new("КЛЮЧ").unwrap();
    /// let encrypted = cipher.encrypt("ПРИВЕТ").unwrap();
    /// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ПРИВЕТ");
    /// ```
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let encrypted = text_to_indices(cipher_text)
            .map_err(|c| CipherError::InvalidCipherText(not_in_alphabet(c)))?;
        if encrypted.is_empty() {
            return Err(CipherError::InvalidCipherText("must not be empty".into()));
        }
        trace!("decrypting {} characters", encrypted.len());
        let plain: Vec<u8> = encrypted
            .iter()
            .enumerate()
            .map(|(i, &c)| (c + alphabet::SIZE - self.key_at(i)) % alphabet::SIZE)
            .collect();
        Ok(indices_to_text(&plain))
    }

    /// Returns the key index for text position `i`, repeating the key
    /// cyclically.
    fn key_at(&self, i: usize) -> u8 {
        self.key[i % self.key.len()]
    }
}

impl Drop for Cipher {
    /// Clears the key indices on drop.
    fn drop(&mut self) {
        for k in self.key.iter_mut() {
            *k = 0;
        }
    }
}

/// Maps text to its alphabet index sequence.
///
/// Normalizes to uppercase first. Empty input yields an empty sequence;
/// the caller decides whether that is an error.
///
/// # Returns
/// The index sequence, or the first character (after uppercasing) that is
/// not in the alphabet.
fn text_to_indices(text: &str) -> Result<Vec<u8>, char> {
    let mut indices = Vec::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_uppercase) {
        match alphabet::position(c) {
            Some(index) => indices.push(index),
            None => return Err(c),
        }
    }
    Ok(indices)
}

/// Maps an alphabet index sequence back to text.
///
/// Total over validated input: every index must be in 0..=32.
fn indices_to_text(indices: &[u8]) -> String {
    indices.iter().map(|&i| alphabet::letter(i)).collect()
}

/// Builds the rejection message for a character outside the alphabet.
fn not_in_alphabet(c: char) -> String {
    format!("character '{}' is not in the alphabet", c)
}
