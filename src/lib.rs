//! modalpha polyalphabetic substitution cipher.
//!
//! Implements a Vigenère-style cipher over the 33-letter Russian alphabet
//! (А–Я including Ё). A [`Cipher`] is constructed from a textual key and
//! exposes two symmetric operations, [`encrypt`](Cipher::encrypt) and
//! [`decrypt`](Cipher::decrypt), that substitute character-for-character
//! with the key repeated cyclically.
//!
//! This is a teaching cipher: it offers no cryptographic strength.
//!
//! # Architecture
//!
//! ```text
//! alphabet  (fixed 33-letter table — position/letter lookups)
//!     ↕ used by
//! Cipher    (owns the key as alphabet indices — encrypt / decrypt)
//! ```
//!
//! All text is normalized to uppercase before validation; input containing
//! any character outside the alphabet is rejected before any output is
//! produced.
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use modalpha::Cipher;
//!
//! let cipher = Cipher::new("КЛЮЧ").unwrap();
//!
//! let encrypted = cipher.encrypt("ТЕКСТ").unwrap();
//! assert_eq!(encrypted, "ЭРИИЭ");
//!
//! let decrypted = cipher.decrypt(&encrypted).unwrap();
//! assert_eq!(decrypted, "ТЕКСТ");
//! ```
//!
//! Lowercase input is accepted and normalized:
//!
//! ```
//! use modalpha::Cipher;
//!
//! let cipher = Cipher::new("ключ").unwrap();
//! assert_eq!(cipher.encrypt("текст").unwrap(), "ЭРИИЭ");
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
mod cipher;

pub use cipher::Cipher;
