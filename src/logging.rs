//! Log value helpers
//!
//! Length truncation for prompts and token ids, and masking of datastore keys
//! before they are printed.

use std::borrow::Cow;
use std::fmt;

/// Keep at most `max_log_len` leading characters of `prompt`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
///
/// # Example
/// ```
/// use request_log::logging::truncate_prompt;
///
/// assert_eq!(truncate_prompt("hello world", Some(5)), "hello");
/// assert_eq!(truncate_prompt("hello world", None), "hello world");
/// ```
pub fn truncate_prompt(prompt: &str, max_log_len: Option<usize>) -> Cow<'_, str> {
    let Some(max_len) = max_log_len else {
        return Cow::Borrowed(prompt);
    };

    match prompt.char_indices().nth(max_len) {
        Some((byte_idx, _)) => Cow::Owned(prompt[..byte_idx].to_string()),
        None => Cow::Borrowed(prompt),
    }
}

/// Keep at most `max_log_len` leading token ids.
pub fn truncate_token_ids(ids: &[u32], max_log_len: Option<usize>) -> &[u32] {
    match max_log_len {
        Some(max_len) if ids.len() > max_len => &ids[..max_len],
        _ => ids,
    }
}

/// Masked datastore key
///
/// Only the first 8 characters are shown, the rest becomes `***`
#[derive(Clone, Debug)]
pub struct SensitiveKey<'a> {
    inner: &'a str,
}

impl<'a> SensitiveKey<'a> {
    /// # Example
    /// ```
    /// use request_log::logging::SensitiveKey;
    ///
    /// let key = "eyJhbGciOiJIUzI1NiJ9.payload";
    /// assert_eq!(format!("{}", SensitiveKey::new(key)), "eyJhbGci***");
    /// ```
    pub fn new(key: &'a str) -> Self {
        Self { inner: key }
    }
}

impl fmt::Display for SensitiveKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const VISIBLE: usize = 8;
        match self.inner.char_indices().nth(VISIBLE) {
            // Too short, mask all of it
            None => write!(f, "***"),
            Some((byte_idx, _)) => write!(f, "{}***", &self.inner[..byte_idx]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_prompt() {
        assert_eq!(truncate_prompt("hello world", Some(5)), "hello");
        assert_eq!(truncate_prompt("hi", Some(5)), "hi");
        assert_eq!(truncate_prompt("hello", Some(5)), "hello");
        assert_eq!(truncate_prompt("hello", Some(0)), "");
    }

    #[test]
    fn test_truncate_prompt_none_borrows() {
        let prompt = "a".repeat(10_000);
        let result = truncate_prompt(&prompt, None);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.len(), 10_000);
    }

    #[test]
    fn test_truncate_prompt_multibyte() {
        // 4 characters, 12 bytes
        assert_eq!(truncate_prompt("日本語文", Some(2)), "日本");
        assert_eq!(truncate_prompt("héllo", Some(2)), "hé");
    }

    #[test]
    fn test_truncate_token_ids() {
        let ids = [1, 2, 3, 4, 5, 6];
        assert_eq!(truncate_token_ids(&ids, Some(3)), &[1, 2, 3]);
        assert_eq!(truncate_token_ids(&ids, Some(10)), &ids);
        assert_eq!(truncate_token_ids(&ids, None), &ids);
        assert!(truncate_token_ids(&ids, Some(0)).is_empty());
    }

    #[test]
    fn test_sensitive_key_short() {
        assert_eq!(format!("{}", SensitiveKey::new("anon")), "***");
        assert_eq!(format!("{}", SensitiveKey::new("12345678")), "***");
    }

    #[test]
    fn test_sensitive_key_long() {
        assert_eq!(format!("{}", SensitiveKey::new("123456789")), "12345678***");
    }

    proptest! {
        #[test]
        fn prop_truncated_prompt_never_exceeds_limit(prompt in ".*", max_len in 0usize..64) {
            let result = truncate_prompt(&prompt, Some(max_len));
            prop_assert!(result.chars().count() <= max_len);
            prop_assert!(prompt.starts_with(&*result));
        }

        #[test]
        fn prop_short_prompt_unchanged(prompt in ".{0,16}", extra in 0usize..16) {
            let max_len = prompt.chars().count() + extra;
            prop_assert_eq!(truncate_prompt(&prompt, Some(max_len)), prompt.as_str());
        }

        #[test]
        fn prop_none_never_truncates(prompt in ".*", ids in proptest::collection::vec(any::<u32>(), 0..128)) {
            prop_assert_eq!(truncate_prompt(&prompt, None), prompt.as_str());
            prop_assert_eq!(truncate_token_ids(&ids, None), ids.as_slice());
        }

        #[test]
        fn prop_token_ids_prefix(ids in proptest::collection::vec(any::<u32>(), 0..128), max_len in 0usize..64) {
            let result = truncate_token_ids(&ids, Some(max_len));
            prop_assert!(result.len() <= max_len);
            prop_assert_eq!(result, &ids[..result.len()]);
            if ids.len() <= max_len {
                prop_assert_eq!(result.len(), ids.len());
            }
        }
    }
}
