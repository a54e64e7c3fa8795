//! Note identity digests
//!
//! `path_hash` keys a note by its vault-relative path and survives encoding
//! differences between clients; `content_hash` lets the server detect
//! unchanged content on save. Both are SHA-256 over the UTF-8 bytes of the
//! input, hex encoded. The server recomputes both and must agree, so these
//! are pure functions with no I/O and no configuration.

use sha2::{Digest, Sha256};

/// Digest of a note's vault-relative path.
pub fn path_hash(path: &str) -> String {
    digest(path.as_bytes())
}

/// Digest of a note's full content.
pub fn content_hash(content: &str) -> String {
    digest(content.as_bytes())
}

fn digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_path_hash_is_deterministic() {
        assert_eq!(path_hash("daily/2024-01-01.md"), path_hash("daily/2024-01-01.md"));
    }

    #[test]
    fn test_known_digest() {
        // SHA-256 of the empty string
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_no_collisions_across_path_corpus() {
        let paths = [
            "note.md",
            "note.md ",
            "Note.md",
            "notes/note.md",
            "notes/note.md.md",
            "daily/2024-01-01.md",
            "daily/2024-01-02.md",
            "附件/图表.md",
            "deep/ly/nest/ed/path.md",
            "",
        ];

        let hashes: HashSet<String> = paths.iter().map(|p| path_hash(p)).collect();
        assert_eq!(hashes.len(), paths.len());
    }

    #[test]
    fn test_path_and_content_hash_agree_on_equal_bytes() {
        // Same digest function; the distinction is purely semantic.
        assert_eq!(path_hash("abc"), content_hash("abc"));
    }
}
