//! Naming scheme for archived checkpoint files.
//!
//! A checkpoint sequence number renders as 8 lowercase hex digits, and the
//! first three bytes of that rendering pick a 3-level shard directory. Each
//! level fans out to at most 256 children, so no single directory grows
//! without bound as checkpoints accumulate.
//!
//! Names are archive-facing strings joined with `/`, not OS paths.

pub const CHECKPOINT_HEX_LEN: usize = 8;

const SHARD_PREFIX_LEN: usize = 6;

/// Render a checkpoint sequence number as zero-padded lowercase hex.
/// Lexicographic order of the rendering matches numeric order.
pub fn checkpoint_hex(seq: u32) -> String {
    format!("{:08x}", seq)
}

/// Shard directory for a checkpoint hex string, e.g. `"1a2b3c4d"` maps to
/// `"1a/2b/3c"`.
///
/// Panics when the first six characters are not hex digits; callers are
/// expected to pass strings produced by [`checkpoint_hex`].
pub fn shard_dir(hex: &str) -> String {
    let bytes = hex.as_bytes();
    assert!(
        bytes.len() >= SHARD_PREFIX_LEN
            && bytes[..SHARD_PREFIX_LEN].iter().all(|b| b.is_ascii_hexdigit()),
        "malformed checkpoint hex: {hex}"
    );
    format!("{}/{}/{}", &hex[0..2], &hex[2..4], &hex[4..6])
}

pub fn base_name(kind: &str, hex: &str, suffix: &str) -> String {
    format!("{}-{}.{}", kind, hex, suffix)
}

pub fn remote_dir(kind: &str, hex: &str) -> String {
    format!("{}/{}", kind, shard_dir(hex))
}

pub fn remote_name(kind: &str, hex: &str, suffix: &str) -> String {
    format!("{}/{}", remote_dir(kind, hex), base_name(kind, hex, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_hex_is_padded_lowercase() {
        assert_eq!(checkpoint_hex(0x1a2b3c4d), "1a2b3c4d");
        assert_eq!(checkpoint_hex(0), "00000000");
        assert_eq!(checkpoint_hex(63), "0000003f");
        assert_eq!(checkpoint_hex(u32::MAX), "ffffffff");
    }

    #[test]
    fn checkpoint_hex_round_trips() {
        for seq in [0u32, 1, 0xff, 0x0102_0304, 0x1a2b_3c4d, u32::MAX] {
            let hex = checkpoint_hex(seq);
            assert_eq!(hex.len(), CHECKPOINT_HEX_LEN);
            assert!(hex
                .bytes()
                .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
            assert_eq!(u32::from_str_radix(&hex, 16).expect("hex parse"), seq);
        }
    }

    #[test]
    fn checkpoint_hex_orders_like_numbers() {
        let seqs = [0u32, 1, 0xff, 0x100, 0xffff, 0x0001_0000, u32::MAX];
        for pair in seqs.windows(2) {
            assert!(checkpoint_hex(pair[0]) < checkpoint_hex(pair[1]));
        }
    }

    #[test]
    fn shard_dir_splits_first_three_bytes() {
        assert_eq!(shard_dir("1a2b3c4d"), "1a/2b/3c");
        assert_eq!(shard_dir("00000000"), "00/00/00");
        assert_eq!(shard_dir("ffffffff"), "ff/ff/ff");
    }

    #[test]
    fn base_and_remote_names() {
        assert_eq!(base_name("ledger", "1a2b3c4d", "xdr"), "ledger-1a2b3c4d.xdr");
        assert_eq!(remote_dir("ledger", "1a2b3c4d"), "ledger/1a/2b/3c");
        assert_eq!(
            remote_name("ledger", "1a2b3c4d", "xdr"),
            "ledger/1a/2b/3c/ledger-1a2b3c4d.xdr"
        );
    }

    #[test]
    fn remote_name_composes_dir_and_base() {
        for seq in [0u32, 63, 0x1a2b_3c4d, u32::MAX] {
            let hex = checkpoint_hex(seq);
            let composed = format!(
                "{}/{}",
                remote_dir("transactions", &hex),
                base_name("transactions", &hex, "xdr")
            );
            assert_eq!(remote_name("transactions", &hex, "xdr"), composed);
        }
    }

    #[test]
    #[should_panic(expected = "malformed checkpoint hex")]
    fn shard_dir_rejects_short_input() {
        shard_dir("1a2b3");
    }

    #[test]
    #[should_panic(expected = "malformed checkpoint hex")]
    fn shard_dir_rejects_non_hex() {
        shard_dir("1a2g3c4d");
    }
}
