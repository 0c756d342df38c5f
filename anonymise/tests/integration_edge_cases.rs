//! Edge-case coverage for string anonymisers and walk failures.
//!
//! These tests focus on byte-versus-character lengths, empty inputs, deep
//! nesting, and what an in-place walk leaves behind when it fails midway.

use anonymise::{
    anonymise, anonymise_by_ref, anonymise_copied, empty, sha512, sha512_digest, stars,
    stars_with_len, with_info, AnonError, Anonymise, CopyError,
};

#[test]
fn test_empty_string() {
    assert_eq!(stars(""), "****");
    assert_eq!(empty(""), "");
    assert_eq!(stars_with_len(""), "");
    assert_eq!(with_info(""), "len:0,is_ascii:true");
    assert_eq!(sha512("").chars().count(), 64);
}

#[test]
fn test_stars_with_len_counts_bytes() {
    // "秘密" is 2 characters but 6 bytes.
    assert_eq!(stars_with_len("秘密"), "******");
    assert_eq!(stars_with_len("secret🔒"), "**********");
}

#[test]
fn test_with_info_counts_bytes() {
    assert_eq!(with_info("秘密"), "len:6,is_ascii:false");
    assert_eq!(with_info("á"), "len:2,is_ascii:false");
    assert_eq!(with_info("plain"), "len:5,is_ascii:true");
}

#[test]
fn test_sha512_one_char_per_digest_byte() {
    let hashed = sha512("hash me please");
    let digest = sha512_digest("hash me please");

    let bytes: Vec<u8> = hashed.chars().map(|c| u8::try_from(c).unwrap()).collect();
    assert_eq!(bytes, digest);
    assert_eq!(sha512("hash me please"), hashed);
    assert_ne!(sha512("hash me please!"), hashed);
}

#[test]
fn test_sha512_utf8_length_depends_on_high_bytes() {
    for input in ["x", "hash me please", ""] {
        let hashed = sha512(input);
        let high = sha512_digest(input).iter().filter(|byte| **byte >= 0x80).count();

        assert_eq!(hashed.chars().count(), 64);
        assert_eq!(hashed.len(), 64 + high);
    }
}

#[derive(Clone, Anonymise)]
#[anon(skip_debug)]
struct Node {
    #[anon("stars")]
    label: String,
    children: Vec<Node>,
}

fn chain(depth: usize) -> Node {
    let mut node = Node {
        label: format!("leaf-{depth}"),
        children: Vec::new(),
    };
    for level in (0..depth).rev() {
        node = Node {
            label: format!("level-{level}"),
            children: vec![node],
        };
    }
    node
}

#[test]
fn test_deeply_nested_records() {
    let anonymised = anonymise(&chain(32)).unwrap();
    let mut node = &anonymised;
    loop {
        assert_eq!(node.label, "****");
        match node.children.first() {
            Some(child) => node = child,
            None => break,
        }
    }
}

#[derive(Clone, Anonymise)]
#[anon(skip_debug)]
struct Partial {
    #[anon("stars")]
    first: String,
    #[anon("nope")]
    second: String,
    #[anon("stars")]
    third: String,
}

fn partial() -> Partial {
    Partial {
        first: "a".into(),
        second: "b".into(),
        third: "c".into(),
    }
}

#[test]
fn test_in_place_failure_keeps_earlier_rewrites() {
    let mut value = partial();
    let err = anonymise_by_ref(&mut value).unwrap_err();

    assert_eq!(err.tag(), Some("nope"));
    assert_eq!(value.first, "****");
    assert_eq!(value.second, "b");
    assert_eq!(value.third, "c");
}

#[test]
fn test_copy_failure_leaves_original_intact() {
    let value = partial();
    assert!(anonymise(&value).is_err());
    assert_eq!(value.first, "a");
}

#[test]
fn test_first_error_wins() {
    #[derive(Clone, Anonymise)]
    #[anon(skip_debug)]
    struct TwoBad {
        #[anon("first_bad")]
        a: String,
        #[anon("second_bad")]
        b: String,
    }

    let err = anonymise(&TwoBad {
        a: "a".into(),
        b: "b".into(),
    })
    .err()
    .unwrap();
    assert_eq!(err.tag(), Some("first_bad"));
}

#[test]
fn test_custom_copier() {
    let value = partial();
    let err = anonymise_copied(&value, |_| Err::<Partial, _>("copy refused"))
        .err()
        .unwrap();
    assert!(matches!(err, CopyError::Copy("copy refused")));

    #[derive(Clone, Anonymise)]
    #[anon(skip_debug)]
    struct Plain {
        #[anon("empty")]
        secret: String,
    }

    let copied = anonymise_copied(
        &Plain {
            secret: "s".into(),
        },
        |value| Ok::<_, std::convert::Infallible>(value.clone()),
    )
    .unwrap();
    assert_eq!(copied.secret, "");

    let err = anonymise_copied(&value, |value| {
        Ok::<_, std::convert::Infallible>(value.clone())
    })
    .err()
    .unwrap();
    assert!(matches!(err, CopyError::Anonymise(AnonError::UnknownTag { .. })));
}

#[test]
fn test_hand_written_walk_error_propagates() {
    struct Locked;

    impl Anonymise for Locked {
        fn walk(&mut self, _tag: &str) -> Result<(), AnonError> {
            Err(AnonError::walk("value is locked", "poisoned"))
        }
    }

    #[derive(Anonymise)]
    #[anon(skip_debug)]
    struct Holder {
        #[anon("stars")]
        before: String,
        locked: Locked,
    }

    let mut holder = Holder {
        before: "x".into(),
        locked: Locked,
    };
    let err = anonymise_by_ref(&mut holder).unwrap_err();
    assert_eq!(err.to_string(), "anon: value is locked");
    assert_eq!(err.tag(), None);
    assert_eq!(holder.before, "****");
}
