#![allow(clippy::all)]

use afl::fuzz;
use arbitrary::Arbitrary;
use seqmatch::{OpcodeTag, SequenceMatcher};

#[derive(Arbitrary, Debug)]
enum FuzzVariant {
    Bytes(Vec<u8>, Vec<u8>),
    Text(String, String),
    Reassign(Vec<u8>, Vec<u8>, Vec<u8>),
}

#[derive(Arbitrary, Debug)]
struct FuzzOptions {
    autojunk: bool,
    junk: Option<u8>,
    variant: FuzzVariant,
}

fn check<T: std::hash::Hash + Eq + Clone>(m: &mut SequenceMatcher<'_, T>) {
    let (a, b) = (m.a(), m.b());
    let blocks = m.matching_blocks().to_vec();
    let last = blocks[blocks.len() - 1];
    assert_eq!((last.a, last.b, last.size), (a.len(), b.len(), 0));
    for pair in blocks.windows(2) {
        assert!(pair[0].a + pair[0].size <= pair[1].a);
        assert!(pair[0].b + pair[0].size <= pair[1].b);
        assert!(a[pair[0].a_range()] == b[pair[0].b_range()]);
    }

    let mut rebuilt = Vec::new();
    for op in m.opcodes() {
        match op.tag {
            OpcodeTag::Equal => rebuilt.extend_from_slice(&a[op.a_range()]),
            OpcodeTag::Delete => {}
            OpcodeTag::Insert | OpcodeTag::Replace => rebuilt.extend_from_slice(&b[op.b_range()]),
        }
    }
    assert!(rebuilt == b);

    let ratio = m.ratio();
    assert!(ratio <= m.quick_ratio());
    assert!(m.quick_ratio() <= m.real_quick_ratio());
}

fn main() {
    fuzz!(|data: FuzzOptions| {
        let autojunk = data.autojunk;
        let junk = data.junk;
        match data.variant {
            FuzzVariant::Bytes(a, b) => {
                let mut config = SequenceMatcher::configure();
                config.autojunk(autojunk);
                if let Some(junk) = junk {
                    config.junk_filter(move |x: &u8| *x == junk);
                }
                check(&mut config.matcher(&a, &b));
            }
            FuzzVariant::Text(a, b) => {
                let a = a.chars().collect::<Vec<_>>();
                let b = b.chars().collect::<Vec<_>>();
                let mut config = SequenceMatcher::configure();
                config.autojunk(autojunk);
                check(&mut config.matcher(&a, &b));
            }
            FuzzVariant::Reassign(a, b, c) => {
                let mut m = SequenceMatcher::configure()
                    .autojunk(autojunk)
                    .matcher(&a, &b);
                check(&mut m);
                m.set_seq1(&c);
                check(&mut m);
                m.set_seq2(&a);
                check(&mut m);
            }
        };
    });
}
