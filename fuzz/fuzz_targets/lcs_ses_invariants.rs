#![no_main]

use lcs_chain::{lcs, ses, Edit};
use libfuzzer_sys::fuzz_target;

/// Replays a fuzzer-found edit script against `a`, consulting `b` for
/// inserted content, and returns the resulting sequence.
fn apply(a: &[u8], b: &[u8], edits: &[Edit]) -> Vec<u8> {
    let mut result = Vec::new();
    let mut a_idx = 0usize;
    for edit in edits {
        match *edit {
            Edit::Delete { a_pos, range, .. } => {
                while a_idx < a_pos as usize {
                    result.push(a[a_idx]);
                    a_idx += 1;
                }
                a_idx += range as usize;
            }
            Edit::Insert {
                a_pos,
                b_pos,
                range,
            } => {
                while a_idx < a_pos as usize {
                    result.push(a[a_idx]);
                    a_idx += 1;
                }
                result.extend_from_slice(&b[b_pos as usize..(b_pos + range) as usize]);
            }
        }
    }
    result.extend_from_slice(&a[a_idx..]);
    result
}

/// Exercises both `lcs` and `ses` over arbitrary byte sequences and checks
/// the invariants documented on the public API: every reported match is
/// actually equal in both sequences, and replaying a SES against `a`
/// reconstructs `b` whenever the traversal completed without hitting the
/// candidate store's capacity ceiling.
fn do_fuzz(data: &[u8]) {
    if data.len() < 2 {
        return;
    }
    let split = data[0] as usize % data.len();
    let a = &data[1..split.max(1)];
    let b = &data[split.max(1)..];
    if a.is_empty() || b.is_empty() {
        return;
    }

    if let Ok(outcome) = lcs(a, b) {
        for m in &outcome.result {
            for i in 0..m.length {
                assert_eq!(a[(m.a_start + i) as usize], b[(m.b_start + i) as usize]);
            }
        }
    }

    if let Ok(outcome) = ses(a, b) {
        if outcome.is_complete() {
            assert_eq!(apply(a, b, &outcome.result), b);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    do_fuzz(data);
});
