//! Property-based tests for the adapter and session guarantees.

use proptest::prelude::*;
use slotpaste_codec::CodecConfig;
use slotpaste_engine::{read_current, run_session, MemoryHost, Outcome, SessionConfig, SubjectId};

const START: i64 = 1_767_600_000;

/// A host with up to three days of slots and three subjects in random sets.
fn arb_host() -> impl Strategy<Value = MemoryHost> {
    (1usize..3, 1usize..40)
        .prop_flat_map(|(days, per_day)| {
            let slots = days * per_day;
            (
                Just((days, per_day)),
                prop::collection::vec(prop::collection::vec(any::<bool>(), 3), slots),
            )
        })
        .prop_map(|((days, per_day), marks)| {
            let times: Vec<i64> = (0..days as i64)
                .flat_map(|d| (0..per_day as i64).map(move |s| START + d * 86_400 + s * 900))
                .collect();
            let mut host = MemoryHost::new(times).with_user(1u64);
            for (slot, who) in marks.iter().enumerate() {
                for (id, &on) in who.iter().enumerate() {
                    if on {
                        host.available_at_slot[slot].push(SubjectId::from(id as u64 + 1));
                    }
                }
            }
            host
        })
}

fn unlimited() -> SessionConfig {
    SessionConfig {
        codec: CodecConfig {
            max_chars: None,
            ..CodecConfig::default()
        },
        ..SessionConfig::default()
    }
}

proptest! {
    /// Confirming the pre-filled text unchanged never changes the host.
    #[test]
    fn unedited_session_is_idempotent(host in arb_host()) {
        let mut h = host.clone();
        let mut editor = |_: &str, prefill: &str| Some(prefill.to_string());
        let outcome = run_session(&mut h, &mut editor, &unlimited());
        match outcome {
            Outcome::Applied(summary) => prop_assert_eq!(summary.changed(), 0),
            other => prop_assert!(false, "expected Applied, got {:?}", other),
        }
        prop_assert_eq!(&h.available_at_slot, &host.available_at_slot);
    }

    /// Whatever the person types, a rejected or cancelled session leaves the host as it was.
    #[test]
    fn failed_sessions_never_mutate(host in arb_host(), reply in "\\PC{0,40}") {
        let mut h = host.clone();
        let mut editor = |_: &str, _: &str| Some(reply.clone());
        let outcome = run_session(&mut h, &mut editor, &unlimited());
        if !outcome.is_applied() {
            prop_assert_eq!(h, host);
        }
    }

    /// Copying one subject's schedule onto another makes their views identical.
    #[test]
    fn copy_between_subjects(host in arb_host()) {
        let mut h = host.clone();
        let text = slotpaste_engine::export_text(&h, &unlimited()).unwrap();
        h.user_id = Some(SubjectId::from(2u64));
        slotpaste_engine::import_text(&mut h, &text).unwrap();
        prop_assert_eq!(
            read_current(&h, Some(&SubjectId::from(2u64))),
            read_current(&host, Some(&SubjectId::from(1u64)))
        );
    }
}
