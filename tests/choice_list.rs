//! Integration tests for choice list editing through `update`
//!
//! Covers id uniqueness, removal, toggling the correct choice, and the
//! default-selection rule.

mod common;

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{id_at, ids, model_with_choices, run, test_model};
use quiz_author::commands::Cmd;
use quiz_author::messages::{DocumentMsg, Msg};
use quiz_author::update::update;

// ============================================================================
// Structural edits
// ============================================================================

#[test]
fn test_random_edit_sequences_keep_ids_unique() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        let mut model = test_model();
        let mut adds = 0usize;
        let mut removes = 0usize;
        let mut ever_seen = HashSet::new();

        for _ in 0..200 {
            let len = model.document.len();
            match rng.gen_range(0..4) {
                0 | 3 => {
                    update(&mut model, Msg::add_choice());
                    adds += 1;
                    let new_id = id_at(&model, model.document.len() - 1);
                    assert!(ever_seen.insert(new_id), "id reused");
                }
                1 if len > 0 => {
                    let id = id_at(&model, rng.gen_range(0..len));
                    if update(&mut model, Msg::remove_choice(id)).is_some() {
                        removes += 1;
                    }
                }
                2 if len > 0 => {
                    let from = rng.gen_range(0..len);
                    let to = rng.gen_range(0..len);
                    update(&mut model, Msg::reorder(from, to));
                }
                _ => {
                    // Removing an unknown id is a no-op
                    assert!(update(&mut model, Msg::remove_choice("a-unknown")).is_none());
                }
            }

            let current = ids(&model);
            let unique: HashSet<_> = current.iter().collect();
            assert_eq!(unique.len(), current.len());
            assert_eq!(current.len(), adds - removes);
        }
    }
}

#[test]
fn test_add_appends_blank_choice() {
    let mut model = model_with_choices(2);
    update(&mut model, Msg::add_choice());
    let last = model.document.choices().last().unwrap();
    assert_eq!(last.text, "");
    assert_eq!(last.feedback, "");
    assert_eq!(model.document.len(), 3);
}

#[test]
fn test_add_returns_persist_and_redraw() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::add_choice()).unwrap();
    assert!(cmd.persists());
    assert!(cmd.needs_redraw());
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut model = model_with_choices(4);
    let before = ids(&model);
    update(&mut model, Msg::remove_choice(before[1].clone()));
    assert_eq!(
        ids(&model),
        vec![before[0].clone(), before[2].clone(), before[3].clone()]
    );
}

#[test]
fn test_reorder_inverse_restores_order() {
    for len in 2..6 {
        let mut model = model_with_choices(len);
        let original = ids(&model);
        for i in 0..len {
            for j in 0..len {
                update(&mut model, Msg::reorder(i, j));
                update(&mut model, Msg::reorder(j, i));
                assert_eq!(ids(&model), original, "reorder({i},{j}) on {len}");
            }
        }
    }
}

#[test]
fn test_out_of_range_reorder_is_ignored() {
    let mut model = model_with_choices(2);
    let before = ids(&model);
    assert!(update(&mut model, Msg::reorder(0, 5)).is_none());
    assert_eq!(ids(&model), before);
}

// ============================================================================
// Correct choice
// ============================================================================

#[test]
fn test_removing_correct_clears_it() {
    let mut model = model_with_choices(3);
    let correct = model.document.correct().unwrap().to_string();
    update(&mut model, Msg::remove_choice(correct));
    assert_eq!(model.document.correct(), None);
}

#[test]
fn test_removing_other_choice_keeps_correct() {
    let mut model = model_with_choices(3);
    let second = id_at(&model, 1);
    run(&mut model, [Msg::set_correct(second.clone())]);
    let third = id_at(&model, 2);
    update(&mut model, Msg::remove_choice(third));
    assert_eq!(model.document.correct(), Some(second.as_str()));
}

#[test]
fn test_set_correct_twice_clears() {
    let mut model = model_with_choices(2);
    let second = id_at(&model, 1);
    run(
        &mut model,
        [Msg::set_correct(second.clone()), Msg::set_correct(second)],
    );
    assert_eq!(model.document.correct(), None);
}

#[test]
fn test_set_correct_unknown_id_is_ignored() {
    let mut model = model_with_choices(1);
    assert!(update(&mut model, Msg::set_correct("a-nope")).is_none());
    assert_eq!(model.document.correct(), Some(id_at(&model, 0).as_str()));
}

#[test]
fn test_first_choice_becomes_correct() {
    let mut model = test_model();
    update(&mut model, Msg::add_choice());
    assert_eq!(model.document.correct(), Some(id_at(&model, 0).as_str()));
}

#[test]
fn test_cleared_correct_survives_field_edits() {
    let mut model = model_with_choices(1);
    let first = id_at(&model, 0);
    run(
        &mut model,
        [
            Msg::set_correct(first.clone()),
            Msg::set_text(first.clone(), "Blue"),
            Msg::set_feedback(first.clone(), "Hmm"),
            Msg::Document(DocumentMsg::SetHint("Look up".into())),
        ],
    );
    assert_eq!(model.document.correct(), None);
}

#[test]
fn test_cleared_correct_survives_more_adds() {
    let mut model = model_with_choices(1);
    let first = id_at(&model, 0);
    run(&mut model, [Msg::set_correct(first), Msg::add_choice()]);
    assert_eq!(model.document.correct(), None);
}

// ============================================================================
// Field edits
// ============================================================================

#[test]
fn test_update_unknown_choice_is_noop() {
    let mut model = model_with_choices(1);
    let before = model.document.clone();
    assert!(update(&mut model, Msg::set_text("a-missing", "x")).is_none());
    assert_eq!(model.document, before);
}

#[test]
fn test_scalar_fields_replace_unconditionally() {
    let mut model = test_model();
    let cmd = run(
        &mut model,
        [
            Msg::Document(DocumentMsg::SetQuestionText(String::new())),
            Msg::Document(DocumentMsg::SetHint("  spaced  ".into())),
            Msg::Document(DocumentMsg::SetRedirect("not a url".into())),
        ],
    );
    assert!(matches!(cmd, Some(Cmd::Batch(_))));
    assert_eq!(model.document.question_text, "");
    assert_eq!(model.document.hint, "  spaced  ");
    assert_eq!(model.document.redirect, "not a url");
}
