use super::*;
use crate::i18n::{Lang, t};

#[test]
fn graduation_and_group5_take_only_core_subjects() {
    assert_eq!(ExamGroup::Graduation.subjects(), vec!["math", "englishSubject", "azRus"]);
    assert_eq!(ExamGroup::Group5.subjects(), ExamGroup::Graduation.subjects());
}

#[test]
fn specialised_groups_add_their_subjects_after_the_core() {
    assert_eq!(
        ExamGroup::Group1.subjects(),
        vec!["math", "englishSubject", "azRus", "physics", "informaticsChemistry"]
    );
    assert_eq!(ExamGroup::Group2.subjects()[3..], ["geography", "history"]);
    assert_eq!(ExamGroup::Group3.subjects()[3..], ["history", "literature"]);
    assert_eq!(ExamGroup::Group4.subjects()[3..], ["biology", "chemistry"]);
}

#[test]
fn every_label_and_subject_is_translated() {
    for group in ExamGroup::ALL {
        for key in std::iter::once(group.key()).chain(group.subjects()) {
            for lang in Lang::ALL {
                assert_ne!(t(lang, key), key, "{key} missing for {lang:?}");
            }
        }
    }
}
