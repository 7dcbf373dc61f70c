use fieldguide_core::{LifecycleAction, PageTransition};

#[test]
fn real_unload_unmounts() {
    let hide = PageTransition::Hide { persisted: false };
    assert_eq!(hide.action(true), LifecycleAction::Unmount);
    assert_eq!(hide.action(false), LifecycleAction::Keep);
}

#[test]
fn back_forward_cache_keeps_effects() {
    let hide = PageTransition::Hide { persisted: true };
    assert_eq!(hide.action(true), LifecycleAction::Keep);
    let restore = PageTransition::Show { persisted: true };
    assert_eq!(restore.action(true), LifecycleAction::Keep);
}

#[test]
fn restored_page_without_effects_remounts() {
    let restore = PageTransition::Show { persisted: true };
    assert_eq!(restore.action(false), LifecycleAction::Mount);
}

#[test]
fn first_show_does_not_double_mount() {
    let show = PageTransition::Show { persisted: false };
    assert_eq!(show.action(true), LifecycleAction::Keep);
    assert_eq!(show.action(false), LifecycleAction::Keep);
}
